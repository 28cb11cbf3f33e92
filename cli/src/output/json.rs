//! JSON output helpers.
//!
//! Both tools write a single pretty-printed (2-space indent) JSON object to
//! stdout, the shape `docker buildx bake` reads as variable files.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::image::ResolvedImage;

/// Serialize `value` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Build `{ name: "registry:tag@digest" }`, keeping the order of `locked`.
#[must_use]
pub fn image_lock_object(locked: &[(String, ResolvedImage)]) -> Map<String, Value> {
    locked
        .iter()
        .map(|(name, image)| (name.clone(), Value::String(image.to_string())))
        .collect()
}
