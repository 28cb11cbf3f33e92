//! Lock base images command: pin the newest matching tags to digests.
//!
//! Reads `{ name: { "registry": ..., "tagRegex": ... } }` from stdin and
//! prints `{ name: "registry:tag@digest" }`.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tokio::io::AsyncReadExt;

use crate::application::ports::RegistryClient;
use crate::application::services::image_lock::lock_images;
use crate::domain::image::ImageConstraint;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::crane::CraneClient;
use crate::output::json;

/// Parse the constraint document, keeping its key order.
///
/// # Errors
///
/// Returns an error if the input is not a JSON object or an entry is not a
/// valid constraint.
pub fn parse_images(input: &str) -> Result<Vec<(String, ImageConstraint)>> {
    let object: Map<String, Value> =
        serde_json::from_str(input).context("parsing image constraints")?;
    object
        .into_iter()
        .map(|(name, value)| -> Result<(String, ImageConstraint)> {
            let constraint = serde_json::from_value(value)
                .with_context(|| format!("invalid constraint for image '{name}'"))?;
            Ok((name, constraint))
        })
        .collect()
}

/// Lock every image in `input` against `registry` and render the result.
///
/// # Errors
///
/// Returns the first parse, registry, or validation error.
pub async fn render(registry: &impl RegistryClient, input: &str) -> Result<String> {
    let images = parse_images(input)?;
    let locked = lock_images(registry, &images).await?;
    json::to_pretty(&json::image_lock_object(&locked))
}

/// Run the command: stdin in, stdout out, `crane` as the registry tool.
///
/// # Errors
///
/// See [`render`]. Also fails if stdin cannot be read.
pub async fn run(crane: &str, timeout: Option<Duration>) -> Result<()> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("reading image constraints from stdin")?;

    let registry = CraneClient::new(TokioCommandRunner::new(timeout), crane);
    let out = render(&registry, &input).await?;
    println!("{out}");
    Ok(())
}
