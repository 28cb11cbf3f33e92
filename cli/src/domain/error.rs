//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Lockfile errors ───────────────────────────────────────────────────────────

/// Errors raised while reading versions out of a lockfile.
#[derive(Debug, Error)]
pub enum LockfileError {
    #[error("lockfile is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("package '{name}' not found in lockfile")]
    MissingPackage { name: String },
}

// ── Image errors ──────────────────────────────────────────────────────────────

/// Errors raised while selecting and pinning a base image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("invalid tag pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("tag pattern '{0}' has no capture groups to order tags by")]
    NoCaptureGroups(String),

    #[error("capture group {group} of tag '{tag}' is not a non-negative integer: {value:?}")]
    NonNumericGroup {
        tag: String,
        group: usize,
        value: Option<String>,
    },

    #[error(
        "tag '{tag}' captured {found} groups but earlier candidates captured {expected}"
    )]
    ArityMismatch {
        tag: String,
        expected: usize,
        found: usize,
    },

    #[error("no tag in {registry} matches '{pattern}'")]
    NoMatchingTag { registry: String, pattern: String },

    #[error("Unexpected digest for {reference}: {digest}")]
    InvalidDigest { reference: String, digest: String },
}
