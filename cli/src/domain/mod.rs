//! Domain layer — pure types, ordering, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod image;
pub mod lockfile;

pub use error::{ImageError, LockfileError};
pub use image::{
    ImageConstraint, ResolvedImage, TagKey, TagMatch, TagNumber, TagPattern, latest_tag,
    select_latest, validate_digest,
};
pub use lockfile::{Lockfile, LockedPackage, VersionVars, extract_version_vars};
