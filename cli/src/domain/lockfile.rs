//! Lockfile domain types and version extraction.
//!
//! Pure functions only: the document text comes in, the version variables go
//! out. Reading the file from disk lives in `crate::infra::lockfile`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::LockfileError;

/// Lock entry whose version becomes `MYTHRIL_VERSION`.
pub const MYTHRIL_PACKAGE: &str = "mythril";

/// Lock entry whose version becomes `BLAKE2B_VERSION`.
pub const BLAKE2B_PACKAGE: &str = "blake2b-py";

/// A single `[[package]]` table. Every other field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
}

/// A parsed `poetry.lock` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lockfile {
    #[serde(default, rename = "package")]
    pub packages: Vec<LockedPackage>,
}

impl Lockfile {
    /// Parse lockfile text.
    ///
    /// # Errors
    ///
    /// Returns [`LockfileError::Parse`] if the text is not TOML or a package
    /// table lacks `name`/`version`.
    pub fn parse(text: &str) -> Result<Self, LockfileError> {
        Ok(toml::from_str(text)?)
    }

    /// Index packages by name. A later entry with the same name wins.
    #[must_use]
    pub fn by_name(&self) -> HashMap<&str, &LockedPackage> {
        self.packages.iter().map(|p| (p.name.as_str(), p)).collect()
    }
}

/// Build arguments consumed by `docker-bake`. Field order is output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionVars {
    #[serde(rename = "MYTHRIL_VERSION")]
    pub mythril: String,
    #[serde(rename = "BLAKE2B_VERSION")]
    pub blake2b: String,
}

/// Pull the pinned versions of the two packages the image build needs.
///
/// # Errors
///
/// Returns [`LockfileError::MissingPackage`] if either package is absent.
pub fn extract_version_vars(lockfile: &Lockfile) -> Result<VersionVars, LockfileError> {
    let packages = lockfile.by_name();
    let version_of = |name: &str| {
        packages
            .get(name)
            .map(|p| p.version.clone())
            .ok_or_else(|| LockfileError::MissingPackage {
                name: name.to_string(),
            })
    };

    Ok(VersionVars {
        mythril: version_of(MYTHRIL_PACKAGE)?,
        blake2b: version_of(BLAKE2B_PACKAGE)?,
    })
}
