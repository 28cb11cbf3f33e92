//! Lockfile infrastructure — loads `poetry.lock` from disk.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::lockfile::Lockfile;

/// Lockfile read when no path is given, relative to the working directory.
pub const DEFAULT_LOCKFILE: &str = "poetry.lock";

/// Read and parse the lockfile at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid lockfile.
pub fn read_lockfile(path: &Path) -> Result<Lockfile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading lockfile {}", path.display()))?;
    let lockfile =
        Lockfile::parse(&text).with_context(|| format!("parsing lockfile {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        packages = lockfile.packages.len(),
        "loaded lockfile"
    );
    Ok(lockfile)
}
