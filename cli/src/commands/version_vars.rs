//! Version variables command: `poetry.lock` to docker-bake build args.

use std::path::Path;

use anyhow::Result;

use crate::domain::lockfile::extract_version_vars;
use crate::infra::lockfile::read_lockfile;
use crate::output::json;

/// Render the version variables for the lockfile at `path`.
///
/// # Errors
///
/// Returns an error if the lockfile cannot be read or parsed, or a required
/// package is missing.
pub fn render(path: &Path) -> Result<String> {
    let lockfile = read_lockfile(path)?;
    let vars = extract_version_vars(&lockfile)?;
    tracing::info!(mythril = %vars.mythril, blake2b = %vars.blake2b, "extracted versions");
    json::to_pretty(&vars)
}

/// Run the command, printing the variables to stdout.
///
/// # Errors
///
/// See [`render`].
pub fn run(path: &Path) -> Result<()> {
    let out = render(path)?;
    println!("{out}");
    Ok(())
}
