//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::infra::crane::DEFAULT_CRANE;
use crate::infra::lockfile::DEFAULT_LOCKFILE;

/// Generate docker-bake version variables from poetry.lock
#[derive(Debug, Parser)]
#[command(name = "gen-version-vars", version)]
pub struct GenVersionVarsCli {
    /// Lockfile to read
    #[arg(long, default_value = DEFAULT_LOCKFILE)]
    pub lockfile: PathBuf,
}

impl GenVersionVarsCli {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the versions cannot be extracted.
    pub fn run(self) -> Result<()> {
        commands::version_vars::run(&self.lockfile)
    }
}

/// Pin base images to the digest of their latest matching tag
///
/// Reads `{ name: { "registry": ..., "tagRegex": ... } }` on stdin and writes
/// `{ name: "registry:tag@digest" }` on stdout. Tags are ordered by the
/// integer values of the regex capture groups.
#[derive(Debug, Parser)]
#[command(name = "lock-base-images", version)]
pub struct LockBaseImagesCli {
    /// Registry tool executable
    #[arg(long, env = "LOCK_IMAGES_CRANE", default_value = DEFAULT_CRANE)]
    pub crane: String,

    /// Kill a registry call that runs longer than this (no limit when unset)
    #[arg(long, env = "LOCK_IMAGES_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl LockBaseImagesCli {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error if any image cannot be locked.
    pub async fn run(self) -> Result<()> {
        let timeout = self.timeout.map(Duration::from_secs);
        commands::lock_images::run(&self.crane, timeout).await
    }
}
