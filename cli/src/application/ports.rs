//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::process::Output;
use std::time::Duration;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` when they carry
    /// a configured timeout and wait indefinitely otherwise.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program, killing it if it exceeds `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Registry Port ─────────────────────────────────────────────────────────────

/// Read-only view of a container registry.
#[allow(async_fn_in_trait)]
pub trait RegistryClient {
    /// List every tag published under `registry`, in the order the registry
    /// returns them.
    async fn list_tags(&self, registry: &str) -> Result<Vec<String>>;
    /// Look up the content digest of `reference` (`registry:tag`).
    ///
    /// The value is returned as reported; callers validate it.
    async fn digest(&self, reference: &str) -> Result<String>;
}
