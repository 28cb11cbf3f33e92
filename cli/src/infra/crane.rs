//! `crane` adapter — implements `RegistryClient` by shelling out.
//!
//! `crane ls <registry>` prints one tag per line and
//! `crane digest <registry>:<tag>` prints the manifest digest.

use std::process::{ExitStatus, Output};

use anyhow::Result;
use thiserror::Error;

use crate::application::ports::{CommandRunner, RegistryClient};

/// Executable looked up on `PATH` when no override is given.
pub const DEFAULT_CRANE: &str = "crane";

/// Registry tool failures.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("`{command}` failed ({status}): {stderr}")]
    ToolFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// `RegistryClient` backed by the `crane` CLI.
pub struct CraneClient<R> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> CraneClient<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Run `crane <args>` and return stdout, failing on nonzero exit.
    async fn call(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(program = %self.program, ?args, "running registry tool");
        let output = self.runner.run(&self.program, args).await?;
        check_output(&self.program, args, output)
    }
}

fn check_output(program: &str, args: &[&str], output: Output) -> Result<String> {
    if !output.status.success() {
        return Err(RegistryError::ToolFailed {
            command: format!("{program} {}", args.join(" ")),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl<R: CommandRunner> RegistryClient for CraneClient<R> {
    async fn list_tags(&self, registry: &str) -> Result<Vec<String>> {
        let stdout = self.call(&["ls", registry]).await?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn digest(&self, reference: &str) -> Result<String> {
        let stdout = self.call(&["digest", reference]).await?;
        Ok(stdout.trim().to_string())
    }
}
