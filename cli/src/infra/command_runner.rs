//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution, with an optional timeout that kills the child.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tokio::process::Child;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`.
///
/// Without a timeout, `run` waits for the child however long it takes. With
/// one, `tokio::select!` races the child against a sleep and calls
/// `child.kill()` explicitly when the sleep wins, so the process does not
/// outlive the failure on any platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner {
    timeout: Option<Duration>,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn spawn(program: &str, args: &[&str]) -> Result<Child> {
        tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))
    }
}

/// Wait for `child` while draining both pipes so a chatty process cannot
/// block on a full pipe buffer.
async fn collect(program: &str, child: &mut Child) -> Result<Output> {
    let mut stdout_handle = child.stdout.take();
    let mut stderr_handle = child.stderr.take();

    let (status, stdout, stderr) = tokio::join!(
        child.wait(),
        async {
            let mut buf = Vec::new();
            if let Some(ref mut h) = stdout_handle {
                let _ = h.read_to_end(&mut buf).await;
            }
            buf
        },
        async {
            let mut buf = Vec::new();
            if let Some(ref mut h) = stderr_handle {
                let _ = h.read_to_end(&mut buf).await;
            }
            buf
        },
    );

    Ok(Output {
        status: status.with_context(|| format!("waiting for {program}"))?,
        stdout,
        stderr,
    })
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        match self.timeout {
            Some(timeout) => self.run_with_timeout(program, args, timeout).await,
            None => {
                let mut child = Self::spawn(program, args)?;
                collect(program, &mut child).await
            }
        }
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        let mut child = Self::spawn(program, args)?;

        tokio::select! {
            result = collect(program, &mut child) => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
            }
        }
    }
}
