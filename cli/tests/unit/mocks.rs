//! Scripted [`CommandRunner`] so the real `crane` adapter can be exercised
//! without a registry.

#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::process::Output;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use image_pins::application::ports::CommandRunner;

use crate::helpers::err_output;

/// Maps a full command line (`"crane ls r"`) to a canned output. Unscripted
/// command lines exit 1, like a registry tool that cannot find the repo.
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: HashMap<String, Output>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn on(mut self, command_line: &str, output: Output) -> Self {
        self.outputs.insert(command_line.to_owned(), output);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().expect("lock").push(line.clone());
        Ok(self
            .outputs
            .get(&line)
            .cloned()
            .unwrap_or_else(|| err_output(1, format!("unscripted: {line}").as_bytes())))
    }

    async fn run_with_timeout(&self, program: &str, args: &[&str], _: Duration) -> Result<Output> {
        self.run(program, args).await
    }
}

impl CommandRunner for &ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        (**self).run(program, args).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        (**self).run_with_timeout(program, args, timeout).await
    }
}
