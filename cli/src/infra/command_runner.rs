//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` spawns the provisioning tool with tokio and blocks
//! the pipeline until it exits.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`.
///
/// Stdout is captured, stderr goes straight to the terminal, stdin is closed.
/// No timeout is applied: a provisioning tool that never exits keeps the
/// inventory waiting.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait_with_output()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
