//! Harness subprocess execution and output capture.

use crate::error::PipelineError;
use crate::harness::{HarnessKind, HarnessPlan};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// One completed harness subprocess: the command, everything it printed,
/// and how it exited.
#[derive(Debug, Clone)]
pub struct HarnessInvocation {
    /// Which harness ran.
    pub kind: HarnessKind,

    /// Command that was executed.
    pub command: Vec<String>,

    /// Captured stdout, verbatim.
    pub stdout: String,

    /// Captured stderr, verbatim.
    pub stderr: String,

    /// Exit code (0 = success; -1 when the process died to a signal).
    pub exit_code: i32,

    /// Wall duration in milliseconds.
    pub duration_ms: u64,
}

impl HarnessInvocation {
    /// Whether the harness exited cleanly.
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// The captured output blob: stdout followed by stderr, unaltered.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs one harness plan to completion.
pub struct HarnessRunner;

impl HarnessRunner {
    /// Execute the plan as a subprocess, blocking until it exits.
    ///
    /// A spawn or wait failure is an error; a non-zero exit is not. The
    /// invocation is returned either way and the caller decides what a
    /// failed exit means. No timeout is enforced here.
    pub async fn invoke(plan: &HarnessPlan) -> Result<HarnessInvocation, PipelineError> {
        if plan.command.is_empty() {
            return Err(PipelineError::EmptyCommand { kind: plan.kind });
        }

        let exe = &plan.command[0];
        let args = &plan.command[1..];

        let start = Instant::now();

        let child = Command::new(exe)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PipelineError::Launch {
                kind: plan.kind,
                source,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| PipelineError::Launch {
                kind: plan.kind,
                source,
            })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        Ok(HarnessInvocation {
            kind: plan.kind,
            command: plan.command.clone(),
            stdout,
            stderr,
            exit_code,
            duration_ms,
        })
    }
}
