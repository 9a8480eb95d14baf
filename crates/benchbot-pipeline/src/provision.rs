//! Benchmark tooling availability probes.
//!
//! Installation itself happens outside the pipeline; before any benchmark
//! runs the pipeline only verifies the tools answer a version probe.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors raised while verifying benchmark tooling.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// A required tool failed its availability probe.
    #[error("{tool} is not installed or not in PATH")]
    ToolUnavailable { tool: String },
}

/// One availability probe: a tool name and the command that proves it runs.
#[derive(Debug, Clone)]
pub struct ToolProbe {
    /// Human-readable tool name, used in error messages.
    pub tool: String,

    /// Probe command (first element is the executable).
    pub command: Vec<String>,
}

impl ToolProbe {
    /// Create a probe.
    pub fn new(tool: impl Into<String>, command: Vec<String>) -> Self {
        ToolProbe {
            tool: tool.into(),
            command,
        }
    }

    /// Run the probe. Spawn failures and non-zero exits both count as
    /// unavailable.
    pub async fn is_available(&self) -> bool {
        if self.command.is_empty() {
            return false;
        }

        let exe = &self.command[0];
        let args = &self.command[1..];

        let status = Command::new(exe)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => status.success(),
            Err(_) => false,
        }
    }
}

/// Verifies the benchmark harness tooling before the pipeline runs it.
#[derive(Debug, Clone)]
pub struct Provisioner {
    probes: Vec<ToolProbe>,
}

impl Provisioner {
    /// Probes for the standard tooling: valgrind (the counter-based
    /// harness's runtime dependency) and cargo-criterion (the statistical
    /// harness's runner).
    pub fn standard() -> Self {
        Provisioner::with_probes(vec![
            ToolProbe::new(
                "valgrind",
                vec!["valgrind".to_string(), "--version".to_string()],
            ),
            ToolProbe::new(
                "cargo-criterion",
                vec![
                    "cargo".to_string(),
                    "criterion".to_string(),
                    "--version".to_string(),
                ],
            ),
        ])
    }

    /// No probes, for environments that provision tooling externally.
    pub fn none() -> Self {
        Provisioner::with_probes(Vec::new())
    }

    /// Build a provisioner from explicit probes.
    pub fn with_probes(probes: Vec<ToolProbe>) -> Self {
        Provisioner { probes }
    }

    /// The probes this provisioner runs.
    pub fn probes(&self) -> &[ToolProbe] {
        &self.probes
    }

    /// Run every probe in order; the first failure aborts.
    pub async fn ensure_tooling(&self) -> Result<(), ProvisionError> {
        for probe in &self.probes {
            if !probe.is_available().await {
                return Err(ProvisionError::ToolUnavailable {
                    tool: probe.tool.clone(),
                });
            }
            debug!(tool = %probe.tool, "tool probe passed");
        }
        Ok(())
    }
}
