//! External mesh tool invocation
//!
//! Runs `wg-meshconf` as a subprocess with the database selector prepended
//! to every invocation. Success and failure both come back as text: the
//! tool's diagnostics are opaque to the console and shown verbatim. The
//! outcome carries the exit code so callers can tell the two apart without
//! parsing anything.

use crate::command::MeshCommand;
use crate::config::ConsoleConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Outcome of a tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ToolOutcome {
    Success,
    Failed { exit_code: Option<i32> },
}

/// Captured result of one tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub outcome: ToolOutcome,
    /// Combined stdout and stderr, decoded lossily
    pub text: String,
}

impl ToolOutput {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, ToolOutcome::Success)
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self.outcome {
            ToolOutcome::Success => Some(0),
            ToolOutcome::Failed { exit_code } => exit_code,
        }
    }
}

/// Mesh tool interface
#[async_trait]
pub trait MeshTool: Send + Sync {
    /// Run one command against the peer database
    async fn run(&self, command: &MeshCommand) -> Result<ToolOutput>;
}

/// The real wg-meshconf subprocess runner
pub struct MeshconfTool {
    binary: String,
    database: PathBuf,
    timeout: Duration,
}

impl MeshconfTool {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            binary: config.tool_binary(),
            database: config.database_path(),
            timeout: Duration::from_secs(config.tool.timeout_secs.max(1)),
        }
    }

    async fn execute(&self, args: Vec<String>) -> Result<ToolOutput> {
        debug!("Running {} {}", self.binary, args.join(" "));

        let child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(result) => result.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ToolNotFound {
                        path: self.binary.clone(),
                    }
                } else {
                    Error::Io(e)
                }
            })?,
            Err(_) => {
                warn!(
                    "{} timed out after {}s, killing it",
                    self.binary,
                    self.timeout.as_secs()
                );
                return Err(Error::Timeout {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        let outcome = if output.status.success() {
            ToolOutcome::Success
        } else {
            ToolOutcome::Failed {
                exit_code: output.status.code(),
            }
        };

        Ok(ToolOutput { outcome, text })
    }
}

#[async_trait]
impl MeshTool for MeshconfTool {
    async fn run(&self, command: &MeshCommand) -> Result<ToolOutput> {
        let mut args = vec![
            "-d".to_string(),
            self.database.to_string_lossy().to_string(),
        ];
        args.extend(command.to_args());
        self.execute(args).await
    }
}
