//! Process execution boundary

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use flotilla_core::error::PublishError;
use flotilla_core::Result;

/// Options for one command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOptions {
    /// Working directory, always the package location
    pub cwd: PathBuf,

    /// Environment overrides layered on the inherited environment. Only
    /// values that were actually provided appear here; absent settings
    /// must not show up as empty strings.
    pub env: BTreeMap<String, String>,

    /// Package the command runs for, used to tag failures
    pub package_name: String,
}

impl ExecOptions {
    /// Options with no environment overrides
    pub fn new(cwd: impl Into<PathBuf>, package_name: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            env: BTreeMap::new(),
            package_name: package_name.into(),
        }
    }
}

/// Captured result of a successful execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    /// Captured stdout
    pub stdout: String,

    /// Process exit code
    pub exit_code: i32,
}

/// External collaborator that runs package-manager commands.
///
/// A non-zero exit or spawn failure is reported as an error; no retries
/// happen at this layer.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    /// Run `command` with `args` and return captured stdout
    async fn execute(
        &self,
        command: &str,
        args: &[String],
        options: &ExecOptions,
    ) -> Result<ExecOutput>;
}

/// Production executor on tokio's process API
#[derive(Debug, Default)]
pub struct TokioExecutor;

#[async_trait]
impl ProcessExecutor for TokioExecutor {
    async fn execute(
        &self,
        command: &str,
        args: &[String],
        options: &ExecOptions,
    ) -> Result<ExecOutput> {
        debug!(
            command = %command,
            args = ?args,
            cwd = %options.cwd.display(),
            "executing"
        );

        let rendered = format!("{} {}", command, args.join(" "));

        let output = Command::new(command)
            .args(args)
            .current_dir(&options.cwd)
            .envs(&options.env)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PublishError::SpawnFailed {
                package: options.package_name.clone(),
                command: rendered.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(PublishError::ExecutionFailed {
                package: options.package_name.clone(),
                command: rendered,
                exit_code: output.status.code().unwrap_or(-1),
                stderr,
            }
            .into());
        }

        Ok(ExecOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code().unwrap_or(0),
        })
    }
}
