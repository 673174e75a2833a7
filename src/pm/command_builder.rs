//! Subprocess builder for package manager invocations.
//!
//! Small fluent API so every manager call is constructed and logged the
//! same way. Standard I/O is inherited: the user watches npm/yarn/pnpm/bun
//! output directly instead of a re-rendered copy. No timeout is enforced;
//! a hung manager blocks the command until the user interrupts it.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::core::HarukitError;
use crate::pm::PackageManager;

/// Builder for a single package manager subprocess.
pub struct PmCommand {
    manager: PackageManager,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl PmCommand {
    /// Start building a command for the given manager.
    #[must_use]
    pub fn new(manager: PackageManager) -> Self {
        Self { manager, args: Vec::new(), current_dir: None }
    }

    /// Add arguments to the invocation.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the subprocess.
    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Spawn the subprocess and wait for it to exit.
    ///
    /// # Errors
    ///
    /// - [`HarukitError::PackageManagerSpawnFailed`] when the binary cannot
    ///   be started (missing from PATH, permissions)
    /// - [`HarukitError::PackageManagerFailed`] with the manager name and
    ///   exit code when the subprocess exits non-zero
    pub async fn execute_success(self) -> Result<()> {
        let binary = self.manager.binary();
        debug!(target: "pm", "Executing command: {} {}", binary, self.args.join(" "));

        let mut cmd = Command::new(binary);
        cmd.args(&self.args);
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().await.map_err(|e| HarukitError::PackageManagerSpawnFailed {
            manager: binary.to_string(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            debug!(target: "pm", "Command failed with exit code: {:?}", status.code());
            return Err(HarukitError::PackageManagerFailed {
                manager: binary.to_string(),
                code: status.code().unwrap_or(-1),
            }
            .into());
        }

        debug!(target: "pm", "Command completed successfully");
        Ok(())
    }
}
