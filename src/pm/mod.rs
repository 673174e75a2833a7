//! Package manager abstraction.
//!
//! Detects which of the four supported package managers is active for a
//! project and translates abstract "add/remove dependencies" requests into
//! manager-specific subprocess invocations.
//!
//! The resolved manager is a plain value returned by
//! [`PackageManager::detect`], resolved once per command invocation and
//! threaded explicitly through the flow - there is no process-global
//! memoized state.
//!
//! - `mod.rs` - the [`PackageManager`] enum and install/remove operations
//! - [`detect`] - the detection strategy chain
//! - [`command_builder`] - the [`PmCommand`](command_builder::PmCommand)
//!   subprocess builder

pub mod command_builder;
pub mod detect;

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use command_builder::PmCommand;

/// A supported package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// npm (the default when nothing else is detected).
    Npm,
    /// Yarn.
    Yarn,
    /// pnpm.
    Pnpm,
    /// Bun.
    Bun,
}

impl PackageManager {
    /// The binary name invoked for this manager.
    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Argument vector for adding packages.
    ///
    /// Each manager has its own verb and dev flag: npm uses
    /// `install --save-dev`, yarn and bun use `add --dev`, pnpm uses
    /// `add --save-dev`.
    #[must_use]
    pub fn add_args(self, packages: &[String], dev: bool) -> Vec<String> {
        let (verb, dev_flag) = match self {
            Self::Npm => ("install", "--save-dev"),
            Self::Yarn => ("add", "--dev"),
            Self::Pnpm => ("add", "--save-dev"),
            Self::Bun => ("add", "--dev"),
        };

        let mut args = vec![verb.to_string()];
        args.extend(packages.iter().cloned());
        if dev {
            args.push(dev_flag.to_string());
        }
        args
    }

    /// Argument vector for removing a package.
    #[must_use]
    pub fn remove_args(self, package: &str) -> Vec<String> {
        let verb = match self {
            Self::Npm => "uninstall",
            Self::Yarn | Self::Pnpm | Self::Bun => "remove",
        };
        vec![verb.to_string(), package.to_string()]
    }

    /// Install packages into the project at `root`.
    ///
    /// Spawns exactly one subprocess, inheriting standard I/O so the user
    /// sees the manager's native output, and blocks until it exits. A
    /// non-zero exit or spawn failure is fatal to the current command; no
    /// retries.
    pub async fn add_packages(self, root: &Path, packages: &[String], dev: bool) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        info!("Installing with {}: {}", self.binary(), packages.join(" "));
        println!(
            "{} Installing {} with {}...",
            "→".cyan(),
            packages.join(", "),
            self.binary()
        );

        PmCommand::new(self)
            .args(self.add_args(packages, dev))
            .current_dir(root)
            .execute_success()
            .await
    }

    /// Remove a package from the project at `root`.
    pub async fn remove_package(self, root: &Path, package: &str) -> Result<()> {
        info!("Removing with {}: {}", self.binary(), package);
        println!("{} Removing {} with {}...", "→".cyan(), package, self.binary());

        PmCommand::new(self)
            .args(self.remove_args(package))
            .current_dir(root)
            .execute_success()
            .await
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary())
    }
}
