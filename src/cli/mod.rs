//! Command-line interface for the Harukit CLI.
//!
//! Each command is implemented as a separate module with its own argument
//! struct and execution logic:
//!
//! - `init` - set up Harukit in a project (config, base deps, utils helper)
//! - `add` - copy components into the project and install their packages
//! - `remove` - delete component files and their config records
//! - `list` - show the component catalog
//! - `update` - refresh installed component files from templates
//! - `info` - show component metadata or the project overview
//!
//! # Global Options
//!
//! All commands accept `-s/--silent`, `-v/--verbose`, and
//! `--registry <url>`. Verbosity maps onto the tracing filter; the registry
//! override is accepted for forward compatibility but the shipped resolver
//! is fully local, so it only affects logging and display.
//!
//! # Exit Behavior
//!
//! Commands return `Result`; `main` renders any error through
//! [`user_friendly_error`](crate::core::user_friendly_error) and exits 1.
//! Success is exit 0, including no-op paths like removing an absent
//! component or re-running `init` on an initialized project.

mod add;
mod info;
mod init;
mod list;
mod remove;
mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

/// Main CLI application structure.
///
/// Handles global flags and delegates to subcommands. Global options are
/// marked `global = true` so they work in any position.
#[derive(Parser)]
#[command(
    name = "harukit",
    about = "Harukit CLI - copy-in React UI components for your project",
    version,
    long_about = "Harukit copies component source files into your project, installs their \
                  npm dependencies with your package manager, and tracks installed state \
                  in harukit.json."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    silent: bool,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom registry URL (reserved; the shipped catalog is local).
    #[arg(long, global = true)]
    registry: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize Harukit in your project.
    Init(init::InitCommand),

    /// Add components to your project.
    Add(add::AddCommand),

    /// Remove components from your project.
    Remove(remove::RemoveCommand),

    /// List available components.
    List(list::ListCommand),

    /// Update installed components to the shipped templates.
    Update(update::UpdateCommand),

    /// Show information about a component or the project.
    Info(info::InfoCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Sets up logging from the global flags, then dispatches. Each command
    /// resolves the project root from the current working directory.
    pub async fn execute(self) -> Result<()> {
        init_logging(self.verbose, self.silent);

        if let Some(ref url) = self.registry {
            debug!("Registry override accepted but unused by the local catalog: {url}");
        }

        match self.command {
            Commands::Init(cmd) => cmd.execute().await,
            Commands::Add(cmd) => cmd.execute().await,
            Commands::Remove(cmd) => cmd.execute().await,
            Commands::List(cmd) => cmd.execute(),
            Commands::Update(cmd) => cmd.execute().await,
            Commands::Info(cmd) => cmd.execute(),
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` maps to `debug`,
/// `--silent` to `error`, and the default is `info`. Logs go to stderr so
/// stdout stays parseable.
fn init_logging(verbose: bool, silent: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        "debug"
    } else if silent {
        "error"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
