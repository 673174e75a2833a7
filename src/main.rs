//! Harukit CLI entry point.
//!
//! Handles command-line argument parsing, error display, and command
//! execution. The CLI manages copy-in React UI components:
//! - `init` - initialize Harukit in a project
//! - `add` - add components and install their dependencies
//! - `remove` - remove components
//! - `list` - list the component catalog
//! - `update` - refresh installed component files
//! - `info` - show component or project information

use anyhow::Result;
use clap::Parser;
use harukit_cli::cli;
use harukit_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
