//! List the component catalog.
//!
//! The default listing enumerates every registry entry exactly once,
//! regardless of project state; `--installed` restricts the output to
//! components recorded in the project configuration.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::config::ConfigStore;
use crate::registry::Registry;

/// Command to list available components.
#[derive(Args)]
pub struct ListCommand {
    /// Show only installed components
    #[arg(long)]
    installed: bool,
}

impl ListCommand {
    /// Execute against the current working directory.
    pub fn execute(self) -> Result<()> {
        let root = std::env::current_dir()?;
        self.execute_from(&root)
    }

    /// Execute against an explicit project root.
    pub fn execute_from(self, root: &Path) -> Result<()> {
        let registry = Registry::new();

        // Tolerates a missing config: the catalog needs no project state
        let mut store = ConfigStore::new(root);
        let installed = store.load().components.clone();

        let heading =
            if self.installed { "Installed components:" } else { "Available components:" };
        println!("\n{}", heading.blue());
        println!();

        let mut shown = 0;
        for component in registry.all() {
            let is_installed = installed.iter().any(|c| c == component.name);
            if self.installed && !is_installed {
                continue;
            }

            let marker = if is_installed { " (installed)".cyan().to_string() } else { String::new() };
            println!("  {} {}{}", "•".green(), component.name, marker);
            println!("    {}", component.description.dimmed());
            println!();
            shown += 1;
        }

        if shown == 0 {
            println!("  {}", "No components installed yet.".dimmed());
            println!();
        }

        println!("{}", "To add a component, run:".blue());
        println!("  {}", "harukit add <component-name>".green());

        Ok(())
    }
}
