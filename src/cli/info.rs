//! Show component metadata or the project overview.
//!
//! With a component name: the catalog entry (description, version,
//! category, dependencies, files) plus whether it is installed here.
//! Without: the project's configuration at a glance. Works against a
//! missing configuration by falling back to defaults.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::config::{ConfigStore, ProjectConfig};
use crate::registry::{ComponentMeta, Registry};

/// Command to show information about a component or the project.
#[derive(Args)]
pub struct InfoCommand {
    /// Component name (omit for the project overview)
    component: Option<String>,
}

impl InfoCommand {
    /// Execute against the current working directory.
    pub fn execute(self) -> Result<()> {
        let root = std::env::current_dir()?;
        self.execute_from(&root)
    }

    /// Execute against an explicit project root.
    pub fn execute_from(self, root: &Path) -> Result<()> {
        let registry = Registry::new();
        let mut store = ConfigStore::new(root);
        let config = store.load().clone();

        match self.component {
            Some(ref name) => match registry.get(name) {
                Some(meta) => {
                    show_component(meta, &config);
                    Ok(())
                }
                None => {
                    eprintln!("{} Component \"{name}\" not found", "✗".red());
                    eprintln!("\n{}", "Available components:".blue());
                    for component in registry.all() {
                        eprintln!("  {} {}", "•".green(), component.name);
                    }
                    Err(anyhow!("Component \"{name}\" not found"))
                }
            },
            None => {
                show_project(&config);
                Ok(())
            }
        }
    }
}

fn show_component(meta: &ComponentMeta, config: &ProjectConfig) {
    println!("\n📦 {}", meta.name.green().bold());
    println!("{}", "─".repeat(50).dimmed());
    println!("Description: {}", meta.description);
    println!("Version: {}", meta.version.cyan());
    println!("Category: {}", meta.category);
    println!("Author: {}", meta.author);
    println!("License: {}", meta.license);
    if let Some(repository) = meta.repository {
        println!("Repository: {}", repository.blue());
    }
    if let Some(documentation) = meta.documentation {
        println!("Documentation: {}", documentation.blue());
    }

    println!("\n{}", "Dependencies:".yellow());
    print_list(meta.dependencies);

    println!("\n{}", "Dev Dependencies:".yellow());
    print_list(meta.dev_dependencies);

    println!("\n{}", "Tags:".yellow());
    if meta.tags.is_empty() {
        println!("  {} None", "•".dimmed());
    } else {
        println!("  {}", meta.tags.join(", "));
    }

    println!("\n{}", "Files:".yellow());
    for file in meta.files {
        println!("  {} {} ({})", "•".green(), file.name, file.kind);
    }

    let installed = config.components.iter().any(|c| c == meta.name);
    let status =
        if installed { "Installed".green().to_string() } else { "Not installed".dimmed().to_string() };
    println!("\n{} {status}", "Status:".yellow());

    println!("\n{}", "Usage:".blue());
    println!("  harukit add {}", meta.name);
}

fn show_project(config: &ProjectConfig) {
    println!("\n{}", "Project Information".green().bold());
    println!("{}", "─".repeat(50).dimmed());
    println!("Style: {}", config.style);
    println!("TypeScript: {}", yes_no(config.typescript));
    println!("Tailwind CSS entry: {}", config.tailwind.css);
    println!("Components Path: {}", config.aliases.components);
    println!("Utils Path: {}", config.aliases.utils);
    println!("Registry URL: {}", config.registry.url);

    println!("\n{}", "Installed Components:".yellow());
    print_owned_list(&config.components);

    println!("\n{}", "Dependencies:".yellow());
    print_owned_list(&config.dependencies);

    println!("\n{}", "Dev Dependencies:".yellow());
    print_owned_list(&config.dev_dependencies);
}

fn yes_no(value: bool) -> String {
    if value {
        "Yes".green().to_string()
    } else {
        "No".red().to_string()
    }
}

fn print_list(items: &[&str]) {
    if items.is_empty() {
        println!("  {} None", "•".dimmed());
    } else {
        for item in items {
            println!("  {} {item}", "•".green());
        }
    }
}

fn print_owned_list(items: &[String]) {
    if items.is_empty() {
        println!("  {} None", "•".dimmed());
    } else {
        for item in items {
            println!("  {} {item}", "•".green());
        }
    }
}
