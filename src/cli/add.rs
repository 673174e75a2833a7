//! Add components to a project.
//!
//! Validation is all-or-nothing: every requested name is checked against
//! the registry before any dependency is installed or any file is copied.
//! A single unknown name aborts the whole command with the full list of
//! offenders and the valid alternatives.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::config::ConfigStore;
use crate::core::HarukitError;
use crate::installer::Installer;
use crate::pm::PackageManager;
use crate::registry::{ComponentMeta, Registry};
use crate::utils::progress::Spinner;

/// Command to add components to the project.
#[derive(Args)]
pub struct AddCommand {
    /// Components to add
    components: Vec<String>,

    /// Overwrite existing files
    #[arg(short, long)]
    overwrite: bool,

    /// Custom path for installed components
    #[arg(long)]
    path: Option<String>,
}

impl AddCommand {
    /// Execute against the current working directory.
    pub async fn execute(self) -> Result<()> {
        let root = std::env::current_dir()?;
        self.execute_from(&root).await
    }

    /// Execute against an explicit project root.
    pub async fn execute_from(self, root: &Path) -> Result<()> {
        let mut store = ConfigStore::new(root);
        if !store.exists() {
            return Err(HarukitError::ConfigMissing { path: root.display().to_string() }.into());
        }
        store.load();

        if self.components.is_empty() {
            return Err(anyhow!(
                "Please specify components to add. Example: harukit add button card"
            ));
        }

        // All-or-nothing validation gate: nothing is installed or copied
        // until every requested name resolves
        let registry = Registry::new();
        let (metas, invalid) = resolve_components(&registry, &self.components);

        if !invalid.is_empty() {
            eprintln!("{} Invalid components: {}", "✗".red(), invalid.join(", "));
            for name in &invalid {
                if let Some(candidate) = registry.closest_name(name) {
                    eprintln!("  {} did you mean {}?", "•".yellow(), candidate.green());
                }
            }
            eprintln!("\n{}", "Available components:".blue());
            for component in registry.all() {
                eprintln!("  {} {}", "•".green(), component.name);
            }
            return Err(anyhow!("Invalid components: {}", invalid.join(", ")));
        }

        // Union the dependency sets, preserving first-seen order
        let mut dependencies: Vec<String> = Vec::new();
        let mut dev_dependencies: Vec<String> = Vec::new();
        for meta in &metas {
            for dep in meta.dependencies {
                if !dependencies.iter().any(|d| d == dep) {
                    dependencies.push((*dep).to_string());
                }
            }
            for dep in meta.dev_dependencies {
                if !dev_dependencies.iter().any(|d| d == dep) {
                    dev_dependencies.push((*dep).to_string());
                }
            }
        }

        if !dependencies.is_empty() || !dev_dependencies.is_empty() {
            let manager = PackageManager::detect(root);
            let spinner = Spinner::new("Installing dependencies...");
            let installed = async {
                manager.add_packages(root, &dependencies, false).await?;
                manager.add_packages(root, &dev_dependencies, true).await
            }
            .await;
            match installed {
                Ok(()) => {
                    spinner.finish_with_message(format!("{} Dependencies installed", "✓".green()));
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    return Err(e);
                }
            }
        }

        // Copy files, then record state
        {
            let installer = Installer::new(root, store.config());
            for meta in &metas {
                installer.install_component(meta, self.path.as_deref(), self.overwrite)?;
                if !meta.dependencies.is_empty() {
                    println!("   Dependencies: {}", meta.dependencies.join(", ").blue());
                }
            }
            installer.ensure_utils()?;
        }

        for meta in &metas {
            store.add_component(meta.name)?;
        }
        for dep in &dependencies {
            store.add_dependency(dep, false)?;
        }
        for dep in &dev_dependencies {
            store.add_dependency(dep, true)?;
        }

        println!("\n{}", "Components added successfully!".green());
        println!("\n{}", "Next steps:".cyan());
        println!("  1. Import and use your components");
        println!("  2. Add more components with: {}", "harukit add <component>".bright_white());

        Ok(())
    }
}

/// Split requested names into resolved metadata and unknown names.
fn resolve_components<'r>(
    registry: &'r Registry,
    names: &[String],
) -> (Vec<&'r ComponentMeta>, Vec<String>) {
    let mut metas = Vec::new();
    let mut invalid = Vec::new();

    for name in names {
        match registry.get(name) {
            Some(meta) => metas.push(meta),
            None => invalid.push(name.clone()),
        }
    }

    (metas, invalid)
}
