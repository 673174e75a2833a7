//! Initialize Harukit in a project.
//!
//! Creates `harukit.json` at the project root, installs the base dependency
//! set with the detected package manager, and copies the shared utils
//! helper (plus the global stylesheet when Tailwind is enabled).
//!
//! Running `init` in an already-initialized project prints guidance and
//! exits 0 without touching the existing configuration.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::path::Path;

use crate::config::{ConfigStore, ProjectConfig};
use crate::constants::{BASE_DEPENDENCIES, CONFIG_SCHEMA_URL, TYPESCRIPT_EXTRA_DEPENDENCY};
use crate::core::HarukitError;
use crate::installer::Installer;
use crate::pm::PackageManager;
use crate::project::ProjectDetector;
use crate::templates::read_template;
use crate::utils::fs::{ensure_dir, write_text_file};
use crate::utils::progress::Spinner;

/// Answers gathered before any file is written.
struct Preferences {
    typescript: bool,
    tailwind: bool,
    src_dir: bool,
    components_alias: String,
}

/// Command to initialize Harukit in the current project.
#[derive(Args)]
pub struct InitCommand {
    /// Skip confirmation prompts and accept defaults
    #[arg(short, long)]
    yes: bool,

    /// Use TypeScript (pre-answers the prompt)
    #[arg(long)]
    typescript: bool,

    /// Configure Tailwind CSS (pre-answers the prompt)
    #[arg(long)]
    tailwind: bool,
}

impl InitCommand {
    /// Execute against the current working directory.
    pub async fn execute(self) -> Result<()> {
        let root = std::env::current_dir()?;
        self.execute_from(&root).await
    }

    /// Execute against an explicit project root.
    pub async fn execute_from(self, root: &Path) -> Result<()> {
        let store = ConfigStore::new(root);

        // Second run: guide, don't overwrite
        if store.exists() {
            println!("{}", "Harukit is already initialized in this project.".yellow());
            println!("\nConfiguration file found:");
            println!("  {}", store.path().display().to_string().green());
            println!("\nYou can:");
            println!("  {} add components with: harukit add <component>", "•".green());
            println!("  {} remove components with: harukit remove <component>", "•".green());
            println!("  {} list available components with: harukit list", "•".green());
            println!("  {} delete harukit.json to reinitialize", "•".yellow());
            return Ok(());
        }

        let project = ProjectDetector::new(root).detect();
        if !project.valid {
            return Err(HarukitError::ProjectInvalid { root: root.display().to_string() }.into());
        }
        println!("Detected {} project", project.framework.to_string().cyan());

        let preferences = self.gather_preferences(project.has_typescript)?;

        // Install base dependencies before writing any state
        let mut dependencies: Vec<String> =
            BASE_DEPENDENCIES.iter().map(ToString::to_string).collect();
        if preferences.typescript {
            dependencies.push(TYPESCRIPT_EXTRA_DEPENDENCY.to_string());
        }

        let manager = PackageManager::detect(root);
        let spinner = Spinner::new("Installing dependencies...");
        match manager.add_packages(root, &dependencies, false).await {
            Ok(()) => spinner.finish_with_message(format!("{} Dependencies installed", "✓".green())),
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        }

        // Build and persist the configuration
        let mut config = ProjectConfig::default();
        config.schema = Some(CONFIG_SCHEMA_URL.to_string());
        config.typescript = preferences.typescript;
        config.aliases.components = preferences.components_alias.clone();
        config.tailwind.css = if preferences.src_dir {
            "src/app/globals.css".to_string()
        } else {
            "app/globals.css".to_string()
        };
        config.dependencies = dependencies;

        let mut store = store;
        store.set(config);
        store.save()?;
        println!("{} Created harukit.json", "✓".green());

        // Materialize the project structure
        let config = store.config();
        let installer = Installer::new(root, config);
        ensure_dir(&installer.components_dir(None))?;
        installer.ensure_utils()?;

        if preferences.tailwind {
            let css = read_template("globals.css")?;
            write_text_file(&root.join(&config.tailwind.css), &css)?;
            println!("{} Added {}", "✓".green(), config.tailwind.css);
        }

        println!("\n{}", "Harukit initialized successfully!".green());
        println!("\n{}", "Next steps:".cyan());
        println!("  1. Start building your UI!");
        println!("  2. Add components with: {}", "harukit add <component>".bright_white());
        println!("  3. Check the documentation for usage examples");

        Ok(())
    }

    fn gather_preferences(&self, detected_typescript: bool) -> Result<Preferences> {
        if self.yes {
            return Ok(Preferences {
                typescript: self.typescript || detected_typescript,
                tailwind: true,
                src_dir: false,
                components_alias: "@/components".to_string(),
            });
        }

        let typescript = if self.typescript {
            true
        } else {
            Confirm::new()
                .with_prompt("Would you like to use TypeScript?")
                .default(true)
                .interact()?
        };

        let tailwind = if self.tailwind {
            true
        } else {
            Confirm::new()
                .with_prompt("Would you like to use Tailwind CSS?")
                .default(true)
                .interact()?
        };

        let src_dir = Confirm::new()
            .with_prompt("Would you like to use a src directory?")
            .default(false)
            .interact()?;

        let components_alias: String = Input::new()
            .with_prompt("What import alias would you like to use?")
            .default("@/components".to_string())
            .interact_text()?;

        Ok(Preferences { typescript, tailwind, src_dir, components_alias })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_command(yes: bool) -> InitCommand {
        InitCommand { yes, typescript: false, tailwind: false }
    }

    #[tokio::test]
    async fn test_init_requires_a_manifest() {
        let temp = TempDir::new().unwrap();
        let result = init_command(true).execute_from(temp.path()).await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Could not detect"));
    }

    #[tokio::test]
    async fn test_init_second_run_leaves_config_untouched() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("harukit.json");
        std::fs::write(&config_path, "{\"components\": [\"button\"]}").unwrap();

        let result = init_command(true).execute_from(temp.path()).await;
        assert!(result.is_ok());
        assert_eq!(
            std::fs::read_to_string(&config_path).unwrap(),
            "{\"components\": [\"button\"]}"
        );
    }
}
