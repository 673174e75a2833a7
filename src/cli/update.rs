//! Update installed components from the shipped templates.
//!
//! Re-runs the transform pipeline over each component's templates and
//! rewrites only files that already exist on disk. Named components go
//! through the same all-or-nothing validation gate as `add`; with no names
//! the configuration's installed list is used.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use tracing::warn;

use crate::config::ConfigStore;
use crate::core::HarukitError;
use crate::installer::Installer;
use crate::registry::Registry;

/// Command to update installed components.
#[derive(Args)]
pub struct UpdateCommand {
    /// Components to update (defaults to everything installed)
    components: Vec<String>,
}

impl UpdateCommand {
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

        let registry = Registry::new();

        let targets: Vec<String> = if self.components.is_empty() {
            store.config().components.clone()
        } else {
            let invalid: Vec<String> = self
                .components
                .iter()
                .filter(|name| registry.get(name).is_none())
                .cloned()
                .collect();
            if !invalid.is_empty() {
                return Err(anyhow!("Invalid components: {}", invalid.join(", ")));
            }
            self.components
        };

        if targets.is_empty() {
            println!("{}", "No components installed; nothing to update.".yellow());
            return Ok(());
        }

        let installer = Installer::new(root, store.config());
        let mut refreshed = 0;
        for name in &targets {
            // Recorded names can predate catalog changes
            let Some(meta) = registry.get(name) else {
                warn!("Recorded component {name} is not in the catalog, skipping");
                continue;
            };
            refreshed += installer.update_component(meta)?;
        }

        if refreshed == 0 {
            println!("{}", "All component files are absent on disk; nothing was rewritten.".yellow());
        } else {
            println!("\n{} Updated {refreshed} file(s)", "✓".green());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::TempDir;

    fn update_command(components: &[&str]) -> UpdateCommand {
        UpdateCommand { components: components.iter().map(ToString::to_string).collect() }
    }

    #[tokio::test]
    async fn test_update_without_config_fails() {
        let temp = TempDir::new().unwrap();
        let err = update_command(&[]).execute_from(temp.path()).await.unwrap_err();
        assert!(err.to_string().contains("No Harukit configuration"));
    }

    #[tokio::test]
    async fn test_update_unknown_name_fails() {
        let temp = TempDir::new().unwrap();
        ConfigStore::new(temp.path()).save().unwrap();

        let err = update_command(&["bogus"]).execute_from(temp.path()).await.unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[tokio::test]
    async fn test_update_rewrites_only_existing_files() {
        let temp = TempDir::new().unwrap();
        let mut store = ConfigStore::new(temp.path());
        store.set(ProjectConfig::default());
        store.save().unwrap();
        store.add_component("button").unwrap();
        store.add_component("card").unwrap();

        // Only button exists on disk
        let button_path = temp.path().join("src/components/button.tsx");
        crate::utils::fs::write_text_file(&button_path, "stale").unwrap();

        update_command(&[]).execute_from(temp.path()).await.unwrap();

        assert_ne!(std::fs::read_to_string(&button_path).unwrap(), "stale");
        assert!(!temp.path().join("src/components/card.tsx").exists());
    }

    #[tokio::test]
    async fn test_update_with_nothing_installed_is_ok() {
        let temp = TempDir::new().unwrap();
        ConfigStore::new(temp.path()).save().unwrap();
        update_command(&[]).execute_from(temp.path()).await.unwrap();
    }
}
