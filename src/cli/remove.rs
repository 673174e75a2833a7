//! Remove components from a project.
//!
//! Deletes the component file and drops the name from the configuration's
//! installed list. Removing a component that was never installed is a
//! no-op that still succeeds; installed npm packages are left alone (other
//! components may share them).

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::config::ConfigStore;
use crate::core::HarukitError;
use crate::installer::Installer;

/// Command to remove components from the project.
#[derive(Args)]
pub struct RemoveCommand {
    /// Components to remove
    components: Vec<String>,
}

impl RemoveCommand {
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
            return Err(anyhow!("Please specify components to remove. Example: harukit remove button"));
        }

        for name in &self.components {
            {
                let installer = Installer::new(root, store.config());
                installer.remove_component(name)?;
            }
            store.remove_component(name)?;
        }

        println!("\n{}", "Components removed successfully!".green());
        Ok(())
    }
}
