//! Mutation operations for the project configuration.
//!
//! All list mutations are set-wise (adding an existing entry or removing a
//! missing one is a no-op) and persist immediately. There is no batching:
//! each successful mutation leaves a valid file on disk, at the cost of one
//! write per change.

use anyhow::Result;

use crate::config::ConfigStore;

fn add_unique(list: &mut Vec<String>, value: &str) -> bool {
    if list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

fn remove_value(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|v| v != value);
    list.len() != before
}

impl ConfigStore {
    /// Record a component as installed and persist.
    ///
    /// No-op (no write) when the component is already recorded.
    pub fn add_component(&mut self, name: &str) -> Result<()> {
        if add_unique(&mut self.config_mut().components, name) {
            self.save()?;
        }
        Ok(())
    }

    /// Remove a component from the installed list and persist.
    ///
    /// No-op (no write) when the component is not recorded.
    pub fn remove_component(&mut self, name: &str) -> Result<()> {
        if remove_value(&mut self.config_mut().components, name) {
            self.save()?;
        }
        Ok(())
    }

    /// Record an installed package and persist.
    pub fn add_dependency(&mut self, package: &str, dev: bool) -> Result<()> {
        let list = if dev {
            &mut self.config_mut().dev_dependencies
        } else {
            &mut self.config_mut().dependencies
        };
        if add_unique(list, package) {
            self.save()?;
        }
        Ok(())
    }

    /// Remove a recorded package and persist.
    pub fn remove_dependency(&mut self, package: &str, dev: bool) -> Result<()> {
        let list = if dev {
            &mut self.config_mut().dev_dependencies
        } else {
            &mut self.config_mut().dependencies
        };
        if remove_value(list, package) {
            self.save()?;
        }
        Ok(())
    }

    pub(crate) fn config_mut(&mut self) -> &mut crate::config::ProjectConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_component_is_set_wise() {
        let temp = TempDir::new().unwrap();
        let mut store = ConfigStore::new(temp.path());

        store.add_component("button").unwrap();
        store.add_component("button").unwrap();
        assert_eq!(store.config().components, vec!["button"]);

        // Persisted immediately
        let mut fresh = ConfigStore::new(temp.path());
        assert_eq!(fresh.load().components, vec!["button"]);
    }

    #[test]
    fn test_remove_component_missing_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = ConfigStore::new(temp.path());

        store.remove_component("button").unwrap();
        assert!(store.config().components.is_empty());
        // No write happened for a pure no-op
        assert!(!store.exists());
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut store = ConfigStore::new(temp.path());

        store.add_component("button").unwrap();
        store.add_component("card").unwrap();
        store.remove_component("button").unwrap();
        assert_eq!(store.config().components, vec!["card"]);
    }

    #[test]
    fn test_dependencies_split_by_dev_flag() {
        let temp = TempDir::new().unwrap();
        let mut store = ConfigStore::new(temp.path());

        store.add_dependency("clsx", false).unwrap();
        store.add_dependency("typescript", true).unwrap();
        store.add_dependency("clsx", false).unwrap();

        assert_eq!(store.config().dependencies, vec!["clsx"]);
        assert_eq!(store.config().dev_dependencies, vec!["typescript"]);

        store.remove_dependency("clsx", false).unwrap();
        assert!(store.config().dependencies.is_empty());
        assert_eq!(store.config().dev_dependencies, vec!["typescript"]);
    }
}
