//! I/O operations for the project configuration.
//!
//! Loading is deliberately tolerant: a missing file yields defaults and a
//! malformed file logs a warning and yields defaults, so read-only commands
//! keep working against a damaged config. Saving is the opposite - any
//! failure to persist is surfaced to the caller, because silently dropping
//! recorded state would leave the project inconsistent.

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::{ConfigStore, ProjectConfig};
use crate::core::HarukitError;

impl ConfigStore {
    /// Load the persisted configuration merged over hard-coded defaults.
    ///
    /// - Missing file: returns defaults.
    /// - Malformed file: logs a warning, returns defaults.
    ///
    /// This method never fails; commands that require an initialized
    /// project check [`exists`](Self::exists) separately.
    pub fn load(&mut self) -> &ProjectConfig {
        if !self.path().exists() {
            debug!("No configuration at {}, using defaults", self.path().display());
            self.set(ProjectConfig::default());
            return self.config();
        }

        let loaded = std::fs::read_to_string(self.path())
            .map_err(anyhow::Error::from)
            .and_then(|content| Ok(serde_json::from_str::<ProjectConfig>(&content)?));

        match loaded {
            Ok(config) => self.set(config),
            Err(e) => {
                warn!("Failed to load {}, using defaults: {e}", self.path().display());
                self.set(ProjectConfig::default());
            }
        }

        self.config()
    }

    /// Persist the in-memory configuration as pretty-printed JSON,
    /// overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`HarukitError::ConfigSaveFailed`] on serialization or I/O
    /// failure (permissions, disk space).
    pub fn save(&self) -> Result<()> {
        crate::utils::fs::write_json_file(self.path(), self.config()).map_err(|e| {
            HarukitError::ConfigSaveFailed {
                path: self.path().display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
