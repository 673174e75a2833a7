//! Component installation.
//!
//! Copies template content into the target project, applying the transform
//! pipeline on the way. Target paths are resolved per file kind:
//!
//! | kind      | destination                                        |
//! |-----------|----------------------------------------------------|
//! | component | custom path, or the components alias mapped to src |
//! | utility   | parent of the utils alias mapped to src            |
//! | style     | `src/styles/`                                      |
//! | config    | the project root                                   |
//!
//! Alias mapping replaces the leading `@` with `src`, so the default
//! `@/components` lands at `src/components`. The overwrite decision is the
//! command layer's contract and arrives here as a flag; when a destination
//! exists and overwrite is off the file is skipped with a warning, never
//! silently clobbered.

pub mod transform;

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::ProjectConfig;
use crate::registry::{ComponentFile, ComponentMeta, FileKind};
use crate::templates::read_template;
use crate::utils::fs::{ensure_parent_dir, write_text_file};
use transform::transform_content;

/// Outcome of installing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// File was written.
    Written,
    /// Destination existed and overwrite was off.
    Skipped,
}

/// Copies and transforms component template files into a project.
pub struct Installer<'a> {
    root: &'a Path,
    config: &'a ProjectConfig,
}

impl<'a> Installer<'a> {
    /// Create an installer for the project at `root` using the given
    /// configuration snapshot.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a ProjectConfig) -> Self {
        Self { root, config }
    }

    /// Install all files belonging to a component.
    ///
    /// Returns the per-file outcomes in file order. Existing files are
    /// skipped unless `overwrite` is set.
    pub fn install_component(
        &self,
        component: &ComponentMeta,
        custom_path: Option<&str>,
        overwrite: bool,
    ) -> Result<Vec<InstallOutcome>> {
        let mut outcomes = Vec::with_capacity(component.files.len());
        for file in component.files {
            outcomes.push(self.install_file(file, custom_path, overwrite)?);
        }
        Ok(outcomes)
    }

    /// Remove a component's file from the project.
    ///
    /// Missing files are a logged no-op, not an error: removing an
    /// already-absent component must succeed.
    pub fn remove_component(&self, name: &str) -> Result<bool> {
        let path = self.components_dir(None).join(format!("{name}.tsx"));

        if path.exists() {
            std::fs::remove_file(&path)?;
            println!("{} Removed {}", "✓".green(), self.display_path(&path));
            Ok(true)
        } else {
            info!("{} not found, nothing to remove", path.display());
            println!("{} {}.tsx not found", "⚠".yellow(), name);
            Ok(false)
        }
    }

    /// Rewrite a component's files where they already exist on disk.
    ///
    /// Files never installed are left alone. Returns the number of files
    /// refreshed.
    pub fn update_component(&self, component: &ComponentMeta) -> Result<usize> {
        let mut refreshed = 0;
        for file in component.files {
            let target = self.resolve_target(file, None);
            if target.exists() {
                let content = read_template(file.path)?;
                let transformed = transform_content(&content, self.config)?;
                write_text_file(&target, &transformed)?;
                println!("{} Updated {}", "✓".green(), self.display_path(&target));
                refreshed += 1;
            } else {
                debug!("Skipping {}, not installed", target.display());
            }
        }
        Ok(refreshed)
    }

    /// Make sure the shared utils helper exists in the project, installing
    /// it if missing. Returns true when the file was created.
    pub fn ensure_utils(&self) -> Result<bool> {
        let file = ComponentFile { name: "utils.ts", path: "lib/utils.ts", kind: FileKind::Utility };
        let target = self.resolve_target(&file, None);

        if target.exists() {
            return Ok(false);
        }

        self.install_file(&file, None, false)?;
        Ok(true)
    }

    /// The directory component files land in.
    #[must_use]
    pub fn components_dir(&self, custom_path: Option<&str>) -> PathBuf {
        match custom_path {
            Some(path) => self.root.join(path),
            None => self.root.join(map_alias(&self.config.aliases.components)),
        }
    }

    fn install_file(
        &self,
        file: &ComponentFile,
        custom_path: Option<&str>,
        overwrite: bool,
    ) -> Result<InstallOutcome> {
        let target = self.resolve_target(file, custom_path);

        if target.exists() && !overwrite {
            println!(
                "{} {} already exists. Use --overwrite to replace.",
                "⚠".yellow(),
                self.display_path(&target)
            );
            return Ok(InstallOutcome::Skipped);
        }

        let content = read_template(file.path)?;
        let transformed = transform_content(&content, self.config)?;

        ensure_parent_dir(&target)?;
        write_text_file(&target, &transformed)?;
        println!("{} Added {}", "✓".green(), self.display_path(&target));

        Ok(InstallOutcome::Written)
    }

    fn resolve_target(&self, file: &ComponentFile, custom_path: Option<&str>) -> PathBuf {
        match file.kind {
            FileKind::Component => self.components_dir(custom_path).join(file.name),
            FileKind::Utility => self.utils_dir().join(file.name),
            FileKind::Style => self.root.join("src").join("styles").join(file.name),
            FileKind::Config => self.root.join(file.name),
        }
    }

    /// Directory for utility files: the parent of the mapped utils alias,
    /// so the default `@/lib/utils` yields `src/lib/utils.ts`.
    fn utils_dir(&self) -> PathBuf {
        let mapped = map_alias(&self.config.aliases.utils);
        let mapped_path = Path::new(&mapped);
        match mapped_path.parent() {
            Some(parent) if parent != Path::new("") => self.root.join(parent),
            _ => self.root.join(mapped),
        }
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.root).unwrap_or(path).display().to_string()
    }
}

/// Map an import alias to a directory path by rewriting the leading `@`
/// to `src`.
fn map_alias(alias: &str) -> String {
    alias.replacen('@', "src", 1)
}
