//! Template resolution.
//!
//! Component content ships as plain files under a `templates/` directory
//! whose location depends on how the CLI was installed. The resolver probes
//! a fixed, ordered list of candidate roots and returns the first that
//! contains the requested relative path:
//!
//! 1. `templates/` beside the running executable (installed layout)
//! 2. `templates/` at the crate source root (development layout)
//! 3. `templates/` one level above the executable directory (package root)
//! 4. `templates/` under the current working directory
//!
//! Failure to find a template is fatal for the invoking command: the CLI
//! cannot proceed without its payload, so the error names every probed
//! location to make a broken installation diagnosable.

use anyhow::Result;
use std::path::PathBuf;
use tracing::trace;

use crate::core::HarukitError;

/// Candidate template roots in probe order.
fn candidate_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            roots.push(exe_dir.join("templates"));
            if let Some(package_root) = exe_dir.parent() {
                roots.push(package_root.join("templates"));
            }
        }
    }

    // Development layout: the crate source tree
    roots.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"));

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.join("templates"));
    }

    roots
}

/// Locate a template by its path relative to the templates root.
///
/// # Errors
///
/// Returns [`HarukitError::TemplateNotFound`] naming all probed locations
/// when no candidate root contains the file.
pub fn resolve_template(relative: &str) -> Result<PathBuf> {
    let roots = candidate_roots();

    for root in &roots {
        let candidate = root.join(relative);
        if candidate.is_file() {
            trace!("Resolved template {relative} at {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(HarukitError::TemplateNotFound {
        path: relative.to_string(),
        probed: roots.iter().map(|r| r.join(relative).display().to_string()).collect(),
    }
    .into())
}

/// Read a template's content as a string.
pub fn read_template(relative: &str) -> Result<String> {
    let path = resolve_template(relative)?;
    crate::utils::fs::read_text_file(&path)
}
