//! Error handling for the Harukit CLI.
//!
//! This module provides the error types and user-friendly error reporting
//! used throughout the CLI. Two types cooperate:
//! - [`HarukitError`] - enumerated error types for all failure cases
//! - [`ErrorContext`] - wrapper that adds user-friendly suggestions and details
//!
//! # Error Categories
//!
//! - **Configuration**: [`HarukitError::ConfigMissing`], [`HarukitError::ConfigSaveFailed`]
//! - **Validation**: [`HarukitError::ComponentNotFound`]
//! - **Filesystem**: [`HarukitError::TemplateNotFound`], [`HarukitError::IoError`]
//! - **Subprocess**: [`HarukitError::PackageManagerFailed`],
//!   [`HarukitError::PackageManagerSpawnFailed`]
//! - **Project**: [`HarukitError::ProjectInvalid`]
//!
//! Use [`user_friendly_error`] at the top level to convert any error into a
//! displayable context with contextual suggestions. No automatic retries
//! exist anywhere in the system; every error here is terminal for the
//! current command.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for Harukit operations.
///
/// Each variant represents a specific failure mode and carries the details
/// a user needs to act on it (component names, probed paths, manager names,
/// exit codes).
#[derive(Error, Debug)]
pub enum HarukitError {
    /// No `harukit.json` exists where a command requires one.
    #[error("No Harukit configuration found in {path}")]
    ConfigMissing {
        /// Directory that was expected to contain `harukit.json`
        path: String,
    },

    /// Writing `harukit.json` failed.
    #[error("Failed to save configuration to {path}: {reason}")]
    ConfigSaveFailed {
        /// Path of the configuration file
        path: String,
        /// Underlying I/O failure description
        reason: String,
    },

    /// A requested component name has no entry in the registry.
    #[error("Unknown component: {name}")]
    ComponentNotFound {
        /// The component name that was requested
        name: String,
    },

    /// A template file could not be located in any candidate root.
    ///
    /// This is fatal for the invoking command; the CLI cannot proceed
    /// without its templates.
    #[error("Template not found: {path}")]
    TemplateNotFound {
        /// Registry-relative template path that was requested
        path: String,
        /// Every location that was probed, in order
        probed: Vec<String>,
    },

    /// The package manager subprocess exited with a non-zero status.
    #[error("{manager} exited with code {code}")]
    PackageManagerFailed {
        /// Resolved manager name (npm, yarn, pnpm, bun)
        manager: String,
        /// Exit code reported by the subprocess
        code: i32,
    },

    /// The package manager subprocess could not be started at all.
    #[error("Failed to run {manager}: {reason}")]
    PackageManagerSpawnFailed {
        /// Resolved manager name (npm, yarn, pnpm, bun)
        manager: String,
        /// Spawn failure description
        reason: String,
    },

    /// The target directory does not look like a supported project.
    #[error("Could not detect a supported project in {root}")]
    ProjectInvalid {
        /// Directory that was inspected
        root: String,
    },

    /// File system error during an operation.
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// Operation being performed (e.g. "copy", "create directory")
        operation: String,
        /// Path involved in the failure
        path: String,
    },

    /// I/O error from [`std::io::Error`].
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error from [`serde_json::Error`].
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Catch-all for errors that don't fit other categories.
    #[error("{0}")]
    Other(String),
}

/// Wrapper that pairs a [`HarukitError`] with user-facing guidance.
///
/// Suggestions are actionable steps (displayed green); details explain why
/// the error occurred (displayed yellow).
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: HarukitError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: HarukitError) -> Self {
        Self { error, suggestion: None, details: None }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// Error message in red, details in yellow, suggestion in green. This is
    /// the primary way the CLI presents errors to users.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Build the user-facing context for a typed error.
fn create_error_context(error: HarukitError) -> ErrorContext {
    match &error {
        HarukitError::ConfigMissing { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'harukit init' to set up Harukit in this project")
            .with_details("Harukit stores per-project state in harukit.json at the project root"),

        HarukitError::ConfigSaveFailed { .. } => ErrorContext::new(error)
            .with_suggestion("Check write permissions and free disk space for the project directory")
            .with_details("The in-memory configuration could not be persisted; the project may now be in an inconsistent state"),

        HarukitError::ComponentNotFound { name } => {
            let suggestion = format!(
                "Run 'harukit list' to see available components, or check the spelling of '{name}'"
            );
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        HarukitError::TemplateNotFound { probed, .. } => {
            let details = format!("Probed locations:\n  - {}", probed.join("\n  - "));
            ErrorContext::new(error)
                .with_suggestion(
                    "Reinstall harukit so the templates directory ships next to the binary",
                )
                .with_details(details)
        }

        HarukitError::PackageManagerFailed { manager, .. } => {
            let suggestion = format!(
                "Inspect the {manager} output above; running the install manually may show more detail"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Dependency installation is required before component files are usable")
        }

        HarukitError::PackageManagerSpawnFailed { manager, .. } => {
            let suggestion = format!("Ensure '{manager}' is installed and available on your PATH");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        HarukitError::ProjectInvalid { .. } => ErrorContext::new(error)
            .with_suggestion("Run this command inside a project containing a package.json")
            .with_details("Harukit inspects package.json to detect the framework and tooling in use"),

        _ => ErrorContext::new(error),
    }
}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Typed [`HarukitError`]s get tailored suggestions; bare I/O errors get
/// generic guidance; everything else is shown with its full error chain so
/// the user sees the cause without a raw stack trace.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if error.downcast_ref::<HarukitError>().is_some() {
        return match error.downcast::<HarukitError>() {
            Ok(e) => create_error_context(e),
            Err(e) => ErrorContext::new(HarukitError::Other(e.to_string())),
        };
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(HarukitError::Other(error.to_string()))
                    .with_suggestion(
                        "Try running with elevated permissions or check file ownership",
                    )
                    .with_details("Harukit does not have permission to read or write a file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(HarukitError::Other(error.to_string()))
                    .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(HarukitError::Other(message))
}
