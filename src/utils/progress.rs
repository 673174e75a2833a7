//! Progress indicators for long-running CLI operations.
//!
//! Wraps the `indicatif` spinner with consistent styling and automatic
//! disabling in non-interactive environments. Spinners are the only
//! progress type this CLI needs; every operation with unknown duration
//! (dependency installs, file copies) announces itself through one.
//!
//! # Environment Variables
//!
//! - `HARUKIT_NO_PROGRESS`: set to any value to disable all spinners

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use std::time::Duration;

use crate::constants::ENV_NO_PROGRESS;

fn is_progress_disabled() -> bool {
    std::env::var(ENV_NO_PROGRESS).is_ok()
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}

/// A spinner for indeterminate progress operations.
///
/// When progress output is disabled (quiet mode, CI, pipes) all operations
/// become no-ops on a hidden bar, so call sites never need to branch.
#[derive(Clone)]
pub struct Spinner {
    inner: IndicatifBar,
}

impl Spinner {
    /// Create a spinner and start it with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        bar.set_message(message.into());
        Self { inner: bar }
    }

    /// Update the message displayed next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Stop the spinner, leaving a final success line.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Stop the spinner and erase it, letting the caller print its own
    /// failure output.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}
