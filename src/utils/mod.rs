//! Cross-cutting utilities for the Harukit CLI.
//!
//! - [`fs`] - file system helpers (directory creation, JSON and text I/O)
//! - [`progress`] - spinner wrappers over `indicatif` that honor quiet and
//!   non-interactive environments

pub mod fs;
pub mod progress;
