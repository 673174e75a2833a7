//! Core types and error handling shared across the Harukit CLI.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`HarukitError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!    for CLI users

pub mod error;

pub use error::{user_friendly_error, ErrorContext, HarukitError};
