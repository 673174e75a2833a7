//! Harukit - copy-in React UI components for your project.
//!
//! Harukit is a component scaffolding CLI: it copies React component source
//! files into a consuming project, resolves each component's npm
//! dependencies, installs them via the detected package manager, and tracks
//! installed state in a project-local `harukit.json`.
//!
//! # Architecture Overview
//!
//! One invocation flows leaf-to-root through the modules below:
//! command layer → configuration load → registry lookup → package manager
//! install → template resolution + file installation → configuration
//! persist.
//!
//! - **Local catalog**: components are resolved from a statically seeded
//!   table; no network registry is consulted (the `registry.url` config
//!   field is a documented extension point)
//! - **Copy-in model**: component source lands in the user's tree and is
//!   theirs to edit; `update` only rewrites files still present
//! - **Manager-agnostic**: npm, yarn, pnpm, and bun are detected through a
//!   priority chain of independent probes
//! - **Sequential execution**: one subprocess at a time, each awaited to
//!   completion; the config file is read once and rewritten after each
//!   mutation with no locking between concurrent invocations
//!
//! # Core Modules
//!
//! - [`cli`] - command-line interface and the per-command workflows
//! - [`config`] - `harukit.json` load/merge/persist and list mutations
//! - [`registry`] - the seeded component catalog and query surface
//! - [`project`] - framework/tooling/package-manager detection
//! - [`pm`] - package manager detection chain and subprocess adapter
//! - [`templates`] - on-disk template resolution across install layouts
//! - [`installer`] - target-path resolution and the content transform
//!   pipeline
//!
//! # Supporting Modules
//!
//! - [`core`] - error types and user-friendly error rendering
//! - [`constants`] - file names, env var names, the base dependency set
//! - [`utils`] - file system helpers and progress indicators
//!
//! # Configuration Format (harukit.json)
//!
//! ```json
//! {
//!   "$schema": "https://harukit.dev/schema.json",
//!   "style": "default",
//!   "typescript": true,
//!   "aliases": { "components": "@/components", "utils": "@/lib/utils" },
//!   "components": ["button", "card"],
//!   "dependencies": ["clsx", "tailwind-merge"]
//! }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Set up a project
//! harukit init -y
//!
//! # Add components (validates names, installs packages, copies files)
//! harukit add button card
//!
//! # Inspect the catalog and the project
//! harukit list
//! harukit info button
//!
//! # Refresh files from the shipped templates
//! harukit update
//!
//! # Remove a component file and its record
//! harukit remove button
//! ```

// Core functionality modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

// Catalog and detection
pub mod project;
pub mod registry;

// Installation pipeline
pub mod installer;
pub mod pm;
pub mod templates;

// Supporting modules
pub mod utils;
