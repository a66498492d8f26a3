//! # nextkit-cli
//!
//! Command-line tool for cleaning up and scaffolding Next.js projects.
//!
//! This crate provides the `nextkit` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `nextkit start [--tailwind]` | Remove starter assets and create the standard folder structure |
//! | `nextkit component <name> [--js]` | Create an empty component in `src/components/` |
//! | `nextkit container <name> [--js]` | Create an empty container in `src/containers/` |
//! | `nextkit version` | Print the version string |
//!
//! ## Architecture
//!
//! - [`cli`] - argument parsing and dispatch
//! - [`commands`] - one module per command, plus [`commands::templates`]
//! - [`fs_ops`] - filesystem primitives and the best-effort step log
//! - [`package`] - `package.json` metadata
//! - [`layout`] - fixed project paths
//! - [`error`] - error type and exit statuses
//!
//! All paths are relative to the current working directory.

pub mod cli;
pub mod commands;
pub mod error;
pub mod fs_ops;
pub mod layout;
pub mod package;
