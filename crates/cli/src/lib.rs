//! `stockpilot` command-line front end.
//!
//! Presentation layer over the inventory analytics engine: loads a snapshot,
//! runs the requested command, and renders plain-text or JSON output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod store;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use store::{SnapshotError, SnapshotFile};
