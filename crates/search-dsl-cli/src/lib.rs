//! search-dsl CLI library
//!
//! Exposes the CLI commands for programmatic use and testing.

pub mod commands;
pub mod config;
pub mod document;
pub mod logging;

pub use config::CliConfig;
pub use document::QueryDocument;
