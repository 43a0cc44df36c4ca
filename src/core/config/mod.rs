//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - CLI arguments parsing
//! - User configuration files
//! - The validated run configuration handed to the export passes

pub mod cli;
pub mod settings;
pub mod user_config;

// Simple, clear re-exports
pub use cli::CliArgs;
pub use settings::{RunConfig, OUTPUT_SUFFIX};
pub use user_config::ConfigFile;
