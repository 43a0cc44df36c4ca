//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - CLI handling, the settings file and the validated run configuration
//! - The interactive prompt flow
//! - Error types
//! - The batch runner

pub mod config;
pub mod errors;
pub mod platform;
pub mod prompt;
pub mod runner;

// Re-export commonly used items
pub use config::{CliArgs, ConfigFile, RunConfig};
pub use errors::{FontCostumeError, Result};
pub use runner::run_app;
