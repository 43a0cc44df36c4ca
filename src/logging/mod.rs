//! Application logging functionality
//!
//! Installs the tracing subscriber: stderr always, plus a daily log file
//! under ~/.config/fontcostumes/logs/ when asked for.

use crate::core::config::ConfigFile;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "fontcostumes.log";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::logs_dir()
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Default filter for a `-v` count; `RUST_LOG` overrides it
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Set up logging for the process
pub fn init(verbosity: u8, log_to_file: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_layer = if log_to_file {
        initialize_logs_directory()?;
        let appender = tracing_appender::rolling::daily(logs_dir(), LOG_FILE_PREFIX);
        Some(fmt::layer().with_ansi(false).with_writer(appender))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if log_to_file {
        info!(
            "=== fontcostumes started at {} ===",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        info!("Logs written to: {:?}", logs_dir());
    }
    Ok(())
}
