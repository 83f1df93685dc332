// Rust guideline compliant 2026-10-18

//! Tracing setup for the mnx CLI.
//!
//! Logs go to stderr so that stdout carries only command output.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global fmt subscriber at `level`.
///
/// # Errors
///
/// Returns an error if `level` is not one of error, warn, info, debug.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level: {}", other),
    }
}
