// Rust guideline compliant 2026-10-18

//! Implementation of the `mnx config` command.

use crate::OutputFormatter;
use anyhow::{bail, Result};
use metanetx_core::ResolverConfig;
use std::path::Path;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "metanetx.toml";

/// Loads the effective configuration.
///
/// An explicit `path` must exist; otherwise [`DEFAULT_CONFIG_FILE`] is used
/// when present. Environment overrides are applied on top.
///
/// # Errors
///
/// Returns an error if an explicit path does not exist or the configuration
/// is invalid.
pub fn load(path: Option<&str>) -> Result<ResolverConfig> {
    let config = match path {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            ResolverConfig::load(Some(path))?
        }
        None => ResolverConfig::load(Some(Path::new(DEFAULT_CONFIG_FILE)))?,
    };
    Ok(config)
}

/// Prints the effective configuration.
pub fn execute(config: &ResolverConfig, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", formatter.format_config(config));
    Ok(())
}
