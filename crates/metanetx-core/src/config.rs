// Rust guideline compliant 2026-10-18

//! Configuration management for the resolver.

use crate::{Error, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default MetaNetX id-mapper endpoint.
pub const DEFAULT_ID_MAPPER_URL: &str = "https://www.metanetx.org/cgi-bin/mnxweb/id-mapper";

/// Default MetaNetX search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://www.metanetx.org/cgi-bin/mnxweb/search";

/// Configuration for the HTTP source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Base URL of the id-mapper endpoint.
    #[serde(default = "default_id_mapper_url")]
    pub id_mapper_url: String,

    /// Base URL of the name-search endpoint.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Request timeout in seconds. Unset leaves the HTTP client's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with each request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_id_mapper_url() -> String {
    DEFAULT_ID_MAPPER_URL.to_string()
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("metanetx-resolve/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            id_mapper_url: default_id_mapper_url(),
            search_url: default_search_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ResolverConfig {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. TOML file at `path`, if given and present
    /// 3. Environment variables with `METANETX_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - An environment override or the final values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path.filter(|p| p.exists()) {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `METANETX_ID_MAPPER_URL` - id-mapper base URL
    /// - `METANETX_SEARCH_URL` - search base URL
    /// - `METANETX_TIMEOUT_SECS` - request timeout in seconds
    /// - `METANETX_USER_AGENT` - User-Agent header
    ///
    /// # Errors
    ///
    /// Returns an error if `METANETX_TIMEOUT_SECS` is not a number.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("METANETX_ID_MAPPER_URL") {
            self.id_mapper_url = val;
        }

        if let Ok(val) = std::env::var("METANETX_SEARCH_URL") {
            self.search_url = val;
        }

        if let Ok(val) = std::env::var("METANETX_TIMEOUT_SECS") {
            let secs = val.parse().map_err(|_| {
                Error::InvalidConfig("METANETX_TIMEOUT_SECS must be a positive number".to_string())
            })?;
            self.timeout_secs = Some(secs);
        }

        if let Ok(val) = std::env::var("METANETX_USER_AGENT") {
            self.user_agent = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either endpoint is not an absolute http(s) URL
    /// - timeout_secs is zero
    /// - user_agent is blank
    pub fn validate(&self) -> Result<()> {
        check_url("id_mapper_url", &self.id_mapper_url)?;
        check_url("search_url", &self.search_url)?;

        if self.timeout_secs == Some(0) {
            return Err(Error::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| {
        Error::InvalidConfig(format!("{} '{}' is not a valid URL: {}", field, value, e))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::InvalidConfig(format!(
            "{} must use http or https, got '{}'",
            field, other
        ))),
    }
}
