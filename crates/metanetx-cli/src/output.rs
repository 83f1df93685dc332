// Rust guideline compliant 2026-10-18

//! Output formatting module for the mnx CLI.
//!
//! This module provides functionality for formatting metabolite records
//! and configuration in various output formats (JSON, table, plain text).

use metanetx_core::{ErrorCode, MetaboliteRecord, ResolverConfig};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting resolver output in different formats.
pub trait OutputFormatter {
    /// Formats the record resolved for `token`.
    ///
    /// An empty record is rendered as "no match".
    fn format_record(&self, token: &str, record: &MetaboliteRecord) -> String;

    /// Formats the effective configuration.
    fn format_config(&self, config: &ResolverConfig) -> String;

    /// Formats an error message, with its stable code when one is known.
    fn format_error(&self, error: &str, code: Option<ErrorCode>) -> String;
}

/// JSON output formatter.
///
/// Formats records as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, token: &str, record: &MetaboliteRecord) -> String {
        let output = json!({
            "query": token,
            "found": !record.is_empty(),
            "record": record,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize record" }).to_string())
    }

    fn format_config(&self, config: &ResolverConfig) -> String {
        serde_json::to_string_pretty(config)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize config" }).to_string())
    }

    fn format_error(&self, error: &str, code: Option<ErrorCode>) -> String {
        match code {
            Some(code) => json!({ "error": error, "code": code }).to_string(),
            None => json!({ "error": error }).to_string(),
        }
    }
}

/// Table output formatter.
///
/// Formats records as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_record(&self, token: &str, record: &MetaboliteRecord) -> String {
        if record.is_empty() {
            return format!("No match for '{}'.", token);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Field", "Value"]);
        for (field, value) in record.fields() {
            builder.push_record(vec![field, if value.is_empty() { "-" } else { value }]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_config(&self, config: &ResolverConfig) -> String {
        let timeout = config
            .timeout_secs
            .map(|secs| format!("{}s", secs))
            .unwrap_or_else(|| "default".to_string());

        let mut builder = Builder::default();
        builder.push_record(vec!["Setting", "Value"]);
        builder.push_record(vec!["id_mapper_url", config.id_mapper_url.as_str()]);
        builder.push_record(vec!["search_url", config.search_url.as_str()]);
        builder.push_record(vec!["timeout", timeout.as_str()]);
        builder.push_record(vec!["user_agent", config.user_agent.as_str()]);

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str, _code: Option<ErrorCode>) -> String {
        if self.use_color {
            let mut output = Buffer::ansi();
            let _ = output.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(output, "Error: ");
            let _ = output.reset();
            let _ = write!(output, "{}", error);
            String::from_utf8_lossy(output.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// One `field<TAB>value` line per resolved field.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_record(&self, token: &str, record: &MetaboliteRecord) -> String {
        if record.is_empty() {
            return format!("No match for '{}'.", token);
        }

        let mut output = String::new();
        for (field, value) in record.fields() {
            output.push_str(&format!("{}\t{}\n", field, value));
        }
        output
    }

    fn format_config(&self, config: &ResolverConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!("id_mapper_url\t{}\n", config.id_mapper_url));
        output.push_str(&format!("search_url\t{}\n", config.search_url));
        if let Some(secs) = config.timeout_secs {
            output.push_str(&format!("timeout_secs\t{}\n", secs));
        }
        output.push_str(&format!("user_agent\t{}\n", config.user_agent));
        output
    }

    fn format_error(&self, error: &str, _code: Option<ErrorCode>) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
