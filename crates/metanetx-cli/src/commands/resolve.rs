// Rust guideline compliant 2026-10-18

//! Implementation of the `mnx resolve` command.
//!
//! Resolves a single identifier or name and prints its cross-references.

use crate::OutputFormatter;
use anyhow::Result;
use metanetx_core::{IdentifierResolver, MetaboliteSource, ResolverConfig};

/// Resolves `token` against the live MetaNetX service and prints the record.
///
/// # Arguments
///
/// * `token` - Identifier or name to resolve
/// * `input_type` - Input type tag (id, name, vmh, chebi); `None` means id
/// * `config` - Effective resolver configuration
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The input type tag is not supported
/// - The HTTP client cannot be built from `config`
/// - The service cannot be reached or answers with unexpected JSON
pub fn execute(
    token: &str,
    input_type: Option<&str>,
    config: ResolverConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let resolver = IdentifierResolver::from_config(config)?;
    let output = render(&resolver, token, input_type, formatter)?;
    println!("{}", output);
    Ok(())
}

/// Resolves `token` with `resolver` and formats the result.
///
/// # Errors
///
/// Propagates resolver errors unchanged.
pub fn render<S: MetaboliteSource>(
    resolver: &IdentifierResolver<S>,
    token: &str,
    input_type: Option<&str>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let record = resolver.resolve_tagged(token, input_type)?;
    Ok(formatter.format_record(token, &record))
}
