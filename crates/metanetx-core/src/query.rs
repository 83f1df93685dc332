// Rust guideline compliant 2026-10-18

//! Query normalization for lookups.
//!
//! Tokens are tagged with their namespace and marked with a leading `+`,
//! which makes the remote service require an exact token match.

use crate::models::InputType;

/// Marker that forces an exact match on the remote side.
pub const EXACT_MATCH_MARKER: char = '+';

/// Remote endpoint a lookup is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Exact identifier mapping.
    IdMapper,
    /// Free-text name search.
    Search,
}

/// A single normalized lookup, built fresh for each resolve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Token as given by the caller.
    pub token: String,
    /// How the token should be interpreted.
    pub input_type: InputType,
    /// Token as sent to the remote service.
    pub query: String,
}

impl LookupRequest {
    /// Builds a request, applying namespace tagging and the exact-match marker.
    ///
    /// An empty token stays empty and is never sent.
    pub fn new(token: impl Into<String>, input_type: InputType) -> Self {
        let token = token.into();
        let query = normalize(&token, input_type);
        Self {
            token,
            input_type,
            query,
        }
    }

    /// Endpoint the first request of this lookup goes to.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        if self.input_type.is_name_search() {
            Endpoint::Search
        } else {
            Endpoint::IdMapper
        }
    }

    /// Whether the lookup can be skipped without contacting the service.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

/// Prefixes `token` with its namespace tag and the exact-match marker.
///
/// # Examples
///
/// ```
/// use metanetx_core::{query::normalize, InputType};
///
/// assert_eq!(normalize("glu_L", InputType::Vmh), "+vmhM:glu_L");
/// assert_eq!(normalize("+MNXM1", InputType::Id), "+MNXM1");
/// assert_eq!(normalize("", InputType::Chebi), "");
/// ```
#[must_use]
pub fn normalize(token: &str, input_type: InputType) -> String {
    if token.is_empty() {
        return String::new();
    }

    let tagged = match input_type.namespace() {
        Some(namespace) => format!("{}{}", namespace, token),
        None => token.to_string(),
    };

    if tagged.starts_with(EXACT_MATCH_MARKER) {
        tagged
    } else {
        format!("{}{}", EXACT_MATCH_MARKER, tagged)
    }
}
