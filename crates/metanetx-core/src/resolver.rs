// Rust guideline compliant 2026-10-18

//! Resolution of metabolite tokens to cross-reference records.

use crate::config::ResolverConfig;
use crate::models::{InputType, MetaboliteRecord};
use crate::query::{Endpoint, LookupRequest};
use crate::response::{first_candidate, parse_id_mapper};
use crate::source::{HttpSource, MetaboliteSource};
use crate::Result;
use serde_json::Value;
use tracing::{debug, info};

/// Resolves identifiers and names against a [`MetaboliteSource`].
///
/// Holds no mutable state; a single resolver can serve any number of
/// lookups, from any number of threads if the source allows it.
#[derive(Debug, Clone)]
pub struct IdentifierResolver<S> {
    source: S,
}

impl IdentifierResolver<HttpSource> {
    /// Creates a resolver backed by the live MetaNetX service.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: ResolverConfig) -> Result<Self> {
        Ok(Self::new(HttpSource::new(config)?))
    }
}

impl<S: MetaboliteSource> IdentifierResolver<S> {
    /// Creates a resolver over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves `token` interpreted according to `tag`.
    ///
    /// `None` means a bare identifier. The tag is checked before anything is
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an
    /// unknown tag, otherwise the errors of [`IdentifierResolver::resolve`].
    pub fn resolve_tagged(&self, token: &str, tag: Option<&str>) -> Result<MetaboliteRecord> {
        let input_type = match tag {
            Some(tag) => tag.parse::<InputType>()?,
            None => InputType::default(),
        };
        self.resolve(token, input_type)
    }

    /// Resolves `token` to a single metabolite record.
    ///
    /// Name searches take the first candidate and look up its MetaNetX
    /// identifier with a second request. A token that matches nothing yields
    /// an empty record; an empty token yields an empty record without any
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RemoteLookupFailed`](crate::Error::RemoteLookupFailed)
    /// if the service cannot be reached, or
    /// [`Error::MalformedResponse`](crate::Error::MalformedResponse) if it
    /// answers with unexpected JSON.
    pub fn resolve(&self, token: &str, input_type: InputType) -> Result<MetaboliteRecord> {
        let request = LookupRequest::new(token, input_type);
        if request.is_empty() {
            debug!("empty token, skipping lookup");
            return Ok(MetaboliteRecord::default());
        }

        let response = match request.endpoint() {
            Endpoint::IdMapper => {
                debug!(query = %request.query, %input_type, "id-mapper lookup");
                self.source.fetch_by_id(&request.query)?
            }
            Endpoint::Search => self.search_then_map(&request)?,
        };

        let record = parse_id_mapper(&response)?;
        if record.is_empty() {
            info!(token = %request.token, %input_type, "no MetaNetX match");
        }
        Ok(record)
    }

    fn search_then_map(&self, request: &LookupRequest) -> Result<Value> {
        debug!(query = %request.query, "name search");
        let hits = self.source.search_by_name(&request.query)?;

        let Some(candidate) = first_candidate(&hits)? else {
            return Ok(Value::Null);
        };

        debug!(
            mnx_id = %candidate.mnx_id,
            desc = candidate.desc.as_deref().unwrap_or(""),
            "following up on first search candidate"
        );
        self.source.fetch_by_id(&candidate.mnx_id)
    }
}
