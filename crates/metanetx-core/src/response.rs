// Rust guideline compliant 2026-10-18

//! Parsing of id-mapper and search responses.
//!
//! The remote payloads are loosely shaped JSON. They are checked here and
//! mapped to [`MetaboliteRecord`]; anything that does not fit the expected
//! shape is reported as [`Error::MalformedResponse`].

use crate::models::MetaboliteRecord;
use crate::xrefs::apply_xrefs;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// One entity as returned by the id-mapper, under its query token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappedEntity {
    /// MetaNetX identifier.
    #[serde(default)]
    pub mnx_id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// `NAMESPACE:VALUE` cross-references.
    #[serde(default)]
    pub xrefs: Option<Vec<String>>,
}

impl MappedEntity {
    /// Converts the entity into a record, extracting cross-references.
    #[must_use]
    pub fn into_record(self) -> MetaboliteRecord {
        let mut record = MetaboliteRecord {
            name: self.name.unwrap_or_default(),
            metanetx: self.mnx_id.unwrap_or_default(),
            ..MetaboliteRecord::default()
        };
        if let Some(xrefs) = self.xrefs {
            apply_xrefs(&mut record, &xrefs);
        }
        record
    }
}

/// One candidate of a name search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCandidate {
    /// MetaNetX identifier, used for the follow-up id-mapper request.
    pub mnx_id: String,
    /// Human-readable description.
    #[serde(default)]
    pub desc: Option<String>,
}

/// Returns true for `null`, empty strings, empty arrays and empty objects.
#[must_use]
pub fn is_empty_response(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Parses an id-mapper response into a record.
///
/// The response is an object keyed by the queried token; only its first
/// value is considered. The id-mapper answers with a single key per query.
/// Should it send more, "first" is the lexicographically smallest key, since
/// `serde_json` maps are sorted and do not keep document order.
/// Empty responses and empty entries give an empty record.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the response or its entry is not
/// an object, or if known fields have the wrong JSON type.
pub fn parse_id_mapper(value: &Value) -> Result<MetaboliteRecord> {
    if is_empty_response(value) {
        return Ok(MetaboliteRecord::default());
    }

    let Value::Object(map) = value else {
        return Err(Error::MalformedResponse(format!(
            "id-mapper response must be an object keyed by query, got {}",
            json_kind(value)
        )));
    };

    let Some(entry) = map.values().next() else {
        return Ok(MetaboliteRecord::default());
    };

    if is_empty_response(entry) {
        return Ok(MetaboliteRecord::default());
    }

    if !entry.is_object() {
        return Err(Error::MalformedResponse(format!(
            "id-mapper entry must be an object, got {}",
            json_kind(entry)
        )));
    }

    let entity = MappedEntity::deserialize(entry)?;
    Ok(entity.into_record())
}

/// Picks the first candidate of a search response.
///
/// A bare object is treated as a single candidate. Returns `None` for an
/// empty response.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the response is neither an array
/// nor an object, or the first candidate has no string `mnx_id`.
pub fn first_candidate(value: &Value) -> Result<Option<SearchCandidate>> {
    if is_empty_response(value) {
        return Ok(None);
    }

    let first = match value {
        Value::Array(items) => &items[0],
        Value::Object(_) => value,
        other => {
            return Err(Error::MalformedResponse(format!(
                "search response must be an array of candidates, got {}",
                json_kind(other)
            )))
        }
    };

    let candidate = SearchCandidate::deserialize(first)?;
    Ok(Some(candidate))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
