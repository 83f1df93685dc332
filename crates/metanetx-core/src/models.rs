// Rust guideline compliant 2026-10-18

//! Core data models for metabolite lookups.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of token handed to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    /// Bare identifier, sent without a namespace tag.
    #[default]
    Id,
    /// Free-text metabolite name, resolved through the search endpoint.
    Name,
    /// Virtual Metabolic Human abbreviation.
    Vmh,
    /// ChEBI accession.
    Chebi,
}

impl InputType {
    /// All supported input types, in tag order.
    pub const ALL: [InputType; 4] = [
        InputType::Id,
        InputType::Name,
        InputType::Vmh,
        InputType::Chebi,
    ];

    /// Returns the tag used to select this input type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Id => "id",
            InputType::Name => "name",
            InputType::Vmh => "vmh",
            InputType::Chebi => "chebi",
        }
    }

    /// Namespace tag prepended to the token before it is sent, if any.
    #[must_use]
    pub fn namespace(self) -> Option<&'static str> {
        match self {
            InputType::Vmh => Some("vmhM:"),
            InputType::Chebi => Some("chebi:"),
            InputType::Id | InputType::Name => None,
        }
    }

    /// Whether lookups of this type go through the name-search endpoint.
    #[must_use]
    pub fn is_name_search(self) -> bool {
        matches!(self, InputType::Name)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "id" => Ok(InputType::Id),
            "name" => Ok(InputType::Name),
            "vmh" => Ok(InputType::Vmh),
            "chebi" => Ok(InputType::Chebi),
            other => Err(Error::InvalidArgument(format!(
                "unsupported input type '{}', expected one of: id, name, vmh, chebi",
                other
            ))),
        }
    }
}

/// Cross-reference record for a single resolved metabolite.
///
/// Every field is empty text unless the remote response supplied it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaboliteRecord {
    /// Display name of the metabolite.
    #[serde(default)]
    pub name: String,
    /// MetaNetX chemical identifier (`MNXM...`).
    #[serde(default)]
    pub metanetx: String,
    /// Virtual Metabolic Human abbreviation.
    #[serde(default)]
    pub vmh: String,
    /// ChEBI accession number.
    #[serde(default)]
    pub chebi: String,
    /// Human Metabolome Database identifier.
    #[serde(default)]
    pub hmdb: String,
    /// KEGG compound identifier.
    #[serde(default)]
    pub kegg: String,
    /// BiGG metabolite identifier.
    #[serde(default)]
    pub bigg: String,
    /// SwissLipids entry, kept with its namespace.
    #[serde(default)]
    pub swisslipids: String,
}

impl MetaboliteRecord {
    /// Returns true when no field was resolved, i.e. the lookup found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Field names paired with their values, in output order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("name", self.name.as_str()),
            ("metanetx", self.metanetx.as_str()),
            ("vmh", self.vmh.as_str()),
            ("chebi", self.chebi.as_str()),
            ("hmdb", self.hmdb.as_str()),
            ("kegg", self.kegg.as_str()),
            ("bigg", self.bigg.as_str()),
            ("swisslipids", self.swisslipids.as_str()),
        ]
    }
}
