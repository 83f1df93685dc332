// Rust guideline compliant 2026-10-18

//! Cross-reference extraction from `NAMESPACE:VALUE` strings.
//!
//! Each target field scans the xref list independently and takes the first
//! entry whose lowercase form contains the field's pattern.

use crate::models::MetaboliteRecord;

/// How the value is taken from a matching xref entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extract {
    /// Text after the first `:`.
    AfterColon,
    /// The whole entry, namespace included.
    Whole,
}

/// Output field populated by an xref rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Chebi,
    Hmdb,
    Vmh,
    SwissLipids,
    Kegg,
    Bigg,
}

/// Patterns are lowercase; entries are lowercased before matching.
const RULES: [(&str, Field, Extract); 6] = [
    ("chebi", Field::Chebi, Extract::AfterColon),
    ("hmdb", Field::Hmdb, Extract::AfterColon),
    ("vmhm", Field::Vmh, Extract::AfterColon),
    ("slm", Field::SwissLipids, Extract::Whole),
    ("kegg.compound", Field::Kegg, Extract::AfterColon),
    ("bigg.metabolite", Field::Bigg, Extract::AfterColon),
];

/// Fills the cross-reference fields of `record` from `xrefs`.
///
/// Fields with no matching entry are left untouched.
pub fn apply_xrefs<S: AsRef<str>>(record: &mut MetaboliteRecord, xrefs: &[S]) {
    for (pattern, field, extract) in RULES {
        let Some(entry) = first_match(xrefs, pattern) else {
            continue;
        };
        let value = match extract {
            Extract::AfterColon => after_colon(entry),
            Extract::Whole => entry,
        };
        let slot = match field {
            Field::Chebi => &mut record.chebi,
            Field::Hmdb => &mut record.hmdb,
            Field::Vmh => &mut record.vmh,
            Field::SwissLipids => &mut record.swisslipids,
            Field::Kegg => &mut record.kegg,
            Field::Bigg => &mut record.bigg,
        };
        *slot = value.to_string();
    }
}

/// Returns the first entry containing `pattern`, ignoring case.
fn first_match<'a, S: AsRef<str>>(xrefs: &'a [S], pattern: &str) -> Option<&'a str> {
    xrefs
        .iter()
        .map(AsRef::as_ref)
        .find(|entry| entry.to_lowercase().contains(pattern))
}

/// Everything after the first `:`; empty if the entry has none.
fn after_colon(entry: &str) -> &str {
    entry.split_once(':').map(|(_, rest)| rest).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(xrefs: &[&str]) -> MetaboliteRecord {
        let mut record = MetaboliteRecord::default();
        apply_xrefs(&mut record, xrefs);
        record
    }

    #[test]
    fn test_full_xref_set() {
        let record = extract(&[
            "chebi:70819",
            "hmdbHMDB:HMDB0000688",
            "vmhM:ivcrn",
            "slm:SLM:000390086",
            "kegg.compound:C00025",
            "bigg.metabolite:ivcrn",
        ]);
        assert_eq!(record.chebi, "70819");
        assert_eq!(record.hmdb, "HMDB0000688");
        assert_eq!(record.vmh, "ivcrn");
        assert_eq!(record.swisslipids, "slm:SLM:000390086");
        assert_eq!(record.kegg, "C00025");
        assert_eq!(record.bigg, "ivcrn");
    }

    #[test]
    fn test_first_match_wins() {
        let record = extract(&["CHEBI:1", "chebi:2"]);
        assert_eq!(record.chebi, "1");
    }

    #[test]
    fn test_case_insensitive_match() {
        let record = extract(&["KEGG.COMPOUND:C00031", "BiGG.Metabolite:glc__D"]);
        assert_eq!(record.kegg, "C00031");
        assert_eq!(record.bigg, "glc__D");
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let record = extract(&["chebi:CHEBI:17234"]);
        assert_eq!(record.chebi, "CHEBI:17234");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let record = extract(&["chebi:15377", "unrelated:1"]);
        assert_eq!(record.chebi, "15377");
        assert!(record.hmdb.is_empty());
        assert!(record.vmh.is_empty());
        assert!(record.swisslipids.is_empty());
        assert!(record.kegg.is_empty());
        assert!(record.bigg.is_empty());
    }

    #[test]
    fn test_entry_without_colon() {
        let record = extract(&["hmdb", "hmdb:HMDB0000122"]);
        assert_eq!(record.hmdb, "");
    }

    #[test]
    fn test_empty_list_leaves_record_untouched() {
        let mut record = MetaboliteRecord {
            chebi: "preset".to_string(),
            ..MetaboliteRecord::default()
        };
        apply_xrefs::<&str>(&mut record, &[]);
        assert_eq!(record.chebi, "preset");
    }
}
