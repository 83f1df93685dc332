// Rust guideline compliant 2026-10-18

//! Property-based tests for cross-reference extraction.

use metanetx_core::xrefs::apply_xrefs;
use metanetx_core::MetaboliteRecord;
use proptest::prelude::*;

/// Generates xref entries from namespaces that match no extraction rule.
fn arb_unrelated_xref() -> impl Strategy<Value = String> {
    prop::string::string_regex("(metacyc\\.compound|reactome|envipath|sabiork):[0-9]{1,10}")
        .unwrap()
}

fn extract(xrefs: &[String]) -> MetaboliteRecord {
    let mut record = MetaboliteRecord::default();
    apply_xrefs(&mut record, xrefs);
    record
}

proptest! {
    /// Unrelated namespaces never populate any field.
    #[test]
    fn test_unrelated_xrefs_leave_record_empty(
        xrefs in prop::collection::vec(arb_unrelated_xref(), 0..20)
    ) {
        prop_assert!(extract(&xrefs).is_empty());
    }

    /// The first kegg entry wins wherever it sits among unrelated entries.
    #[test]
    fn test_first_kegg_entry_wins(
        before in prop::collection::vec(arb_unrelated_xref(), 0..10),
        first in "C[0-9]{5}",
        second in "C[0-9]{5}",
    ) {
        let mut xrefs = before;
        xrefs.push(format!("kegg.compound:{}", first));
        xrefs.push(format!("kegg.compound:{}", second));

        let record = extract(&xrefs);
        prop_assert_eq!(record.kegg, first);
    }

    /// Fields are extracted independently of each other's order.
    #[test]
    fn test_fields_independent_of_order(
        chebi in "[0-9]{1,6}",
        hmdb in "HMDB[0-9]{7}",
        reverse in any::<bool>(),
    ) {
        let mut xrefs = vec![format!("chebi:{}", chebi), format!("hmdb:{}", hmdb)];
        if reverse {
            xrefs.reverse();
        }

        let record = extract(&xrefs);
        prop_assert_eq!(record.chebi, chebi);
        prop_assert_eq!(record.hmdb, hmdb);
    }
}
