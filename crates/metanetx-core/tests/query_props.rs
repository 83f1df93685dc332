// Rust guideline compliant 2026-10-18

//! Property-based tests for query normalization.

use metanetx_core::query::normalize;
use metanetx_core::{InputType, LookupRequest};
use proptest::prelude::*;

/// Generates arbitrary InputType values.
fn arb_input_type() -> impl Strategy<Value = InputType> {
    prop_oneof![
        Just(InputType::Id),
        Just(InputType::Name),
        Just(InputType::Vmh),
        Just(InputType::Chebi),
    ]
}

/// Generates non-empty identifier-like tokens, some already marked.
fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\+?[A-Za-z0-9_:.()-]{1,40}").unwrap()
}

proptest! {
    /// Every non-empty query starts with exactly the marker the caller gave
    /// or a single added one.
    #[test]
    fn test_query_always_marked(token in arb_token(), input_type in arb_input_type()) {
        let query = normalize(&token, input_type);
        prop_assert!(query.starts_with('+'));
        if !token.starts_with('+') || input_type.namespace().is_some() {
            prop_assert!(!query.starts_with("++"), "marker added twice: {}", query);
        }
    }

    /// The token is carried through unchanged after its namespace tag.
    #[test]
    fn test_query_ends_with_token(token in arb_token(), input_type in arb_input_type()) {
        let query = normalize(&token, input_type);
        prop_assert!(query.ends_with(&token));
        if let Some(namespace) = input_type.namespace() {
            prop_assert_eq!(query, format!("+{}{}", namespace, token));
        }
    }

    /// Normalizing an already normalized bare identifier is a no-op.
    #[test]
    fn test_id_normalization_idempotent(token in arb_token()) {
        let once = normalize(&token, InputType::Id);
        let twice = normalize(&once, InputType::Id);
        prop_assert_eq!(once, twice);
    }

    /// Tag strings parse back to the same input type.
    #[test]
    fn test_tag_roundtrip(input_type in arb_input_type()) {
        let parsed: InputType = input_type.as_str().parse().unwrap();
        prop_assert_eq!(parsed, input_type);
    }

    /// Only the empty token produces an empty request.
    #[test]
    fn test_request_empty_iff_token_empty(token in "[a-z]{0,3}", input_type in arb_input_type()) {
        let request = LookupRequest::new(token.clone(), input_type);
        prop_assert_eq!(request.is_empty(), token.is_empty());
    }
}
