//! Query union tests: kind mapping, variant exclusivity and key dispatch.

use rstest::rstest;
use search_dsl::prelude::*;
use search_dsl::Error;
use serde_json::json;

fn term(field: &str, value: &str) -> TermQuery {
    TermQuery::builder().field(field).value(value).build().unwrap()
}

#[test]
fn test_bool_end_to_end() {
    let query: Query = BoolQuery::builder()
        .must(term("a", "1"))
        .set_should(vec![])
        .build()
        .unwrap()
        .into();

    let json = codec::to_string(&query).unwrap();
    assert_eq!(json, r#"{"bool":{"must":[{"term":{"a":{"value":"1"}}}]}}"#);

    let parsed: Query = codec::from_str(&json).unwrap();
    assert_eq!(parsed, query);
    assert!(parsed.bool().unwrap().should().is_empty());
}

#[rstest]
#[case(QueryKind::Bool, "bool")]
#[case(QueryKind::ConstantScore, "constant_score")]
#[case(QueryKind::Term, "term")]
#[case(QueryKind::Terms, "terms")]
#[case(QueryKind::Match, "match")]
#[case(QueryKind::MatchPhrasePrefix, "match_phrase_prefix")]
#[case(QueryKind::Intervals, "intervals")]
#[case(QueryKind::SpanContaining, "span_containing")]
fn test_kind_json_values(#[case] kind: QueryKind, #[case] json_value: &str) {
    assert_eq!(kind.json_value(), json_value);
    assert_eq!(kind.to_string(), json_value);
    assert_eq!(QueryKind::from_json_value(json_value), Some(kind));
}

#[test]
fn test_kind_table_is_complete() {
    assert_eq!(QueryKind::ALL.len(), QueryKind::JSON_VALUES.len());
    for (kind, json_value) in QueryKind::ALL.iter().zip(QueryKind::JSON_VALUES) {
        assert_eq!(kind.json_value(), *json_value);
        assert!(!kind.payload_schema().type_name.is_empty());
    }
    assert_eq!(QueryKind::Term.payload_schema().type_name, "TermQuery");
}

#[test]
fn test_variant_exclusivity() {
    let query = Query::from(term("status", "ok"));

    assert!(query.is_term());
    assert!(!query.is_bool());
    assert!(!query.is_terms());
    assert!(!query.is_span_term());
    assert_eq!(query.kind(), QueryKind::Term);
    assert_eq!(query.term().unwrap().field(), "status");

    let err = query.bool().unwrap_err();
    assert!(matches!(
        err,
        Error::WrongVariant {
            type_name: "Query",
            expected: "bool",
            actual: "term"
        }
    ));
}

#[test]
fn test_builder_last_variant_wins() {
    let query = Query::builder()
        .term(term("a", "1"))
        .exists(ExistsQuery::builder().field("b").build().unwrap())
        .build()
        .unwrap();

    assert!(query.is_exists());
    assert!(query.term().is_err());
}

#[test]
fn test_builder_without_variant_fails() {
    let err = Query::builder().build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "Query",
            field: "<variant kind>"
        }
    ));
}

#[test]
fn test_two_variant_keys_are_ambiguous() {
    let err = codec::from_value::<Query>(json!({
        "term": {"a": "1"},
        "exists": {"field": "b"}
    }))
    .unwrap_err();

    match err {
        Error::AmbiguousVariant {
            type_name,
            first,
            second,
        } => {
            assert_eq!(type_name, "Query");
            assert_eq!(first, "term");
            assert_eq!(second, "exists");
        }
        other => panic!("expected AmbiguousVariant, got {other:?}"),
    }
}

#[test]
fn test_unknown_kind_rejected() {
    let err = codec::from_value::<Query>(json!({"percolate": {}})).unwrap_err();
    assert!(matches!(
        err,
        Error::UnrecognizedField { type_name: "Query", ref field } if field == "percolate"
    ));
}

#[test]
fn test_empty_object_has_no_variant() {
    let err = codec::from_value::<Query>(json!({})).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { type_name: "Query", .. }));
}

#[test]
fn test_nested_error_names_path() {
    let err = codec::from_value::<Query>(json!({
        "bool": {"must": [{"term": {"a": {"valeu": "1"}}}]}
    }))
    .unwrap_err();

    assert_eq!(err.field_path(), "bool.must.term");
    assert!(matches!(
        err.root_cause(),
        Error::UnrecognizedField { type_name: "TermQuery", field } if field == "valeu"
    ));
}

#[test]
fn test_serde_impls_agree_with_codec() {
    let query = Query::from(MatchAllQuery::builder().boost(1.5).build().unwrap());

    let via_serde = serde_json::to_string(&query).unwrap();
    assert_eq!(via_serde, r#"{"match_all":{"boost":1.5}}"#);

    let parsed: Query = serde_json::from_str(&via_serde).unwrap();
    assert_eq!(parsed, query);

    let err = serde_json::from_str::<Query>(r#"{"match_all":{"bost":1}}"#).unwrap_err();
    assert!(err.to_string().contains("bost"));
}

#[test]
fn test_non_object_query_rejected() {
    let err = codec::from_value::<Query>(json!(["term"])).unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedShape {
            type_name: "Query",
            expected: "object",
            found: "array"
        }
    ));
}
