//! Term-level query tests: single-key dictionary shapes and shortcut values.

use rstest::rstest;
use search_dsl::prelude::*;
use search_dsl::Error;
use serde_json::{json, Value};

#[test]
fn test_term_single_key_shape() {
    let query = Query::from(
        TermQuery::builder()
            .field("status")
            .value("ok")
            .build()
            .unwrap(),
    );

    let json = codec::to_value(&query).unwrap();
    assert_eq!(json, json!({"term": {"status": {"value": "ok"}}}));

    let parsed: Query = codec::from_value(json).unwrap();
    let term = parsed.term().unwrap();
    assert_eq!(term.field(), "status");
    assert_eq!(term.value(), &FieldValue::from("ok"));
}

#[test]
fn test_term_base_fields_written_first() {
    let term = TermQuery::builder()
        .field("a")
        .value(1_i64)
        .case_insensitive(true)
        .boost(2.0)
        .query_name("q1")
        .build()
        .unwrap();

    assert_eq!(
        codec::to_string(&term).unwrap(),
        r#"{"a":{"boost":2.0,"_name":"q1","value":1,"case_insensitive":true}}"#
    );
    assert_eq!(term.base().boost(), Some(2.0));
    assert_eq!(term.base().name(), Some("q1"));
}

#[rstest]
#[case("term", "value")]
#[case("prefix", "value")]
#[case("wildcard", "value")]
#[case("regexp", "value")]
#[case("fuzzy", "value")]
#[case("span_term", "value")]
#[case("match", "query")]
#[case("match_phrase", "query")]
#[case("match_phrase_prefix", "query")]
fn test_shortcut_equivalence(#[case] kind: &str, #[case] property: &str) {
    let mut body = serde_json::Map::new();
    body.insert(property.to_string(), json!("ok"));

    let bare: Query = codec::from_value(json!({ kind: {"status": "ok"} })).unwrap();
    let full: Query = codec::from_value(json!({ kind: {"status": Value::Object(body)} })).unwrap();

    assert_eq!(bare, full);
    assert_eq!(bare.kind().json_value(), kind);
}

#[test]
fn test_shortcut_only_for_declared_kinds() {
    let err = codec::from_value::<Query>(json!({"range": {"age": 5}})).unwrap_err();
    assert_eq!(err.field_path(), "range");
    assert!(matches!(
        err.root_cause(),
        Error::UnexpectedShape {
            type_name: "RangeQuery",
            found: "number",
            ..
        }
    ));
}

#[test]
fn test_term_required_fields() {
    let err = TermQuery::builder().field("a").build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "TermQuery",
            field: "value"
        }
    ));

    let err = TermQuery::builder().value("1").build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "TermQuery",
            field: "field"
        }
    ));

    assert!(TermQuery::builder().field("a").value("1").build().is_ok());
}

#[test]
fn test_wrapper_key_rejects_second_field() {
    let err = codec::from_value::<Query>(json!({"term": {"a": "1", "b": "2"}})).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        Error::UnrecognizedField { type_name: "TermQuery", field } if field == "b"
    ));

    let err = codec::from_value::<Query>(json!({"term": {}})).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        Error::MissingRequiredField {
            type_name: "TermQuery",
            field: "field"
        }
    ));
}

#[test]
fn test_terms_sibling_key() {
    let terms = TermsQuery::builder()
        .field("status")
        .value("ok")
        .values_all(["warn", "error"])
        .boost(2.0)
        .build()
        .unwrap();

    let json = codec::to_value(&Query::from(terms.clone())).unwrap();
    assert_eq!(
        json,
        json!({"terms": {"status": ["ok", "warn", "error"], "boost": 2.0}})
    );

    let parsed: Query =
        codec::from_value(json!({"terms": {"boost": 2.0, "status": ["ok", "warn", "error"]}}))
            .unwrap();
    assert_eq!(parsed.terms().unwrap(), &terms);
}

#[test]
fn test_terms_rejects_second_dynamic_key() {
    let err = codec::from_value::<TermsQuery>(json!({"status": ["ok"], "level": ["warn"]}))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnrecognizedField { type_name: "TermsQuery", ref field } if field == "level"
    ));

    let err = codec::from_value::<TermsQuery>(json!({"boost": 1.0})).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "TermsQuery",
            field: "field"
        }
    ));
}

#[test]
fn test_range_bounds() {
    let json = json!({"range": {"age": {"gte": 10, "lt": 20, "relation": "within"}}});
    let query: Query = codec::from_value(json.clone()).unwrap();

    let range = query.range().unwrap();
    assert_eq!(range.field(), "age");
    assert_eq!(range.gte().map(JsonData::as_value), Some(&json!(10)));
    assert_eq!(range.lt().map(JsonData::as_value), Some(&json!(20)));
    assert_eq!(range.relation(), Some(RangeRelation::Within));
    assert!(range.gt().is_none());

    assert_eq!(codec::to_value(&query).unwrap(), json);
}

#[test]
fn test_ids_append_and_replace() {
    let ids = IdsQuery::builder()
        .value("a")
        .value("b")
        .values_all(["c", "d"])
        .build()
        .unwrap();
    assert_eq!(ids.values(), ["a", "b", "c", "d"]);

    let ids = IdsQuery::builder()
        .values_all(["a", "b"])
        .set_values(vec!["x".to_string()])
        .build()
        .unwrap();
    assert_eq!(ids.values(), ["x"]);
}

#[test]
fn test_ids_accepts_single_value() {
    let ids: IdsQuery = codec::from_value(json!({"values": "1"})).unwrap();
    assert_eq!(ids.values(), ["1"]);
    assert_eq!(codec::to_value(&ids).unwrap(), json!({"values": ["1"]}));
}

#[test]
fn test_null_optional_reads_as_absent() {
    let query: Query =
        codec::from_value(json!({"prefix": {"user": {"value": "ki", "rewrite": null}}})).unwrap();
    let prefix = query.prefix().unwrap();
    assert_eq!(prefix.rewrite(), None);
    assert_eq!(
        codec::to_value(&query).unwrap(),
        json!({"prefix": {"user": {"value": "ki"}}})
    );
}

#[test]
fn test_fuzzy_options() {
    let fuzzy = FuzzyQuery::builder()
        .field("name")
        .value("jon")
        .fuzziness(Fuzziness::auto())
        .prefix_length(1)
        .transpositions(true)
        .build()
        .unwrap();

    let json = codec::to_value(&fuzzy).unwrap();
    assert_eq!(
        json,
        json!({"name": {"value": "jon", "fuzziness": "AUTO", "prefix_length": 1, "transpositions": true}})
    );
    assert_eq!(codec::from_value::<FuzzyQuery>(json).unwrap(), fuzzy);

    let numeric: FuzzyQuery = codec::from_value(json!({"name": {"value": "jon", "fuzziness": 2}})).unwrap();
    assert_eq!(numeric.fuzziness(), Some(&Fuzziness::edits(2)));
}

#[test]
fn test_invalid_value_type_names_field() {
    let err = codec::from_value::<Query>(json!({"regexp": {"user": {"value": "k.*", "max_determinized_states": "many"}}}))
        .unwrap_err();
    assert_eq!(err.field_path(), "regexp.max_determinized_states");
    assert!(matches!(err.root_cause(), Error::Json(_)));
}

#[rstest]
#[case(FieldValue::Null)]
#[case(FieldValue::Double(f64::NAN))]
#[case(FieldValue::Double(f64::INFINITY))]
fn test_required_value_rejects_null(#[case] value: FieldValue) {
    let err = TermQuery::builder()
        .field("a")
        .value(value.clone())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "TermQuery", field: "value" }
    ));

    let err = FuzzyQuery::builder()
        .field("a")
        .value(value.clone())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "FuzzyQuery", field: "value" }
    ));

    let err = MatchQuery::builder().field("a").query(value).build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "MatchQuery", field: "query" }
    ));
}

#[test]
fn test_explicit_null_value_decodes_as_missing() {
    let err = codec::from_value::<Query>(json!({"term": {"a": {"value": null}}})).unwrap_err();
    assert_eq!(err.field_path(), "term");
    assert!(matches!(
        err.root_cause(),
        Error::MissingRequiredField { type_name: "TermQuery", field: "value" }
    ));
}

#[rstest]
#[case(TermQuery::builder().field("a").value(0.5).build().unwrap().into())]
#[case(TermQuery::builder().field("a").value(false).build().unwrap().into())]
#[case(FuzzyQuery::builder().field("a").value(-3_i64).build().unwrap().into())]
#[case(PrefixQuery::builder().field("a").value("").build().unwrap().into())]
#[case(WildcardQuery::builder().field("a").value("k*").build().unwrap().into())]
#[case(RegexpQuery::builder().field("a").value("k.*").build().unwrap().into())]
#[case(SpanTermQuery::builder().field("a").value("kim").build().unwrap().into())]
#[case(MatchQuery::builder().field("a").query(7_i64).build().unwrap().into())]
fn test_wrapper_keyed_built_values_round_trip(#[case] query: Query) {
    let json = codec::to_value(&query).unwrap();
    let parsed: Query = codec::from_value(json).unwrap();
    assert_eq!(parsed, query);
}

#[test]
fn test_range_drops_null_bounds() {
    let range = RangeQuery::builder()
        .field("a")
        .gt(JsonData::from(Value::Null))
        .lte(5_i64)
        .build()
        .unwrap();
    assert!(range.gt().is_none());

    let query = Query::from(range);
    let json = codec::to_value(&query).unwrap();
    assert_eq!(json, json!({"range": {"a": {"lte": 5}}}));
    assert_eq!(codec::from_value::<Query>(json).unwrap(), query);
}

#[rstest]
#[case("boost")]
#[case("_name")]
fn test_terms_rejects_reserved_field_names(#[case] field: &str) {
    let err = TermsQuery::builder()
        .field(field)
        .value("x")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ReservedKey { type_name: "TermsQuery", ref key } if key == field
    ));
}
