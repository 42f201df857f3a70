//! Intervals tests: a union embedded inside a wrapper-keyed object.

use search_dsl::prelude::*;
use search_dsl::Error;
use serde_json::json;

fn match_rule(query: &str) -> IntervalsMatch {
    IntervalsMatch::builder().query(query).build().unwrap()
}

#[test]
fn test_intervals_shape() {
    let query: Query = IntervalsQuery::builder()
        .field("body")
        .rule(match_rule("hot water"))
        .boost(2.0)
        .build()
        .unwrap()
        .into();

    assert_eq!(
        codec::to_string(&query).unwrap(),
        r#"{"intervals":{"body":{"boost":2.0,"match":{"query":"hot water"}}}}"#
    );

    let parsed: Query = codec::from_str(&codec::to_string(&query).unwrap()).unwrap();
    let intervals = parsed.intervals().unwrap();
    assert_eq!(intervals.field(), "body");
    assert_eq!(intervals.base().boost(), Some(2.0));
    assert_eq!(intervals.rule().kind(), IntervalsKind::Match);
    assert_eq!(intervals.rule().r#match().unwrap().query(), "hot water");
}

#[test]
fn test_intervals_requires_rule() {
    let err = IntervalsQuery::builder().field("body").build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "IntervalsQuery",
            field: "<variant kind>"
        }
    ));

    let err = codec::from_value::<Query>(json!({"intervals": {"body": {"boost": 1.0}}}))
        .unwrap_err();
    assert_eq!(err.field_path(), "intervals");
    assert!(matches!(
        err.root_cause(),
        Error::MissingRequiredField {
            type_name: "IntervalsQuery",
            field: "<variant kind>"
        }
    ));
}

#[test]
fn test_intervals_two_rules_are_ambiguous() {
    let err = codec::from_value::<IntervalsQuery>(json!({"body": {
        "match": {"query": "hot"},
        "prefix": {"prefix": "wat"}
    }}))
    .unwrap_err();

    assert!(matches!(
        err,
        Error::AmbiguousVariant { type_name: "IntervalsQuery", ref first, ref second }
            if first == "match" && second == "prefix"
    ));
}

#[test]
fn test_intervals_unknown_property_rejected() {
    let err = codec::from_value::<IntervalsQuery>(json!({"body": {"regexp": {"pattern": "w.*"}}}))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnrecognizedField { type_name: "IntervalsQuery", ref field } if field == "regexp"
    ));
}

#[test]
fn test_intervals_all_of_nested() {
    let rule = IntervalsAllOf::builder()
        .intervals(match_rule("my favorite food"))
        .intervals(
            IntervalsAnyOf::builder()
                .intervals(match_rule("hot water"))
                .intervals(match_rule("cold porridge"))
                .build()
                .unwrap(),
        )
        .ordered(true)
        .build()
        .unwrap();

    let query = IntervalsQuery::builder()
        .field("my_text")
        .rule(rule)
        .build()
        .unwrap();

    let json = json!({"my_text": {"all_of": {
        "intervals": [
            {"match": {"query": "my favorite food"}},
            {"any_of": {"intervals": [
                {"match": {"query": "hot water"}},
                {"match": {"query": "cold porridge"}}
            ]}}
        ],
        "ordered": true
    }}});

    assert_eq!(codec::to_value(&query).unwrap(), json);

    let parsed: IntervalsQuery = codec::from_value(json).unwrap();
    let all_of = parsed.rule().all_of().unwrap();
    assert_eq!(all_of.intervals().len(), 2);
    assert!(all_of.intervals()[1].is_any_of());
    assert_eq!(all_of.ordered(), Some(true));
}

#[test]
fn test_intervals_all_of_requires_rules() {
    let err = IntervalsAllOf::builder().max_gaps(1).build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "IntervalsAllOf",
            field: "intervals"
        }
    ));
}

#[test]
fn test_intervals_leaf_rules() {
    let cases = [
        (
            Intervals::from(
                IntervalsFuzzy::builder()
                    .term("watr")
                    .fuzziness(Fuzziness::auto())
                    .build()
                    .unwrap(),
            ),
            json!({"fuzzy": {"term": "watr", "fuzziness": "AUTO"}}),
        ),
        (
            Intervals::from(IntervalsPrefix::builder().prefix("wat").build().unwrap()),
            json!({"prefix": {"prefix": "wat"}}),
        ),
        (
            Intervals::from(
                IntervalsWildcard::builder()
                    .pattern("w*r")
                    .use_field("body.raw")
                    .build()
                    .unwrap(),
            ),
            json!({"wildcard": {"pattern": "w*r", "use_field": "body.raw"}}),
        ),
    ];

    for (rule, expected) in cases {
        assert_eq!(codec::to_value(&rule).unwrap(), expected);
        assert_eq!(codec::from_value::<Intervals>(expected).unwrap(), rule);
    }
}
