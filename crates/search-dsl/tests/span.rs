//! Span query tests: the nested span union and its conversions to `Query`.

use search_dsl::prelude::*;
use search_dsl::Error;
use serde_json::json;

fn span_term(field: &str, value: &str) -> SpanTermQuery {
    SpanTermQuery::builder()
        .field(field)
        .value(value)
        .build()
        .unwrap()
}

#[test]
fn test_span_near_shape() {
    let near = SpanNearQuery::builder()
        .clauses(span_term("body", "quick"))
        .clauses(span_term("body", "fox"))
        .slop(2)
        .in_order(true)
        .build()
        .unwrap();

    let query = Query::from(near);
    assert_eq!(
        codec::to_value(&query).unwrap(),
        json!({"span_near": {
            "clauses": [
                {"span_term": {"body": {"value": "quick"}}},
                {"span_term": {"body": {"value": "fox"}}}
            ],
            "slop": 2,
            "in_order": true
        }})
    );

    let parsed: Query = codec::from_value(codec::to_value(&query).unwrap()).unwrap();
    assert_eq!(parsed, query);
    assert_eq!(parsed.span_near().unwrap().clauses().len(), 2);
}

#[test]
fn test_span_clauses_required() {
    let err = SpanNearQuery::builder().slop(1).build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "SpanNearQuery",
            field: "clauses"
        }
    ));

    let err = SpanOrQuery::builder().build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "SpanOrQuery",
            field: "clauses"
        }
    ));
}

#[test]
fn test_span_query_converts_to_query() {
    let span = SpanQuery::from(span_term("body", "fox"));
    assert_eq!(span.kind(), SpanQueryKind::SpanTerm);

    let query = Query::from(span.clone());
    assert!(query.is_span_term());
    assert_eq!(codec::to_value(&query).unwrap(), codec::to_value(&span).unwrap());

    let back = SpanQuery::try_from(query).unwrap();
    assert_eq!(back, span);
}

#[test]
fn test_non_span_query_is_handed_back() {
    let query = Query::from(MatchAllQuery::builder().build().unwrap());
    let rejected = SpanQuery::try_from(query.clone()).unwrap_err();
    assert_eq!(rejected, query);
}

#[test]
fn test_span_first_match_keyword() {
    let first = SpanFirstQuery::builder()
        .r#match(span_term("user", "kim"))
        .end(3)
        .build()
        .unwrap();

    let json = codec::to_value(&first).unwrap();
    assert_eq!(
        json,
        json!({"match": {"span_term": {"user": {"value": "kim"}}}, "end": 3})
    );

    let parsed: SpanFirstQuery = codec::from_value(json).unwrap();
    assert_eq!(parsed.r#match().span_term().unwrap().value(), "kim");
    assert_eq!(parsed.end(), 3);
}

#[test]
fn test_span_term_shortcut() {
    let span: SpanQuery = codec::from_value(json!({"span_term": {"user": "kim"}})).unwrap();
    assert_eq!(span, SpanQuery::from(span_term("user", "kim")));
}

#[test]
fn test_non_span_clause_rejected() {
    let err = codec::from_value::<Query>(json!({"span_or": {"clauses": [
        {"span_term": {"body": "fox"}},
        {"term": {"body": "dog"}}
    ]}}))
    .unwrap_err();

    assert_eq!(err.field_path(), "span_or.clauses");
    assert!(matches!(
        err.root_cause(),
        Error::UnrecognizedField { type_name: "SpanQuery", field } if field == "term"
    ));
}

#[test]
fn test_span_not_and_containing() {
    let json = json!({"span_not": {
        "include": {"span_term": {"body": {"value": "hoya"}}},
        "exclude": {"span_near": {"clauses": [
            {"span_term": {"body": {"value": "la"}}},
            {"span_term": {"body": {"value": "hoya"}}}
        ], "slop": 0, "in_order": true}},
        "dist": 1
    }});

    let query: Query = codec::from_value(json.clone()).unwrap();
    let not = query.span_not().unwrap();
    assert!(not.include().is_span_term());
    assert!(not.exclude().is_span_near());
    assert_eq!(not.dist(), Some(1));
    assert_eq!(not.pre(), None);
    assert_eq!(codec::to_value(&query).unwrap(), json);

    let err = SpanContainingQuery::builder()
        .big(span_term("body", "a"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "SpanContainingQuery",
            field: "little"
        }
    ));
}

#[test]
fn test_span_within_round_trip() {
    let within = SpanWithinQuery::builder()
        .big(
            SpanNearQuery::builder()
                .clauses(span_term("body", "quick"))
                .clauses(span_term("body", "fox"))
                .slop(5)
                .build()
                .unwrap(),
        )
        .little(span_term("body", "brown"))
        .boost(0.5)
        .build()
        .unwrap();
    let query = Query::from(within);

    let json = codec::to_value(&query).unwrap();
    assert_eq!(
        json,
        json!({
            "span_within": {
                "boost": 0.5,
                "big": {"span_near": {"clauses": [
                    {"span_term": {"body": {"value": "quick"}}},
                    {"span_term": {"body": {"value": "fox"}}}
                ], "slop": 5}},
                "little": {"span_term": {"body": {"value": "brown"}}}
            }
        })
    );

    let parsed: Query = codec::from_value(json).unwrap();
    assert_eq!(parsed, query);
    let within = parsed.span_within().unwrap();
    assert!(within.big().is_span_near());
    assert_eq!(within.little().span_term().unwrap().value(), "brown");
}

#[test]
fn test_span_within_requires_big() {
    let err = SpanWithinQuery::builder()
        .little(span_term("body", "brown"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "SpanWithinQuery", field: "big" }
    ));
}
