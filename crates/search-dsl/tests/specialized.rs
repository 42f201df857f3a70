//! Script and match_none query tests.

use search_dsl::prelude::*;
use search_dsl::Error;
use serde_json::json;

#[test]
fn test_script_query_shape() {
    let script = Script::builder()
        .source("doc['price'].value > params.min")
        .lang("painless")
        .param("min", 10_i64)
        .build()
        .unwrap();
    let query = Query::from(ScriptQuery::builder().script(script).build().unwrap());

    assert_eq!(
        codec::to_value(&query).unwrap(),
        json!({
            "script": {
                "script": {
                    "source": "doc['price'].value > params.min",
                    "lang": "painless",
                    "params": {"min": 10}
                }
            }
        })
    );

    let parsed: Query = codec::from_str(&codec::to_string(&query).unwrap()).unwrap();
    assert_eq!(parsed, query);
    assert_eq!(parsed.script().unwrap().script().lang(), Some("painless"));
}

#[test]
fn test_script_query_source_shortcut() {
    let bare: Query =
        codec::from_value(json!({"script": {"script": "doc['a'].value == 1"}})).unwrap();
    let expected = Query::from(
        ScriptQuery::builder()
            .script(Script::inline("doc['a'].value == 1"))
            .build()
            .unwrap(),
    );
    assert_eq!(bare, expected);
}

#[test]
fn test_script_query_requires_script() {
    let err = ScriptQuery::builder().boost(2.0).build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "ScriptQuery", field: "script" }
    ));
}

#[test]
fn test_match_none_round_trip() {
    let query = Query::from(MatchNoneQuery::builder().build().unwrap());
    assert_eq!(codec::to_string(&query).unwrap(), r#"{"match_none":{}}"#);
    assert_eq!(codec::from_str::<Query>(r#"{"match_none":{}}"#).unwrap(), query);

    let named = Query::from(MatchNoneQuery::builder().query_name("nothing").build().unwrap());
    let json = codec::to_value(&named).unwrap();
    assert_eq!(json, json!({"match_none": {"_name": "nothing"}}));
    assert_eq!(codec::from_value::<Query>(json).unwrap(), named);
}

#[test]
fn test_match_none_rejects_unknown_field() {
    let err = codec::from_value::<Query>(json!({"match_none": {"field": "a"}})).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        Error::UnrecognizedField { type_name: "MatchNoneQuery", field } if field == "field"
    ));
}
