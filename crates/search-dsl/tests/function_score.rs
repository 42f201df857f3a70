//! Function score tests: score function entries mixing properties and a kind key.

use search_dsl::prelude::*;
use search_dsl::Error;
use serde_json::json;

#[test]
fn test_function_entry_shape() {
    let entry = FunctionScore::builder()
        .filter(TermQuery::builder().field("tag").value("hot").build().unwrap())
        .weight(2.0)
        .function(RandomScoreFunction::default())
        .build()
        .unwrap();

    assert_eq!(entry.kind(), ScoreFunctionKind::RandomScore);
    assert_eq!(
        codec::to_string(&entry).unwrap(),
        r#"{"filter":{"term":{"tag":{"value":"hot"}}},"weight":2.0,"random_score":{}}"#
    );

    let parsed: FunctionScore = codec::from_value(json!({
        "random_score": {},
        "weight": 2.0,
        "filter": {"term": {"tag": "hot"}}
    }))
    .unwrap();
    assert_eq!(parsed, entry);
}

#[test]
fn test_function_entry_requires_function() {
    let err = FunctionScore::builder().weight(3.0).build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "FunctionScore",
            field: "<variant kind>"
        }
    ));

    let err = codec::from_value::<FunctionScore>(json!({"weight": 3.0})).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField {
            type_name: "FunctionScore",
            field: "<variant kind>"
        }
    ));
}

#[test]
fn test_function_entry_rejects_two_functions() {
    let err = codec::from_value::<FunctionScore>(json!({
        "random_score": {},
        "field_value_factor": {"field": "likes"}
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        Error::AmbiguousVariant { type_name: "FunctionScore", .. }
    ));
}

#[test]
fn test_function_score_query_round_trip() {
    let json = json!({"function_score": {
        "query": {"match_all": {}},
        "functions": [
            {"filter": {"term": {"tag": {"value": "hot"}}}, "weight": 2.0, "random_score": {"field": "_seq_no", "seed": 10}},
            {"field_value_factor": {"field": "likes", "factor": 1.2, "modifier": "log1p", "missing": 1.0}}
        ],
        "boost_mode": "multiply",
        "score_mode": "sum",
        "max_boost": 42.0
    }});

    let query: Query = codec::from_value(json.clone()).unwrap();
    let function_score = query.function_score().unwrap();
    assert!(function_score.query().unwrap().is_match_all());
    assert_eq!(function_score.functions().len(), 2);
    assert_eq!(function_score.boost_mode(), Some(FunctionBoostMode::Multiply));
    assert_eq!(function_score.score_mode(), Some(FunctionScoreMode::Sum));

    let factor = function_score.functions()[1]
        .function()
        .field_value_factor()
        .unwrap();
    assert_eq!(factor.field(), "likes");
    assert_eq!(factor.modifier(), Some(FieldValueFactorModifier::Log1p));

    assert_eq!(codec::to_value(&query).unwrap(), json);
}

#[test]
fn test_script_score_function_shortcut() {
    let entry: FunctionScore = codec::from_value(json!({
        "script_score": {"script": "Math.log(2 + doc['likes'].value)"}
    }))
    .unwrap();

    let script = entry.function().script_score().unwrap().script();
    assert_eq!(script.source(), "Math.log(2 + doc['likes'].value)");
    assert_eq!(script, &Script::inline("Math.log(2 + doc['likes'].value)"));

    assert_eq!(
        codec::to_value(&entry).unwrap(),
        json!({"script_score": {"script": {"source": "Math.log(2 + doc['likes'].value)"}}})
    );
}

#[test]
fn test_functions_from_payloads() {
    let query = FunctionScoreQuery::builder()
        .functions(RandomScoreFunction::builder().seed(7_i64).build().unwrap())
        .functions_all([ScoreFunction::from(
            FieldValueFactorScoreFunction::builder()
                .field("likes")
                .build()
                .unwrap(),
        )])
        .min_score(0.5)
        .build()
        .unwrap();

    let kinds: Vec<_> = query.functions().iter().map(FunctionScore::kind).collect();
    assert_eq!(
        kinds,
        [ScoreFunctionKind::RandomScore, ScoreFunctionKind::FieldValueFactor]
    );
    assert!(query.query().is_none());
    assert_eq!(query.min_score(), Some(0.5));
}

#[test]
fn test_field_value_factor_requires_field() {
    let err = codec::from_value::<ScoreFunction>(json!({"field_value_factor": {"factor": 2}}))
        .unwrap_err();
    assert_eq!(err.field_path(), "field_value_factor");
    assert!(matches!(
        err.root_cause(),
        Error::MissingRequiredField {
            type_name: "FieldValueFactorScoreFunction",
            field: "field"
        }
    ));
}

#[test]
fn test_random_score_drops_null_seed() {
    let function = RandomScoreFunction::builder()
        .field("_seq_no")
        .seed(JsonData::from(serde_json::Value::Null))
        .build()
        .unwrap();
    assert!(function.seed().is_none());

    let json = codec::to_value(&function).unwrap();
    assert_eq!(json, json!({"field": "_seq_no"}));
    assert_eq!(codec::from_value::<RandomScoreFunction>(json).unwrap(), function);
}
