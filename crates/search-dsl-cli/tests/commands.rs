//! CLI command tests

use rstest::rstest;
use search_dsl::QueryKind;
use search_dsl_cli::commands::{
    describe_error, describe_kind, format_str, kind_table, run_describe, run_format,
    run_validate, validate_str,
};
use search_dsl_cli::config::{CliConfig, OutputSection};

#[test]
fn test_validate_reports_root_kind() {
    let kind = validate_str(r#"{"bool":{"must":{"term":{"a":"1"}}}}"#, true).unwrap();
    assert_eq!(kind, QueryKind::Bool);

    let kind = validate_str(r#"{"query":{"ids":{"values":["1"]}},"size":1}"#, true).unwrap();
    assert_eq!(kind, QueryKind::Ids);
}

#[test]
fn test_validate_error_names_path() {
    let err = validate_str(r#"{"bool":{"must":[{"term":{"a":{"valeu":"1"}}}]}}"#, true)
        .unwrap_err();
    let message = describe_error(&err);
    assert!(message.contains("valeu"), "{message}");
    assert!(message.contains("`bool.must.term`"), "{message}");
}

#[test]
fn test_validate_plain_json_error() {
    let err = validate_str("{not json", true).unwrap_err();
    assert!(!describe_error(&err).is_empty());
}

#[test]
fn test_format_expands_shortcuts() {
    let formatted = format_str(r#"{"match":{"title":"shoes"}}"#, true, false).unwrap();
    assert_eq!(formatted, r#"{"match":{"title":{"query":"shoes"}}}"#);
}

#[test]
fn test_format_writes_output_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("query.json");
    let output = dir.path().join("formatted.json");
    std::fs::write(&input, r#"{"term":{"user":"kim"}}"#)?;

    let config = CliConfig {
        output: OutputSection {
            pretty: false,
            unwrap_query: true,
        },
        ..CliConfig::default()
    };
    let code = run_format(Some(input), Some(output.clone()), None, &config).unwrap();
    assert_eq!(code, None);
    assert_eq!(
        std::fs::read_to_string(&output)?,
        "{\"term\":{\"user\":{\"value\":\"kim\"}}}\n"
    );
    Ok(())
}

#[test]
fn test_invalid_input_exits_with_failure() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("query.json");
    std::fs::write(&input, r#"{"percolate":{}}"#)?;

    let code = run_validate(Some(input), &CliConfig::default()).unwrap();
    assert_eq!(code, Some(1));

    let missing = dir.path().join("missing.json");
    let code = run_validate(Some(missing), &CliConfig::default()).unwrap();
    assert_eq!(code, Some(1));
    Ok(())
}

#[test]
fn test_kind_table_lists_every_kind() {
    let table = kind_table();
    assert_eq!(table.len(), 32);
    assert!(table.contains(&("term", "TermQuery")));
    assert!(table.contains(&("span_within", "SpanWithinQuery")));
}

#[rstest]
#[case("term", &["field", "value", "[outer key]", "shortcut"])]
#[case("terms", &["field", "[sibling key]", "boost"])]
#[case("bool", &["must", "should", "filter", "must_not", "_name"])]
fn test_describe_kind(#[case] kind: &str, #[case] expected: &[&str]) {
    let description = describe_kind(kind).unwrap();
    for needle in expected {
        assert!(description.contains(needle), "{needle} missing in:\n{description}");
    }
}

#[test]
fn test_describe_unknown_kind() {
    assert!(describe_kind("percolate").is_none());
    assert_eq!(run_describe("percolate").unwrap(), Some(1));
}

#[test]
fn test_describe_renders_one_line_per_entry() {
    let description = describe_kind("exists").unwrap();
    let lines: Vec<_> = description.lines().collect();
    assert_eq!(lines[0], "exists (ExistsQuery)");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].trim_start().starts_with("boost"));
    assert!(lines[2].trim_start().starts_with("_name"));
    assert!(lines[3].trim_start().starts_with("field"));
    assert!(lines[3].trim_end().ends_with("required"));
    assert!(description.ends_with('\n'));
}
