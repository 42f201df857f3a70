//! Query documents read by the CLI: a bare query, or a request body whose
//! `query` member holds one.

use search_dsl::{codec, Query, Result};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// Member of a request body holding the query.
pub const QUERY_MEMBER: &str = "query";

/// A decoded query plus the request body it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDocument {
    body: Option<Map<String, Value>>,
    query: Query,
}

impl QueryDocument {
    /// Decode `text`. With `unwrap_query`, a top-level object carrying a
    /// `query` member is read as a request body; other members are kept as is.
    pub fn parse(text: &str, unwrap_query: bool) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Object(mut body) if unwrap_query && body.contains_key(QUERY_MEMBER) => {
                let inner = body.get_mut(QUERY_MEMBER).map(Value::take).unwrap_or_default();
                let query = codec::from_value(inner)?;
                Ok(Self {
                    body: Some(body),
                    query,
                })
            }
            other => Ok(Self {
                body: None,
                query: codec::from_value(other)?,
            }),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn is_request_body(&self) -> bool {
        self.body.is_some()
    }

    /// Re-encode canonically, putting the query back in its request body.
    pub fn to_value(&self) -> Result<Value> {
        let query = codec::to_value(&self.query)?;
        Ok(match &self.body {
            Some(body) => {
                let mut body = body.clone();
                body.insert(QUERY_MEMBER.to_string(), query);
                Value::Object(body)
            }
            None => query,
        })
    }

    pub fn render(&self, pretty: bool) -> Result<String> {
        let value = self.to_value()?;
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

/// Read a file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    use anyhow::Context;

    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_dsl::QueryKind;
    use serde_json::json;

    #[test]
    fn test_bare_query() {
        let doc = QueryDocument::parse(r#"{"exists":{"field":"user"}}"#, true).unwrap();
        assert!(!doc.is_request_body());
        assert_eq!(doc.query().kind(), QueryKind::Exists);
    }

    #[test]
    fn test_request_body_keeps_other_members() {
        let doc = QueryDocument::parse(
            r#"{"size":10,"query":{"term":{"user":"kim"}},"sort":["_score"]}"#,
            true,
        )
        .unwrap();
        assert!(doc.is_request_body());
        assert_eq!(
            doc.render(false).unwrap(),
            r#"{"size":10,"query":{"term":{"user":{"value":"kim"}}},"sort":["_score"]}"#
        );
    }

    #[test]
    fn test_request_body_rejected_without_unwrap() {
        let err = QueryDocument::parse(r#"{"query":{"match_all":{}}}"#, false).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn test_pretty_render() {
        let doc = QueryDocument::parse(r#"{"match_all":{}}"#, false).unwrap();
        assert_eq!(doc.to_value().unwrap(), json!({"match_all": {}}));
        assert_eq!(doc.render(true).unwrap(), "{\n  \"match_all\": {}\n}");
    }
}
