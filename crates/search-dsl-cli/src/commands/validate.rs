//! Validate command: decode a query document and report its root kind

use crate::config::CliConfig;
use crate::document::{read_input, QueryDocument};
use search_dsl::{Error, QueryKind};
use starbase::AppResult;
use std::path::PathBuf;

/// Decode `text` and return the root query kind.
pub fn validate_str(text: &str, unwrap_query: bool) -> Result<QueryKind, Error> {
    QueryDocument::parse(text, unwrap_query).map(|doc| doc.query().kind())
}

/// One-line description of a decode failure, with the path to the offending field.
pub fn describe_error(err: &Error) -> String {
    let path = err.field_path();
    if path.is_empty() {
        err.root_cause().to_string()
    } else {
        format!("{} (at `{}`)", err.root_cause(), path)
    }
}

/// Run the validate command
pub fn run_validate(input: Option<PathBuf>, config: &CliConfig) -> AppResult {
    let text = match read_input(input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return Ok(Some(1));
        }
    };

    match validate_str(&text, config.output.unwrap_query) {
        Ok(kind) => {
            tracing::info!(%kind, "query is valid");
            println!("✓ valid `{}` query", kind);
            Ok(None)
        }
        Err(e) => {
            tracing::debug!(error = %e, "query rejected");
            eprintln!("✗ invalid query: {}", describe_error(&e));
            Ok(Some(1))
        }
    }
}
