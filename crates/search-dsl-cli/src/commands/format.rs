//! Format command: decode a query document and re-encode it canonically

use crate::commands::validate::describe_error;
use crate::config::CliConfig;
use crate::document::{read_input, QueryDocument};
use search_dsl::Error;
use starbase::AppResult;
use std::path::PathBuf;

/// Canonical form of `text`: shortcuts expanded, base properties first.
pub fn format_str(text: &str, unwrap_query: bool, pretty: bool) -> Result<String, Error> {
    QueryDocument::parse(text, unwrap_query)?.render(pretty)
}

/// Run the format command. `pretty` overrides the configured layout.
pub fn run_format(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: Option<bool>,
    config: &CliConfig,
) -> AppResult {
    let text = match read_input(input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return Ok(Some(1));
        }
    };

    let pretty = pretty.unwrap_or(config.output.pretty);
    let formatted = match format_str(&text, config.output.unwrap_query, pretty) {
        Ok(formatted) => formatted,
        Err(e) => {
            eprintln!("✗ invalid query: {}", describe_error(&e));
            return Ok(Some(1));
        }
    };

    if let Some(path) = output {
        if let Err(e) = std::fs::write(&path, format!("{formatted}\n")) {
            eprintln!("Failed to write query to {:?}: {}", path, e);
            return Ok(Some(1));
        }
        tracing::info!(path = %path.display(), "formatted query written");
    } else {
        println!("{}", formatted);
    }

    Ok(None)
}
