//! Structured logging setup
//!
//! Logs go to stderr so command output on stdout stays machine readable.

use crate::config::{LogFormat, LoggingSection};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &LoggingSection) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level: {:?}", config.level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_enables_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingSection {
            level: "debug".to_string(),
            format: LogFormat::Pretty,
        };
        init_tracing(&config).unwrap();
        assert!(tracing::event_enabled!(tracing::Level::DEBUG));
        assert!(!tracing::event_enabled!(tracing::Level::TRACE));
    }

    #[test]
    fn test_invalid_level_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingSection {
            level: "search_dsl=loud".to_string(),
            format: LogFormat::Json,
        };
        let err = init_tracing(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
