//! CLI configuration
//!
//! Loads `search-dsl.toml`. Every section and key is optional; unknown keys
//! are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "search-dsl.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub output: OutputSection,
    pub logging: LoggingSection,
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Default layout of `format` output
    pub pretty: bool,
    /// Accept `{"query": {...}}` request bodies
    pub unwrap_query: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            pretty: true,
            unwrap_query: true,
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Filter directive, e.g. `info` or `search_dsl_core=trace`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML config: {:?}", path))
    }

    /// Use `explicit` if given, else `search-dsl.toml` in `dir` when present, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
[output]
pretty = false
unwrap_query = false

[logging]
level = "search_dsl_core=trace"
format = "json"
"#,
        )?;

        let config = CliConfig::load(&path)?;
        assert!(!config.output.pretty);
        assert!(!config.output.unwrap_query);
        assert_eq!(config.logging.level, "search_dsl_core=trace");
        assert_eq!(config.logging.format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn test_missing_keys_use_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[output]\npretty = false\n")?;

        let config = CliConfig::load(&path)?;
        assert!(!config.output.pretty);
        assert!(config.output.unwrap_query);
        assert_eq!(config.logging, LoggingSection::default());
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[output]\nprety = true\n")?;

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("prety"));
        Ok(())
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        assert_eq!(CliConfig::resolve(None, dir.path())?, CliConfig::default());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[logging]\nlevel = \"debug\"\n",
        )?;
        assert_eq!(CliConfig::resolve(None, dir.path())?.logging.level, "debug");
        Ok(())
    }

    #[test]
    fn test_resolve_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(CliConfig::resolve(Some(&missing), dir.path()).is_err());
    }
}
