use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Errors loading an [`AnalysisConfig`] from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for the narrative-analysis client.
///
/// The credential is carried here and injected at client construction — the
/// client itself never consults the environment. An absent key is a valid
/// configuration; the client then answers with a fixed fallback message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Gemini API key. `None` disables analysis with a deterministic message.
    pub api_key: Option<String>,

    /// Model identifier used in the request path.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl AnalysisConfig {
    /// Loads the config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_has_no_key_and_default_model() {
        let config = AnalysisConfig::default();

        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn config_parses_minimal_toml() {
        let config: AnalysisConfig = toml::from_str("api_key = \"abc123\"").unwrap();

        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn config_parses_explicit_model() {
        let config: AnalysisConfig =
            toml::from_str("api_key = \"abc\"\nmodel = \"gemini-2.5-flash\"").unwrap();

        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = AnalysisConfig::from_toml_file(Path::new("/nonexistent/analysis.toml"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
