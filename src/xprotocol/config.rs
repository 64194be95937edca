//! Parser configuration
//!
//! Limits can be set in code with the builder methods or loaded from YAML:
//!
//!     max_depth: 48
//!
//! Missing keys fall back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default maximum brace nesting. Real protocols stay around a dozen levels.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Maximum brace nesting depth accepted before parsing
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ParserConfig::new().max_depth(4);
        assert_eq!(config.max_depth, 4);
        assert_eq!(ParserConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_yaml_overrides_and_defaults() {
        assert_eq!(
            ParserConfig::from_yaml_str("max_depth: 8").unwrap(),
            ParserConfig { max_depth: 8 }
        );
        assert_eq!(
            ParserConfig::from_yaml_str("{}").unwrap(),
            ParserConfig::default()
        );
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        assert!(matches!(
            ParserConfig::from_yaml_str("max_dpeth: 8"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let error = ParserConfig::load("/nonexistent/xprot.yaml").unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().contains("/nonexistent/xprot.yaml"));
    }
}
