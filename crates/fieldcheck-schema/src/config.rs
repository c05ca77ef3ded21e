//! # Validator Configuration
//!
//! Controls how [`SchemaValidator`](crate::SchemaValidator) walks a tree.
//! The defaults stop at the first failure and accept any nesting depth.
//!
//! Configuration files are YAML:
//!
//! ```yaml
//! mode: collect_all
//! max_depth: 15
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many failures a validation run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first failing top-level field.
    #[default]
    FailFast,
    /// Walk the whole tree and report every violation.
    CollectAll,
}

/// Validator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub mode: ValidationMode,
    /// Maximum nesting depth; top-level fields are at depth 1. `None`
    /// accepts any depth.
    pub max_depth: Option<usize>,
}

/// Error loading a [`ValidatorConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}'")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

impl ValidatorConfig {
    /// Fail-fast with no depth limit.
    pub fn fail_fast() -> Self {
        Self::default()
    }

    /// Collect-all with no depth limit.
    pub fn collect_all() -> Self {
        Self {
            mode: ValidationMode::CollectAll,
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Parse a YAML config document. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    /// Read and parse a YAML config file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            source: e,
        })?;
        config.check()?;
        Ok(config)
    }

    /// Reject settings no tree could satisfy.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_fail_fast() {
        let config = ValidatorConfig::default();
        assert_eq!(config.mode, ValidationMode::FailFast);
        assert_eq!(config.max_depth, None);
        assert_eq!(config, ValidatorConfig::fail_fast());
    }

    #[test]
    fn parses_full_document() {
        let config = ValidatorConfig::from_yaml_str("mode: collect_all\nmax_depth: 4\n").unwrap();
        assert_eq!(config, ValidatorConfig::collect_all().with_max_depth(4));
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = ValidatorConfig::from_yaml_str("max_depth: 2\n").unwrap();
        assert_eq!(config.mode, ValidationMode::FailFast);
        assert_eq!(config.max_depth, Some(2));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            ValidatorConfig::from_yaml_str("  \n").unwrap(),
            ValidatorConfig::default()
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ValidatorConfig::from_yaml_str("strict: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(ValidatorConfig::from_yaml_str("mode: lenient\n").is_err());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = ValidatorConfig::from_yaml_str("max_depth: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDepth));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fieldcheck.yaml");
        std::fs::write(&path, "mode: collect_all\n").unwrap();
        let config = ValidatorConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.mode, ValidationMode::CollectAll);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValidatorConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn parse_error_keeps_yaml_detail_in_source() {
        use std::error::Error as _;

        let err = ValidatorConfig::from_yaml_str("mode: [unclosed\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid config '<inline>'");
        let detail = err.source().unwrap().to_string();
        assert!(!detail.is_empty());
        assert!(!err.to_string().contains(&detail));
    }
}
