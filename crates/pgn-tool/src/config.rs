//! Configuration file loading for pgn-tool.
//!
//! Settings live in `pgn-tool.toml` in the working directory. A missing file
//! means defaults; every key is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// `log_level` is not a level `tracing` understands.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// How games are written out.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Write the tag section. Defaults to true.
    #[serde(default = "default_true")]
    pub include_tags: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { include_tags: true }
    }
}

/// How the `merge` command treats games that do not reach the first one.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Merge leftover games among themselves. Defaults to true.
    #[serde(default = "default_true")]
    pub consolidate_leftovers: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            consolidate_leftovers: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level tool configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Default log filter when `RUST_LOG` is unset. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub merge: MergeConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            log_level: default_log_level(),
            output: OutputConfig::default(),
            merge: MergeConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Loads the configuration from [`Self::config_path()`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidLogLevel`] for an unknown `log_level`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ToolConfig = toml::from_str(&content)?;
        config.level()?;
        Ok(config)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("pgn-tool.toml")
    }

    /// The configured log level.
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
log_level = "debug"

[output]
include_tags = false

[merge]
consolidate_leftovers = false
"#;
        let config: ToolConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.output.include_tags);
        assert!(!config.merge.consolidate_leftovers);
        assert_eq!(config.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: ToolConfig = toml::from_str("").unwrap();
        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.log_level, "warn");
        assert!(config.output.include_tags);
        assert!(config.merge.consolidate_leftovers);
    }

    #[test]
    fn test_partial_section_defaults() {
        let config: ToolConfig = toml::from_str("[output]\n").unwrap();
        assert!(config.output.include_tags);
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(ToolConfig::config_path(), PathBuf::from("pgn-tool.toml"));
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfig::load_from(&dir.path().join("pgn-tool.toml")).unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"info\"\n[merge]\nconsolidate_leftovers = false").unwrap();

        let config = ToolConfig::load_from(file.path()).unwrap();
        assert_eq!(config.level().unwrap(), tracing::Level::INFO);
        assert!(!config.merge.consolidate_leftovers);
        assert!(config.output.include_tags);
    }

    #[test]
    fn test_invalid_files_are_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = [").unwrap();
        assert!(matches!(
            ToolConfig::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"loud\"").unwrap();
        match ToolConfig::load_from(file.path()) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "loud"),
            other => panic!("Expected InvalidLogLevel, got {:?}", other),
        }
    }
}
