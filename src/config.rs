//! # Configuration Module
//!
//! This module provides configuration file support, so a repository can pin
//! its project name, owner and ignore list instead of repeating them on every
//! CI invocation.
//!
//! Configuration is read from a `.header-check.toml` file in the scan root,
//! from the path in the `HEADER_CHECK_CONFIG` environment variable, or from
//! the path given with `--config`. Command-line values take precedence.
//!
//! ```toml
//! project-name = "Taproot"
//! project-owner = "Advanced Robotics at the University of Washington"
//! ignored = ["ext/**", "build/**"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".header-check.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADER_CHECK_CONFIG";

/// Values loaded from a configuration file.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Project name substituted into the headers
  #[serde(default)]
  pub project_name: Option<String>,

  /// Owner required on every copyright line
  #[serde(default)]
  pub project_owner: Option<String>,

  /// Glob patterns to exclude, relative to the scan root
  #[serde(default)]
  pub ignored: Vec<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// An explicitly requested config file does not exist.
  #[error("Config file '{path}' does not exist")]
  NotFound { path: PathBuf },

  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value in the config file is invalid.
  #[error("Invalid value for '{key}' in config file: {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;
    Ok(config)
  }

  /// Rejects empty strings, which would silently weaken the check.
  fn validate(&self) -> Result<(), ConfigError> {
    let fields = [("project-name", &self.project_name), ("project-owner", &self.project_owner)];
    for (key, value) in fields {
      if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
          key: key.to_string(),
          message: "value cannot be empty".to_string(),
        });
      }
    }

    if self.ignored.iter().any(|pattern| pattern.trim().is_empty()) {
      return Err(ConfigError::InvalidValue {
        key: "ignored".to_string(),
        message: "patterns cannot be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADER_CHECK_CONFIG` environment variable
/// 3. `.header-check.toml` in the scan root
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Result<Option<PathBuf>, ConfigError> {
  if let Some(path) = explicit_path {
    if path.exists() {
      debug!("Using explicit config path: {}", path.display());
      return Ok(Some(path.to_path_buf()));
    }
    return Err(ConfigError::NotFound {
      path: path.to_path_buf(),
    });
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      debug!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Ok(Some(path));
    }
    debug!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    debug!("Using config from scan root: {}", root_config.display());
    return Ok(Some(root_config));
  }

  debug!("No config file found");
  Ok(None)
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when `no_config` is set or no file is found.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>, ConfigError> {
  if no_config {
    debug!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  discover_config_path(explicit_path, root)?
    .map(|path| Config::load(&path))
    .transpose()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_valid_config() {
    let config_content = concat!(
      "project-name = \"Taproot\"\n",
      "project-owner = \"Advanced Robotics at the University of Washington\"\n",
      "ignored = [\"ext/**\", \"build/**\"]\n",
    );

    let config: Config = toml::from_str(config_content).unwrap();
    assert_eq!(config.project_name.as_deref(), Some("Taproot"));
    assert_eq!(
      config.project_owner.as_deref(),
      Some("Advanced Robotics at the University of Washington")
    );
    assert_eq!(config.ignored, vec!["ext/**", "build/**"]);
  }

  #[test]
  fn test_parse_empty_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_unknown_keys_rejected() {
    let result: Result<Config, _> = toml::from_str("project = \"Taproot\"\n");
    assert!(result.is_err());
  }

  #[test]
  fn test_validate_empty_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);

    fs::write(&path, "project-owner = \"  \"\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "project-owner"));

    fs::write(&path, "ignored = [\"\"]\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "ignored"));
  }

  #[test]
  fn test_parse_error_names_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    fs::write(&path, "project-name = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains(DEFAULT_CONFIG_FILENAME));
  }

  #[test]
  fn test_load_config_from_root() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
      temp_dir.path().join(DEFAULT_CONFIG_FILENAME),
      "project-name = \"aruw-edu\"\n",
    )
    .unwrap();

    let config = load_config(None, temp_dir.path(), false).unwrap().unwrap();
    assert_eq!(config.project_name.as_deref(), Some("aruw-edu"));
    assert!(config.project_owner.is_none());
  }

  #[test]
  fn test_no_config_flag() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "project-name = \"x\"\n").unwrap();

    assert!(load_config(None, temp_dir.path(), true).unwrap().is_none());
  }

  #[test]
  fn test_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("custom.toml");
    fs::write(&custom, "project-owner = \"UW\"\n").unwrap();

    let config = load_config(Some(&custom), temp_dir.path(), false).unwrap().unwrap();
    assert_eq!(config.project_owner.as_deref(), Some("UW"));
  }

  #[test]
  fn test_explicit_path_missing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    let err = load_config(Some(&missing), temp_dir.path(), false).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
  }
}
