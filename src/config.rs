use crate::domain::{LabelAllowList, DEFAULT_LABELS};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "skillversion.toml";

/// Represents the complete configuration for skill-version.
///
/// Contains the on-disk layout of version files and the pre-release labels
/// that bumps may use.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub pre_release: PreReleaseConfig,
}

fn default_version_file() -> String {
    "VERSION".to_string()
}

fn default_components_dir() -> String {
    "skills".to_string()
}

/// File layout of the version store.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// File holding a version line, both at the root and inside each component
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Directory (relative to the root) whose subdirectories are components
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version_file: default_version_file(),
            components_dir: default_components_dir(),
        }
    }
}

fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|l| l.to_string()).collect()
}

/// Pre-release label settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PreReleaseConfig {
    /// Allowed labels; an empty list allows any well-formed identifier
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

impl Default for PreReleaseConfig {
    fn default() -> Self {
        PreReleaseConfig {
            labels: default_labels(),
        }
    }
}

impl PreReleaseConfig {
    pub fn allow_list(&self) -> LabelAllowList {
        LabelAllowList::new(self.labels.iter().cloned())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `skillversion.toml` in current directory
/// 3. `.skillversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        tracing::debug!(path, "loading explicit config");
        fs::read_to_string(path)?
    } else if local.exists() {
        tracing::debug!(path = %local.display(), "loading project config");
        fs::read_to_string(&local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading user config");
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store.version_file, "VERSION");
        assert_eq!(config.store.components_dir, "skills");
        assert_eq!(config.pre_release.labels, vec!["alpha", "beta", "rc"]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[pre_release]\nlabels = [\"dev\"]\n").unwrap();
        assert_eq!(config.pre_release.labels, vec!["dev"]);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_allow_list_from_config() {
        let config = Config::default();
        let list = config.pre_release.allow_list();
        assert!(list.resolve("rc").is_ok());
        assert!(list.resolve("dev").is_err());
    }
}
