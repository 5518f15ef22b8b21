//! Configuration management for acnetracker.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::export::EXPORT_FILE_NAME;
use crate::notice::DEFAULT_NOTICE_SECONDS;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "acnetracker";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "ACNETRACKER_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ACNETRACKER_`)
/// 2. TOML config file at `~/.config/acnetracker/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export configuration.
    pub export: ExportConfig,
    /// Interactive session configuration.
    pub session: SessionConfig,
}

/// Export-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the CSV file is saved into.
    /// Defaults to the current working directory.
    pub directory: Option<PathBuf>,
    /// Name of the saved CSV file.
    pub file_name: String,
}

/// Session-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long the "entry added" notice stays up, in seconds.
    pub notice_seconds: u64,
    /// Show follow-up fields even when their yes/no question reads `No`.
    pub show_hidden_fields: bool,
    /// Prompt printed before each command line.
    pub prompt: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            notice_seconds: DEFAULT_NOTICE_SECONDS,
            show_hidden_fields: false,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file at `config_path`, or the default path (if it exists)
    /// 3. Environment variables (prefixed with `ACNETRACKER_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let name = self.export.file_name.trim();
        if name.is_empty() {
            return Err(Error::ConfigValidation {
                message: "export.file_name must not be empty".to_string(),
            });
        }

        if name.contains('/') || name.contains('\\') {
            return Err(Error::ConfigValidation {
                message: format!(
                    "export.file_name ({name}) must be a bare file name; use export.directory for the location"
                ),
            });
        }

        if self.session.notice_seconds == 0 {
            return Err(Error::ConfigValidation {
                message: "session.notice_seconds must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Pretty-printed JSON form of the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the export directory, resolving the default if not set.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.export.file_name, "acne_tracking_data.csv");
        assert!(config.export.directory.is_none());
        assert_eq!(config.session.notice_seconds, 3);
        assert!(!config.session.show_hidden_fields);
        assert_eq!(config.session.prompt, "> ");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_file_name() {
        let mut config = Config::default();
        config.export.file_name = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("file_name"));
    }

    #[test]
    fn test_validate_file_name_with_separator() {
        let mut config = Config::default();
        config.export.file_name = "exports/data.csv".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("bare file name"));
    }

    #[test]
    fn test_validate_zero_notice() {
        let mut config = Config::default();
        config.session.notice_seconds = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("notice_seconds"));
    }

    #[test]
    fn test_export_dir_default() {
        let config = Config::default();
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_export_dir_custom() {
        let mut config = Config::default();
        config.export.directory = Some(PathBuf::from("/tmp/acne"));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/acne"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("acnetracker"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[export]\ndirectory = \"/tmp/exports\"\n\n[session]\nnotice_seconds = 5\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
        assert_eq!(config.session.notice_seconds, 5);
        assert_eq!(config.export.file_name, "acne_tracking_data.csv");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nnotice_seconds = 0\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_config_to_json() {
        let json: serde_json::Value =
            serde_json::from_str(&Config::default().to_json().unwrap()).unwrap();
        assert_eq!(json["export"]["file_name"], "acne_tracking_data.csv");
        assert_eq!(json["session"]["notice_seconds"], 3);
        assert!(json["export"]["directory"].is_null());
    }

    #[test]
    fn test_session_config_deserialize() {
        let json = r#"{"notice_seconds": 10}"#;
        let session: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(session.notice_seconds, 10);
        assert_eq!(session.prompt, "> ");
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        assert_eq!(config.clone(), config);
    }
}
