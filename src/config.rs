//! Configuration for the input wizard

use crate::catalog::{InputKind, TypeCatalog};
use crate::wizard::{DEFAULT_EMPTY_VALUE_TEXT, WizardController};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration for the input wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input types offered on the first step, in display order.
    /// The first one is preselected.
    pub types: Vec<InputKind>,

    /// Text shown in the preview for properties left empty
    pub empty_value_text: String,

    /// UI locale override ("en", "zh-CN"); system locale when unset
    pub locale: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: InputKind::all().to_vec(),
            empty_value_text: DEFAULT_EMPTY_VALUE_TEXT.to_string(),
            locale: None,
        }
    }
}

impl Config {
    /// Build the type catalog from `types`
    pub fn catalog(&self) -> Result<TypeCatalog, ConfigError> {
        TypeCatalog::new(&self.types).map_err(|e| ConfigError::InvalidCatalog {
            message: e.to_string(),
        })
    }

    /// Build a closed wizard for this configuration
    pub fn build_controller(&self) -> Result<WizardController, ConfigError> {
        Ok(WizardController::new(self.catalog()?).with_empty_value_text(&self.empty_value_text))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Reject unusable type lists at load time
        config.catalog()?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# Input Wizard Configuration File
# This file uses TOML format (https://toml.io)

# Input types offered on the first step, in display order.
# The first entry is preselected when the wizard opens.
# Available: "text", "numeric", "datetime", "checkbox", "radio", "dropdown", "popup"
types = ["text", "numeric", "datetime", "checkbox", "radio", "dropdown", "popup"]

# Text shown in the preview for properties left empty
empty_value_text = "Not set"

# UI language: "en" or "zh-CN". Leave unset to follow the system locale.
# locale = "en"
"#
        .to_string()
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid input type list: {message}")]
    InvalidCatalog { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_offers_every_type() {
        let config = Config::default();
        assert_eq!(config.catalog().unwrap(), TypeCatalog::builtin());
        assert_eq!(config.empty_value_text, "Not set");
    }

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::sample_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_subset() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "types = [\"numeric\", \"text\"]").unwrap();
        writeln!(file, "empty_value_text = \"-\"").unwrap();
        file.flush().unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.first().id, "numeric");
        assert_eq!(catalog.len(), 2);
        assert_eq!(config.empty_value_text, "-");
        assert_eq!(config.locale, None);
    }

    #[test]
    fn test_load_rejects_empty_types() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "types = []").unwrap();
        file.flush().unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCatalog { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_type() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "types = [\"slider\"]").unwrap();
        file.flush().unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_file("/nonexistent/input-wizard.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("wizard.toml");
        let config = Config {
            types: vec![InputKind::Popup, InputKind::Radio],
            empty_value_text: "n/a".into(),
            locale: Some("zh-CN".into()),
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_build_controller_uses_empty_text() {
        let config = Config {
            types: vec![InputKind::Checkbox],
            empty_value_text: "?".into(),
            locale: None,
        };
        let mut wizard = config.build_controller().unwrap();
        wizard.open();
        wizard.next();
        wizard.next();
        let line = match wizard.step_content() {
            crate::wizard::StepContent::Preview { lines, .. } => lines[0].to_string(),
            other => panic!("unexpected content: {other:?}"),
        };
        assert_eq!(line, "label: ?");
    }
}
