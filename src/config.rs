//! camel-lens configuration
//!
//! Read from `~/.config/camel-lens/config.toml` (or the platform equivalent)
//! unless a path is given explicitly. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LensError, Result};

/// camel-lens configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LensConfig {
    #[serde(default)]
    pub recognizers: RecognizerConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub languages: LanguageConfig,
}

/// Which recognizers report themselves enabled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Java DSL (`from("...").to("...")`)
    #[serde(default = "default_true")]
    pub java: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self { java: true }
    }
}

/// How long endpoint URIs are wrapped for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default = "default_line_break")]
    pub line_break: String,
}

fn default_wrap_width() -> usize {
    120
}

fn default_separator() -> String {
    "&".to_string()
}

fn default_line_break() -> String {
    "\n".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            separator: default_separator(),
            line_break: default_line_break(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Expression languages the scanner checks string literals against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default = "default_languages")]
    pub known: Vec<String>,
}

fn default_languages() -> Vec<String> {
    [
        "simple",
        "constant",
        "header",
        "exchangeProperty",
        "jsonpath",
        "xpath",
        "xquery",
        "tokenize",
        "javaScript",
        "groovy",
        "spel",
        "ognl",
        "mvel",
        "method",
        "bean",
        "ref",
        "jq",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            known: default_languages(),
        }
    }
}

impl LensConfig {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("camel-lens").join("config.toml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            LensError::ConfigError { message, .. } => LensError::ConfigError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| LensError::ConfigError {
            path: "<inline>".to_string(),
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.display.wrap_width == 0 {
            return Err(LensError::ConfigError {
                path: "<inline>".to_string(),
                message: "display.wrap_width must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Get a configuration value by key path (e.g., "display.wrap_width")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["recognizers", "java"] => Some(self.recognizers.java.to_string()),
            ["display", "wrap_width"] => Some(self.display.wrap_width.to_string()),
            ["display", "separator"] => Some(self.display.separator.clone()),
            ["display", "line_break"] => Some(self.display.line_break.clone()),
            ["logging", "level"] => Some(self.logging.level.clone()),
            ["languages", "known"] => Some(self.languages.known.join(", ")),
            _ => None,
        }
    }

    /// Configuration rendered as TOML
    pub fn display(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LensError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LensConfig::default();
        assert!(config.recognizers.java);
        assert_eq!(config.display.wrap_width, 120);
        assert_eq!(config.display.separator, "&");
        assert_eq!(config.logging.level, "warn");
        assert!(config.languages.known.iter().any(|l| l == "simple"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LensConfig::from_toml("[display]\nwrap_width = 80\n").unwrap();
        assert_eq!(config.display.wrap_width, 80);
        assert_eq!(config.display.separator, "&");
        assert!(config.recognizers.java);
    }

    #[test]
    fn test_disable_java() {
        let config = LensConfig::from_toml("[recognizers]\njava = false\n").unwrap();
        assert!(!config.recognizers.java);
        assert_eq!(config.get("recognizers.java").as_deref(), Some("false"));
    }

    #[test]
    fn test_invalid_toml_and_zero_width() {
        assert!(matches!(
            LensConfig::from_toml("[display\n"),
            Err(LensError::ConfigError { .. })
        ));
        assert!(LensConfig::from_toml("[display]\nwrap_width = 0\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = LensConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, LensConfig::default());
    }

    #[test]
    fn test_load_from_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\nlevel = 3\n").unwrap();
        match LensConfig::load_from(&path) {
            Err(LensError::ConfigError { path: p, .. }) => assert!(p.ends_with("config.toml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips() {
        let config = LensConfig::default();
        let rendered = config.display().unwrap();
        assert_eq!(LensConfig::from_toml(&rendered).unwrap(), config);
    }

    #[test]
    fn test_get_unknown_key() {
        assert_eq!(LensConfig::default().get("display.nope"), None);
        assert_eq!(
            LensConfig::default().get("display.wrap_width").as_deref(),
            Some("120")
        );
    }
}
