//! Widget configuration loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{SerializableColor, StarStyle};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown star style code: {0}")]
    UnknownStyleCode(i64),
    #[error("Unknown star style name: {0}")]
    UnknownStyleName(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Recognized widget options, as supplied by the host.
///
/// Every field is optional in the serialized form; missing fields take the
/// defaults below. Values are not validated here: the controller clamps
/// them when the configuration is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarViewConfig {
    /// Bright star color.
    pub star_color: SerializableColor,
    /// Dim star color.
    pub bg_color: SerializableColor,
    /// Paint style of dim stars.
    pub star_style: StarStyle,
    pub star_count: i32,
    /// Stroke thickness.
    pub paint_size: f64,
    /// Gap between stars.
    #[serde(alias = "starMarge")]
    pub star_margin: f64,
    /// Edge-to-edge star height.
    pub star_size: f64,
    #[serde(alias = "half")]
    pub half_enabled: bool,
    /// Whether pointer input changes the rating.
    #[serde(alias = "isChange")]
    pub interactive: bool,
    pub rating: f64,
}

impl Default for StarViewConfig {
    fn default() -> Self {
        Self {
            star_color: SerializableColor::yellow(),
            bg_color: SerializableColor::gray(),
            star_style: StarStyle::Stroke,
            star_count: 5,
            paint_size: 1.0,
            star_margin: 10.0,
            star_size: 150.0,
            half_enabled: false,
            interactive: false,
            rating: 0.0,
        }
    }
}

impl StarViewConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded star view config from {}", path.display());
        Ok(config)
    }

    /// Write the configuration to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StarViewConfig::default();
        assert_eq!(config.star_count, 5);
        assert_eq!(config.star_style, StarStyle::Stroke);
        assert!((config.star_size - 150.0).abs() < f64::EPSILON);
        assert!((config.star_margin - 10.0).abs() < f64::EPSILON);
        assert!((config.paint_size - 1.0).abs() < f64::EPSILON);
        assert!(!config.half_enabled);
        assert!(!config.interactive);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = StarViewConfig::from_json("{}").unwrap();
        assert_eq!(config, StarViewConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = StarViewConfig::from_json(
            r##"{
                "starColor": "#FF0000",
                "starStyle": 1,
                "starCount": 10,
                "halfEnabled": true,
                "rating": 4.5
            }"##,
        )
        .unwrap();
        assert_eq!(config.star_color, SerializableColor::new(255, 0, 0, 255));
        assert_eq!(config.star_style, StarStyle::Fill);
        assert_eq!(config.star_count, 10);
        assert!(config.half_enabled);
        assert!((config.rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(config.bg_color, SerializableColor::gray());
    }

    #[test]
    fn test_legacy_option_names() {
        let config =
            StarViewConfig::from_json(r#"{"starMarge": 4, "half": true, "isChange": true}"#)
                .unwrap();
        assert!((config.star_margin - 4.0).abs() < f64::EPSILON);
        assert!(config.half_enabled);
        assert!(config.interactive);
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let result = StarViewConfig::from_json(r#"{"starStyle": 9}"#);
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = StarViewConfig {
            star_style: StarStyle::FillAndStroke,
            rating: 2.5,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(StarViewConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"starCount": 7, "interactive": true}}"#).unwrap();
        let config = StarViewConfig::from_file(file.path()).unwrap();
        assert_eq!(config.star_count, 7);
        assert!(config.interactive);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StarViewConfig::from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
