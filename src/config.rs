use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shape::ShapeKind;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "DRAWER_CONFIG";

/// Startup configuration for the drawer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub default_stroke_width: f64,
    pub min_stroke_width: f64,
    pub max_stroke_width: f64,
    pub window_width: f32,
    pub window_height: f32,
    pub default_shape: ShapeKind,
    pub default_fill: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            default_stroke_width: 3.0,
            min_stroke_width: 1.0,
            max_stroke_width: 30.0,
            window_width: 1200.0,
            window_height: 1000.0,
            default_shape: ShapeKind::Stroke,
            default_fill: false,
        }
    }
}

impl DrawerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by `DRAWER_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_stroke_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_stroke_width must be positive, got {}",
                self.min_stroke_width
            )));
        }
        if !(self.min_stroke_width..=self.max_stroke_width).contains(&self.default_stroke_width) {
            return Err(ConfigError::Invalid(format!(
                "default_stroke_width {} outside {}..={}",
                self.default_stroke_width, self.min_stroke_width, self.max_stroke_width
            )));
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = DrawerConfig::from_json_str(r#"{ "default_stroke_width": 5.0 }"#).unwrap();
        assert_eq!(config.default_stroke_width, 5.0);
        assert_eq!(config.max_stroke_width, 30.0);
        assert_eq!(config.default_shape, ShapeKind::Stroke);
    }

    #[test]
    fn shape_kind_parses_by_name() {
        let config = DrawerConfig::from_json_str(r#"{ "default_shape": "Ellipse" }"#).unwrap();
        assert_eq!(config.default_shape, ShapeKind::Ellipse);
    }

    #[test]
    fn rejects_default_width_outside_range() {
        let err = DrawerConfig::from_json_str(r#"{ "default_stroke_width": 45.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = DrawerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
