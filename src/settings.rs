use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::DrawerConfig;
use crate::shape::ShapeKind;

/// Tool options the modes read when they create a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub shape_kind: ShapeKind,
    pub stroke_width: f64,
    pub fill: bool,
    pub color: Color32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&DrawerConfig::default())
    }
}

impl ToolSettings {
    pub fn from_config(config: &DrawerConfig) -> Self {
        Self {
            shape_kind: config.default_shape,
            stroke_width: config.default_stroke_width,
            fill: config.default_fill,
            color: Color32::BLACK,
        }
    }

    /// Keeps the stroke width inside the configured slider range
    pub fn clamp_to(&mut self, config: &DrawerConfig) {
        self.stroke_width = self
            .stroke_width
            .clamp(config.min_stroke_width, config.max_stroke_width);
    }
}
