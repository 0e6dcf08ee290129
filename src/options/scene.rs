use serde::{Deserialize, Serialize};

use crate::scene::{Color, LayoutPreset, SceneLayout, ShapeSpec};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
/// Which objects to build and how fast they spin.
pub struct SceneOptions {
    /// Built-in layout preset.
    pub layout: LayoutPreset,
    /// Replaces the preset's shape list when present.
    pub shapes: Option<Vec<ShapeSpec>>,
    /// Overrides the preset's rotation speed bound when present.
    pub max_rotation_speed: Option<f32>,
    /// Seed for colors and rotation speeds. Absent means OS entropy.
    /// Signed so that any TOML integer, negative ones included, is a seed.
    pub seed: Option<i64>,
    /// Clear color behind the scene.
    pub background: Color,
}

impl SceneOptions {
    /// Resolve the preset and overrides into a bootstrap layout.
    #[must_use]
    pub fn layout(&self, roughness: f32) -> SceneLayout {
        let mut layout = SceneLayout::from_preset(self.layout);
        if let Some(shapes) = &self.shapes {
            layout.shapes.clone_from(shapes);
        }
        if let Some(max) = self.max_rotation_speed {
            layout.max_rotation_speed = max.max(0.0);
        }
        layout.roughness = roughness;
        layout
    }
}
