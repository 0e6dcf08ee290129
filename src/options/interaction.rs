use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

/// How pointer movement recolors the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Moving with a button held tweens every object to one random color.
    #[default]
    PressToRecolor,
    /// Every cursor move tints each object from the cursor position and
    /// leans its rotation toward the cursor.
    CursorTracking,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Pointer interaction and tween timing.
pub struct InteractionOptions {
    /// Recolor behavior.
    pub mode: InteractionMode,
    /// Length of each recolor tween in seconds.
    pub color_tween_secs: f32,
    /// Length of the startup grow-in in seconds.
    pub grow_in_secs: f32,
    /// Curve shared by every tween.
    pub easing: EasingFunction,
    /// Fraction of the remaining angle closed per cursor move in
    /// cursor-tracking mode.
    pub tracking_follow: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            mode: InteractionMode::default(),
            color_tween_secs: 1.0,
            grow_in_secs: 1.0,
            easing: EasingFunction::default(),
            tracking_follow: 0.05,
        }
    }
}
