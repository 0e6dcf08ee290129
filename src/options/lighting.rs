use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Shading parameters applied on top of the layout's point lights.
pub struct LightingOptions {
    /// Flat ambient term added to every surface.
    pub ambient: f32,
    /// Multiplier on every point light's intensity.
    pub intensity_scale: f32,
    /// Material roughness shared by every object.
    pub roughness: f32,
    /// Specular strength at roughness zero.
    pub specular_intensity: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.03,
            intensity_scale: 1.0,
            roughness: 0.5,
            specular_intensity: 0.5,
        }
    }
}
