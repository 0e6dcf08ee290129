use glam::Vec3;

use super::color::Color;

/// Omnidirectional light with distance falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Emitted color.
    pub color: Color,
    /// Luminous intensity (candela-like units; falloff is inverse-square).
    pub intensity: f32,
    /// Distance at which the contribution reaches zero (0 = unlimited).
    pub range: f32,
    /// World-space position.
    pub position: Vec3,
}

impl PointLight {
    /// Light from a packed sRGB hex color.
    #[must_use]
    pub fn new(hex: u32, intensity: f32, range: f32, position: Vec3) -> Self {
        Self {
            color: Color::from_hex(hex),
            intensity,
            range,
            position,
        }
    }
}
