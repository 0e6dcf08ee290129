use serde::{Deserialize, Serialize};

/// Linear RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Color from linear channel values.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from sRGB channel values in `[0, 255]`, converted to linear.
    ///
    /// Fractional channel values are accepted (the recolor handler samples
    /// continuous values rather than integers).
    #[must_use]
    pub fn from_srgb8(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: srgb_to_linear(r / 255.0),
            g: srgb_to_linear(g / 255.0),
            b: srgb_to_linear(b / 255.0),
        }
    }

    /// Color from a packed `0xRRGGBB` value (sRGB), converted to linear.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        Self::from_srgb8(
            ((hex >> 16) & 0xff) as f32,
            ((hex >> 8) & 0xff) as f32,
            (hex & 0xff) as f32,
        )
    }

    /// Channels as an array, for GPU upload.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether every channel lies within `[0, 1]`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
