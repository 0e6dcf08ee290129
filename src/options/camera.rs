use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and orbit-control parameters.
#[allow(clippy::struct_excessive_bools)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Rotation sensitivity multiplier.
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    pub zoom_speed: f32,
    /// Whether drag input eases out over several frames.
    pub enable_damping: bool,
    /// Fraction of the pending drag applied per update when damping.
    pub damping_factor: f32,
    /// Allow panning the orbit target.
    pub enable_pan: bool,
    /// Allow dollying toward or away from the target.
    pub enable_zoom: bool,
    /// Spin the camera around the target when idle.
    pub auto_rotate: bool,
    /// Auto-rotate speed; 2.0 is one orbit per 30 seconds.
    pub auto_rotate_speed: f32,
    /// Closest allowed eye-to-target distance.
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance.
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            enable_damping: true,
            damping_factor: 0.05,
            enable_pan: true,
            enable_zoom: true,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            min_distance: 1.0,
            max_distance: 90.0,
        }
    }
}
