//! Perspective camera and orbit controls.

/// Orbit controller with damping, pan, zoom and auto-rotate.
pub mod controller;
/// Camera struct, projection matrices, and GPU uniform.
pub mod core;

pub use controller::CameraController;
pub use self::core::{Camera, CameraUniform};
