//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is represented as a `SceneCommand`.
//! Consumers construct commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(SceneCommand::Recolor);
/// engine.execute(SceneCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Restore the camera's initial orbit.
    ResetCamera,

    /// Toggle turntable auto-rotation around the target.
    ToggleAutoRotate,

    // ── Objects ─────────────────────────────────────────────────────
    /// Tween every object toward one fresh random color.
    Recolor,

    /// Tint and lean every object from a cursor position.
    TrackCursor {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// Freeze or resume per-frame object spin.
    TogglePause,
}
