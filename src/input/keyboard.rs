use serde::{Deserialize, Serialize};

use crate::engine::SceneCommand;

/// Discrete actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_pause = "KeyP"
/// recolor = "KeyC"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Restore the camera's initial orbit.
    ResetCamera,
    /// Toggle orbit auto-rotation.
    ToggleAutoRotate,
    /// Freeze or resume object spin.
    TogglePause,
    /// Tween every object to one fresh random color.
    Recolor,
}

impl KeyAction {
    /// The engine command this action triggers.
    #[must_use]
    pub const fn to_command(self) -> SceneCommand {
        match self {
            Self::ResetCamera => SceneCommand::ResetCamera,
            Self::ToggleAutoRotate => SceneCommand::ToggleAutoRotate,
            Self::TogglePause => SceneCommand::TogglePause,
            Self::Recolor => SceneCommand::Recolor,
        }
    }
}
