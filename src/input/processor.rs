//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (pointer press
//! state, last cursor position, modifier keys) and the key-binding map. It
//! is the only thing that sits between raw window events and
//! [`SceneEngine::execute`](crate::engine::SceneEngine::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::engine::SceneCommand;
use crate::options::{InteractionMode, KeybindingOptions};

/// Whether a pointer button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// No button held.
    #[default]
    Idle,
    /// At least one button went down and none has come up since.
    Pressed,
}

/// Converts raw window events into [`SceneCommand`]s.
#[derive(Debug)]
pub struct InputProcessor {
    /// Press state gating the recolor gesture.
    pointer: PointerState,
    /// Button that started the current drag, steering the camera.
    drag_button: Option<MouseButton>,
    /// Last cursor position in physical pixels.
    last_pos: Option<Vec2>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Recolor behavior.
    mode: InteractionMode,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new(mode: InteractionMode) -> Self {
        Self::with_key_bindings(mode, KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(
        mode: InteractionMode,
        key_bindings: KeybindingOptions,
    ) -> Self {
        Self {
            pointer: PointerState::Idle,
            drag_button: None,
            last_pos: None,
            shift_pressed: false,
            mode,
            key_bindings,
        }
    }

    /// Current press state.
    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<SceneCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return the commands it produces, in
    /// the order they should run.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<SceneCommand> {
        if let Some(state) = event.pointer_transition() {
            self.pointer = state;
        }
        match event {
            InputEvent::PointerMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::PointerDown(button) => {
                if self.drag_button.is_none() {
                    self.drag_button = Some(button);
                }
                Vec::new()
            }
            InputEvent::PointerUp(_) => {
                self.drag_button = None;
                Vec::new()
            }
            InputEvent::Wheel(delta) => vec![SceneCommand::Zoom { delta }],
            InputEvent::Shift(held) => {
                self.shift_pressed = held;
                Vec::new()
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<SceneCommand> {
        let pos = Vec2::new(x, y);
        let delta = self.last_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.last_pos = Some(pos);

        let mut commands = Vec::new();
        if let Some(cmd) = self.drag_command(delta) {
            commands.push(cmd);
        }
        match self.mode {
            InteractionMode::PressToRecolor => {
                if self.pointer == PointerState::Pressed {
                    commands.push(SceneCommand::Recolor);
                }
            }
            InteractionMode::CursorTracking => {
                commands.push(SceneCommand::TrackCursor { x, y });
            }
        }
        commands
    }

    /// Camera drag: left rotates, right (or shift + left) pans.
    fn drag_command(&self, delta: Vec2) -> Option<SceneCommand> {
        if delta == Vec2::ZERO {
            return None;
        }
        match self.drag_button? {
            MouseButton::Left if self.shift_pressed => {
                Some(SceneCommand::PanCamera { delta })
            }
            MouseButton::Left => Some(SceneCommand::RotateCamera { delta }),
            MouseButton::Right => Some(SceneCommand::PanCamera { delta }),
            MouseButton::Middle | MouseButton::Other => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(InteractionMode::default())
    }
}
