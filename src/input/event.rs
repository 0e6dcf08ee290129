use super::processor::PointerState;

/// Pointer, wheel and modifier input in window coordinates.
///
/// Hosts translate their native events into these and hand them to
/// [`SceneEngine::handle_input`](crate::engine::SceneEngine::handle_input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button went down.
    PointerDown(MouseButton),
    /// A button came up.
    PointerUp(MouseButton),
    /// The pointer moved to `(x, y)` physical pixels.
    PointerMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Wheel movement in lines; positive dollies toward the target.
    Wheel(f32),
    /// Shift was pressed (`true`) or released (`false`).
    Shift(bool),
}

impl InputEvent {
    /// The press state this event forces, if it is a button event.
    ///
    /// Every button counts: down always presses, up always releases.
    #[must_use]
    pub const fn pointer_transition(self) -> Option<PointerState> {
        match self {
            Self::PointerDown(_) => Some(PointerState::Pressed),
            Self::PointerUp(_) => Some(PointerState::Idle),
            Self::PointerMoved { .. } | Self::Wheel(_) | Self::Shift(_) => None,
        }
    }
}

/// Which pointer button changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Orbits the camera when dragged.
    Left,
    /// Pans the camera when dragged.
    Right,
    /// Wheel click; presses but does not steer.
    Middle,
    /// Back, forward or vendor buttons; press but do not steer.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as Winit;
        match button {
            Winit::Left => Self::Left,
            Winit::Right => Self::Right,
            Winit::Middle => Self::Middle,
            Winit::Back | Winit::Forward | Winit::Other(_) => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_events_map_onto_press_state() {
        for button in [
            MouseButton::Left,
            MouseButton::Right,
            MouseButton::Middle,
            MouseButton::Other,
        ] {
            assert_eq!(
                InputEvent::PointerDown(button).pointer_transition(),
                Some(PointerState::Pressed)
            );
            assert_eq!(
                InputEvent::PointerUp(button).pointer_transition(),
                Some(PointerState::Idle)
            );
        }
    }

    #[test]
    fn other_events_leave_press_state_alone() {
        assert_eq!(
            InputEvent::PointerMoved { x: 1.0, y: 2.0 }.pointer_transition(),
            None
        );
        assert_eq!(InputEvent::Wheel(1.0).pointer_transition(), None);
        assert_eq!(InputEvent::Shift(true).pointer_transition(), None);
    }
}
