use rand::Rng;

use super::{SceneCommand, SceneEngine};
use crate::input::{InputEvent, MouseButton};
use crate::scene::Color;

impl SceneEngine {
    /// A pointer button went down.
    pub fn on_pointer_down(&mut self, button: MouseButton) {
        self.handle_input(InputEvent::PointerDown(button));
    }

    /// A pointer button came up. Harmless when nothing is pressed.
    pub fn on_pointer_up(&mut self, button: MouseButton) {
        self.handle_input(InputEvent::PointerUp(button));
    }

    /// The pointer moved to `(x, y)` physical pixels.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.handle_input(InputEvent::PointerMoved { x, y });
    }

    /// Route a raw input event through the input processor and execute the
    /// resulting commands.
    pub fn handle_input(&mut self, event: InputEvent) {
        for cmd in self.input.handle_event(event) {
            self.execute(cmd);
        }
    }

    /// Execute the command bound to `key`, if any. Returns whether the key
    /// was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Perform one command.
    pub fn execute(&mut self, cmd: SceneCommand) {
        match cmd {
            SceneCommand::RotateCamera { delta } => self.camera.rotate(delta),
            SceneCommand::PanCamera { delta } => self.camera.pan(delta),
            SceneCommand::Zoom { delta } => self.camera.zoom(delta),
            SceneCommand::ResetCamera => self.camera.reset(),
            SceneCommand::ToggleAutoRotate => {
                self.camera.auto_rotate = !self.camera.auto_rotate;
                log::debug!("auto-rotate {}", self.camera.auto_rotate);
            }
            SceneCommand::Recolor => self.recolor(),
            SceneCommand::TrackCursor { x, y } => self.track_cursor(x, y),
            SceneCommand::TogglePause => {
                self.paused = !self.paused;
                log::debug!("paused {}", self.paused);
            }
        }
    }

    /// Tween every object toward one fresh random sRGB color.
    fn recolor(&mut self) {
        let target = Color::from_srgb8(
            self.rng.random::<f32>() * 255.0,
            self.rng.random::<f32>() * 255.0,
            self.rng.random::<f32>() * 255.0,
        );
        let secs = self.interaction.color_tween_secs;
        let easing = self.interaction.easing;
        for (i, obj) in self.scene.objects().iter().enumerate() {
            self.tweener
                .color_to(i, obj.material.color, target, secs, easing);
        }
    }

    /// Tint each object from the cursor position and lean its rotation
    /// toward it.
    fn track_cursor(&mut self, cx: f32, cy: f32) {
        let (w, h) = self.viewport;
        let x = cx / w as f32 - 0.5;
        let y = cy / h as f32 - 0.5;
        let follow = self.interaction.tracking_follow;
        let secs = self.interaction.color_tween_secs;
        let easing = self.interaction.easing;

        for (i, obj) in self.scene.objects_mut().iter_mut().enumerate() {
            let k = i as f32;
            let target = Color::new(
                (x * k).abs() % 1.0,
                (y * k).abs() % 1.0,
                0.5 + 0.5 * self.rng.random::<f32>(),
            );
            self.tweener
                .color_to(i, obj.material.color, target, secs, easing);
            obj.rotation.x += (y - obj.rotation.x) * follow;
            obj.rotation.y += (x - obj.rotation.y) * follow;
        }
    }
}
