use super::{FrameRenderer, SceneEngine};
use crate::error::TumbleError;

impl SceneEngine {
    /// Advance one frame and draw it.
    ///
    /// Object rotations advance by their per-frame speed (unless paused),
    /// tweens advance by `dt` seconds, the orbit camera applies its damped
    /// input, and the renderer draws once.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's draw error. The frame's state updates have
    /// already been applied; only the frame counter is left unchanged.
    pub fn on_frame<R: FrameRenderer + ?Sized>(
        &mut self,
        dt: f32,
        renderer: &mut R,
    ) -> Result<(), TumbleError> {
        if !self.paused {
            self.scene.advance_rotations();
        }
        self.tweener.step(dt, self.scene.objects_mut());
        let _ = self.camera.update(dt);

        renderer.draw(&self.scene, &self.camera.camera)?;
        self.frame_count += 1;
        Ok(())
    }

    /// Apply a new viewport size to the camera and the renderer. Zero
    /// dimensions (a minimized window) are ignored.
    pub fn on_resize<R: FrameRenderer + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        renderer: &mut R,
    ) {
        if width == 0 || height == 0 {
            log::debug!("ignoring zero-sized resize {width}x{height}");
            return;
        }
        self.viewport = (width, height);
        self.camera.resize(width, height);
        renderer.resize(width, height);
    }
}
