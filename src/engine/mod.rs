//! Headless scene engine: bootstrap, per-frame update and interaction.
//!
//! [`SceneEngine`] owns the scene, the orbit camera, the tween engine and the
//! input processor. A host (the winit viewer, or a test) calls its handler
//! methods; drawing goes through the [`FrameRenderer`] seam so the engine
//! never touches the GPU itself.

/// Interactive command vocabulary.
pub mod command;
mod frame;
mod interaction;

pub use command::SceneCommand;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::Tweener;
use crate::camera::{Camera, CameraController};
use crate::error::TumbleError;
use crate::input::{InputProcessor, PointerState};
use crate::options::{InteractionOptions, Options};
use crate::scene::Scene;

/// Something that can draw the scene through a camera.
pub trait FrameRenderer {
    /// Draw one frame.
    fn draw(&mut self, scene: &Scene, camera: &Camera) -> Result<(), TumbleError>;

    /// Reconfigure the output surface for a new size. Never called with a
    /// zero dimension.
    fn resize(&mut self, width: u32, height: u32);
}

/// The scene, its camera, and everything that mutates them.
#[derive(Debug)]
pub struct SceneEngine {
    scene: Scene,
    camera: CameraController,
    tweener: Tweener,
    input: InputProcessor,
    rng: StdRng,
    interaction: InteractionOptions,
    viewport: (u32, u32),
    paused: bool,
    frame_count: u64,
}

impl SceneEngine {
    /// Bootstrap the scene from options for a `width` × `height` viewport
    /// and start the grow-in.
    ///
    /// Randomness is seeded from `options.scene.seed`, or from OS entropy
    /// when no seed is set.
    #[must_use]
    pub fn new(options: &Options, width: u32, height: u32) -> Self {
        let rng = options
            .scene
            .seed
            .map_or_else(StdRng::from_os_rng, |seed| {
                StdRng::seed_from_u64(seed as u64)
            });
        Self::with_rng(options, width, height, rng)
    }

    /// Like [`new`](Self::new) with an explicit generator.
    #[must_use]
    pub fn with_rng(
        options: &Options,
        width: u32,
        height: u32,
        mut rng: StdRng,
    ) -> Self {
        let layout = options.scene.layout(options.lighting.roughness);
        let scene = Scene::bootstrap(&layout, &mut rng);

        let width = width.max(1);
        let height = height.max(1);
        let camera = Camera::looking_at_origin(
            scene.camera_position(),
            width as f32 / height as f32,
            &options.camera,
        );
        let mut camera = CameraController::new(camera, &options.camera);
        camera.resize(width, height);

        let input = InputProcessor::with_key_bindings(
            options.interaction.mode,
            options.keybindings.clone(),
        );

        log::info!(
            "scene ready: {} objects, {} lights, {:?} interaction",
            scene.len(),
            scene.lights().len(),
            options.interaction.mode
        );

        let mut engine = Self {
            scene,
            camera,
            tweener: Tweener::new(),
            input,
            rng,
            interaction: options.interaction.clone(),
            viewport: (width, height),
            paused: false,
            frame_count: 0,
        };
        engine.start_grow_in();
        engine
    }

    /// Collapse every object to zero scale and tween it back to its
    /// designed scale.
    fn start_grow_in(&mut self) {
        let secs = self.interaction.grow_in_secs;
        let easing = self.interaction.easing;
        for (i, obj) in self.scene.objects_mut().iter_mut().enumerate() {
            let designed = obj.scale;
            obj.scale = Vec3::ZERO;
            self.tweener.scale_to(i, Vec3::ZERO, designed, secs, easing);
        }
    }

    /// The scene being rendered.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera.camera
    }

    /// Running tweens.
    #[must_use]
    pub fn tweener(&self) -> &Tweener {
        &self.tweener
    }

    /// Pointer press state.
    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.input.pointer_state()
    }

    /// Whether object spin is frozen.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Last non-zero viewport size.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Frames drawn so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
