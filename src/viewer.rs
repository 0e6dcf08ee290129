//! Standalone window backed by winit.
//!
//! ```no_run
//! # use tumble::Viewer;
//! Viewer::builder()
//!     .with_title("Tumble")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    engine::SceneEngine,
    error::TumbleError,
    gpu::{mesh_renderer::MeshRenderer, render_context::RenderContext},
    input::{InputEvent, MouseButton},
    options::Options,
    util::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: Options::default(),
            title: "Tumble".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the tumbling scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or Escape is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`TumbleError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), TumbleError> {
        let event_loop =
            EventLoop::new().map_err(|e| TumbleError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            running: None,
            timing: FrameTiming::new(),
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TumbleError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Everything that exists once the window is up.
struct Running {
    window: Arc<Window>,
    engine: SceneEngine,
    renderer: MeshRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    running: Option<Running>,
    timing: FrameTiming,
    options: Options,
    title: String,
}

fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Running, TumbleError> {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| TumbleError::Viewer(e.to_string()))?,
        );
        let (width, height) = viewport_size(window.inner_size());

        let context =
            pollster::block_on(RenderContext::new(window.clone(), (width, height)))?;
        let renderer = MeshRenderer::new(context, &self.options);
        let engine = SceneEngine::new(&self.options, width, height);

        Ok(Running {
            window,
            engine,
            renderer,
        })
    }
}

impl Running {
    fn redraw(&mut self, dt: f32) {
        match self.engine.on_frame(dt, &mut self.renderer) {
            Ok(()) => {}
            Err(TumbleError::Render(
                wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
            )) => {
                let (w, h) = viewport_size(self.window.inner_size());
                self.engine.on_resize(w, h, &mut self.renderer);
            }
            Err(e) => {
                log::error!("render error: {e}");
            }
        }
        self.window.request_redraw();
    }

    fn handle_key(&mut self, code: KeyCode, event_loop: &ActiveEventLoop) {
        if code == KeyCode::Escape {
            event_loop.exit();
            return;
        }
        let key_str = format!("{code:?}");
        if !self.engine.handle_key_press(&key_str) {
            log::trace!("unbound key {key_str}");
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => {
                running.window.request_redraw();
                self.timing = FrameTiming::new();
                self.running = Some(running);
            }
            Err(e) => {
                log::error!("failed to start viewer: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(app) = &mut self.running else {
            return;
        };

        match event {
            WindowEvent::Resized(size) => {
                app.engine
                    .on_resize(size.width, size.height, &mut app.renderer);
                app.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let dt = self.timing.tick();
                app.redraw(dt);
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let button = MouseButton::from(button);
                app.engine.handle_input(match state {
                    ElementState::Pressed => InputEvent::PointerDown(button),
                    ElementState::Released => InputEvent::PointerUp(button),
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                app.engine.on_pointer_move(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                app.engine.handle_input(InputEvent::Wheel(scroll_delta));
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                app.engine
                    .handle_input(InputEvent::Shift(modifiers.state().shift_key()));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    app.handle_key(code, event_loop);
                }
            }

            _ => (),
        }
    }
}
