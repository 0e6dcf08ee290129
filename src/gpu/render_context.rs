use std::fmt;

/// Why the window could not get a GPU to draw with.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not back a surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    AdapterRequest(wgpu::RequestAdapterError),
    /// The adapter refused the device.
    DeviceRequest(wgpu::RequestDeviceError),
    /// The adapter offers no configuration for the surface.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => write!(f, "cannot create surface: {e}"),
            Self::AdapterRequest(e) => write!(f, "no usable adapter: {e}"),
            Self::DeviceRequest(e) => write!(f, "cannot open device: {e}"),
            Self::UnsupportedSurface => {
                f.write_str("adapter cannot present to this surface")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

/// Clamp a requested surface size into `1..=max_dimension` on both axes.
///
/// Windows can be larger than the device's biggest 2D texture (multi-monitor
/// spans, high-DPI scaling); configuring past the limit is a validation error.
#[must_use]
pub fn surface_extent(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max = max_dimension.max(1);
    (width.clamp(1, max), height.clamp(1, max))
}

/// Device, queue and the window surface the scene is presented to.
pub struct RenderContext {
    /// Logical device.
    pub device: wgpu::Device,
    /// Command queue.
    pub queue: wgpu::Queue,
    /// Window surface.
    pub surface: wgpu::Surface<'static>,
    /// Surface format, size and present mode.
    pub config: wgpu::SurfaceConfiguration,
    max_dimension: u32,
}

async fn pick_adapter(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
) -> Result<wgpu::Adapter, RenderContextError> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            compatible_surface: Some(surface),
            power_preference: wgpu::PowerPreference::HighPerformance,
            ..Default::default()
        })
        .await
        .map_err(RenderContextError::AdapterRequest)?;
    let info = adapter.get_info();
    log::info!("adapter {:?} ({:?})", info.name, info.backend);
    Ok(adapter)
}

async fn open_device(
    adapter: &wgpu::Adapter,
) -> Result<(wgpu::Device, wgpu::Queue), RenderContextError> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("Tumble Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            ..Default::default()
        })
        .await
        .map_err(RenderContextError::DeviceRequest)
}

impl RenderContext {
    /// Create a render context for `window` at `initial_size` physical
    /// pixels. Presentation is vsync-paced (`Fifo`) and the size is clamped
    /// to the device's largest 2D texture.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] if any step of bringing up the
    /// surface, adapter or device fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;
        let adapter = pick_adapter(&instance, &surface).await?;
        let (device, queue) = open_device(&adapter).await?;

        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) =
            Self::fit(initial_size.0, initial_size.1, max_dimension);
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderContextError::UnsupportedSurface)?;
        config.present_mode = wgpu::PresentMode::Fifo;

        let context = Self {
            device,
            queue,
            surface,
            config,
            max_dimension,
        };
        context.configure();
        Ok(context)
    }

    fn fit(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
        let extent = surface_extent(width, height, max_dimension);
        if extent != (width.max(1), height.max(1)) {
            log::warn!(
                "surface {width}x{height} exceeds the {max_dimension}px limit, \
                 using {}x{}",
                extent.0,
                extent.1
            );
        }
        extent
    }

    fn configure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// The surface texture format.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Configured surface size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Reconfigure for a new window size. Zero on either axis is ignored
    /// and oversized windows are clamped to the device limit.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = Self::fit(width, height, self.max_dimension);
        self.config.width = width;
        self.config.height = height;
        self.configure();
    }

    /// Acquire the next swapchain texture.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the surface is lost, outdated or
    /// timed out.
    pub fn get_next_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// A fresh encoder for one frame.
    #[must_use]
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Finish `encoder` and queue it.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit([encoder.finish()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_axes_clamp_to_the_limit() {
        assert_eq!(surface_extent(12_000, 2_000, 8_192), (8_192, 2_000));
        assert_eq!(surface_extent(3_000, 20_000, 2_048), (2_048, 2_048));
    }

    #[test]
    fn zero_axes_become_one_pixel() {
        assert_eq!(surface_extent(0, 0, 8_192), (1, 1));
        assert_eq!(surface_extent(640, 0, 8_192), (640, 1));
    }

    #[test]
    fn sizes_within_the_limit_pass_through() {
        assert_eq!(surface_extent(1_920, 1_080, 8_192), (1_920, 1_080));
        assert_eq!(surface_extent(8_192, 8_192, 8_192), (8_192, 8_192));
    }

    #[test]
    fn zero_limit_still_yields_a_pixel() {
        assert_eq!(surface_extent(800, 600, 0), (1, 1));
    }
}
