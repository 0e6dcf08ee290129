//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the tumble crate.
#[derive(Debug)]
pub enum TumbleError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Per-frame surface acquisition failure.
    Render(wgpu::SurfaceError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TumbleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Render(e) => write!(f, "render error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TumbleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<RenderContextError> for TumbleError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<wgpu::SurfaceError> for TumbleError {
    fn from(e: wgpu::SurfaceError) -> Self {
        Self::Render(e)
    }
}

impl From<std::io::Error> for TumbleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_prefixes_variant() {
        let err = TumbleError::OptionsParse("bad key".into());
        assert_eq!(err.to_string(), "options parse error: bad key");

        let err = TumbleError::Viewer("no display".into());
        assert_eq!(err.to_string(), "viewer error: no display");
    }

    #[test]
    fn io_error_is_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = TumbleError::from(io);
        assert!(matches!(err, TumbleError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn surface_error_converts() {
        let err: TumbleError = wgpu::SurfaceError::Outdated.into();
        assert!(matches!(err, TumbleError::Render(wgpu::SurfaceError::Outdated)));
    }
}
