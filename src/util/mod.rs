//! Shared utilities for the viewer loop.

/// Frame delta and smoothed FPS.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
