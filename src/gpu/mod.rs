//! GPU resources and the scene renderer.
//!
//! Everything here needs a live wgpu device except the uniform packing
//! ([`lighting::LightingUniform`], [`mesh_renderer::ObjectUniform`]), which
//! is plain data and tested on the CPU.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Point-light uniform and bind group.
pub mod lighting;
/// Lit mesh pipeline implementing the engine's frame renderer.
pub mod mesh_renderer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment.
pub mod texture;
