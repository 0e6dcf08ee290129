// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive viewer for a handful of lit, tumbling 3D primitives.
//!
//! A fixed layout of shapes (sphere, box, cone, torus, and optionally
//! dodecahedron and octahedron) spins under four colored point lights.
//! Dragging with a button held recolors every object at once through
//! eased tweens; the orbit camera rotates, pans and zooms.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - bootstrap, per-frame update and input
//!   handling, drawing through any [`engine::FrameRenderer`]
//! - [`scene::Scene`] - the objects, their spin speeds and the lights
//! - [`options::Options`] - TOML-backed configuration
//! - [`animation::Tweener`] - property tweens with overwrite-on-restart
//! - `Viewer` - the winit window (`viewer` feature)
//!
//! # Architecture
//!
//! The engine is headless: it never touches the GPU, so every behavior is
//! testable without a window. The viewer owns a [`gpu::mesh_renderer::MeshRenderer`]
//! and drives the engine from winit callbacks, one `on_frame` per redraw.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod mesh;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::{FrameRenderer, SceneEngine};
pub use error::TumbleError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
