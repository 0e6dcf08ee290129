use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Primitive geometry descriptor.
///
/// Parameter names follow the usual primitive conventions: radii in world
/// units, segment counts controlling tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// UV sphere.
    Sphere {
        /// Sphere radius.
        radius: f32,
        /// Segments around the equator.
        width_segments: u32,
        /// Segments from pole to pole.
        height_segments: u32,
    },
    /// Axis-aligned box centered on the origin.
    Box {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
        /// Extent along Z.
        depth: f32,
    },
    /// Cone with its apex on +Y, base on -Y.
    Cone {
        /// Base radius.
        radius: f32,
        /// Apex-to-base height.
        height: f32,
        /// Segments around the base.
        radial_segments: u32,
    },
    /// Torus lying in the XY plane.
    Torus {
        /// Distance from the torus center to the tube center.
        radius: f32,
        /// Tube radius.
        tube: f32,
        /// Segments around the tube cross-section.
        radial_segments: u32,
        /// Segments around the ring.
        tubular_segments: u32,
    },
    /// Regular dodecahedron.
    Dodecahedron {
        /// Circumradius.
        radius: f32,
    },
    /// Regular octahedron.
    Octahedron {
        /// Circumradius.
        radius: f32,
    },
}

impl ShapeKind {
    /// Short human-readable name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Box { .. } => "box",
            Self::Cone { .. } => "cone",
            Self::Torus { .. } => "torus",
            Self::Dodecahedron { .. } => "dodecahedron",
            Self::Octahedron { .. } => "octahedron",
        }
    }
}

/// One entry of a scene layout: what to build and where to put it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// Geometry to generate.
    pub shape: ShapeKind,
    /// Initial world-space position.
    pub position: [f32; 3],
}

impl ShapeSpec {
    /// Spec at the given position.
    #[must_use]
    pub const fn new(shape: ShapeKind, position: [f32; 3]) -> Self {
        Self { shape, position }
    }

    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}
