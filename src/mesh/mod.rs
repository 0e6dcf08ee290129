//! CPU mesh generation for every [`ShapeKind`].
//!
//! Generators emit indexed triangle lists with counter-clockwise front faces
//! and per-vertex normals. Curved primitives get smooth normals; the
//! polyhedra are flat-shaded (each face owns its vertices).

mod polyhedra;
mod primitives;

use crate::scene::ShapeKind;

/// Vertex format shared by every generated mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
}

impl MeshVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout matching `@location(0)` position and
    /// `@location(1)` normal.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> =
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        };

    fn new(position: glam::Vec3, normal: glam::Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex data.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`, three per triangle.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of indices, as the draw call expects it.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Next vertex index, used as the base when appending a patch.
    fn base(&self) -> u32 {
        self.vertices.len() as u32
    }
}

/// Generate the mesh for a shape.
#[must_use]
pub fn generate(shape: &ShapeKind) -> MeshData {
    match *shape {
        ShapeKind::Sphere {
            radius,
            width_segments,
            height_segments,
        } => primitives::sphere(radius, width_segments, height_segments),
        ShapeKind::Box {
            width,
            height,
            depth,
        } => primitives::cuboid(width, height, depth),
        ShapeKind::Cone {
            radius,
            height,
            radial_segments,
        } => primitives::cone(radius, height, radial_segments),
        ShapeKind::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => primitives::torus(radius, tube, radial_segments, tubular_segments),
        ShapeKind::Dodecahedron { radius } => polyhedra::dodecahedron(radius),
        ShapeKind::Octahedron { radius } => polyhedra::octahedron(radius),
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::SceneLayout;

    fn all_shapes() -> Vec<ShapeKind> {
        SceneLayout::extended()
            .shapes
            .iter()
            .map(|s| s.shape)
            .collect()
    }

    #[test]
    fn indices_are_in_range_and_form_triangles() {
        for shape in all_shapes() {
            let mesh = generate(&shape);
            assert!(!mesh.vertices.is_empty(), "{}", shape.name());
            assert_eq!(mesh.indices.len() % 3, 0, "{}", shape.name());
            let n = mesh.vertices.len() as u32;
            assert!(
                mesh.indices.iter().all(|&i| i < n),
                "{} has an out-of-range index",
                shape.name()
            );
        }
    }

    #[test]
    fn normals_are_unit_length() {
        for shape in all_shapes() {
            let mesh = generate(&shape);
            for v in &mesh.vertices {
                let len = Vec3::from_array(v.normal).length();
                assert!(
                    (len - 1.0).abs() < 1e-4,
                    "{} normal length {len}",
                    shape.name()
                );
            }
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = generate(&ShapeKind::Sphere {
            radius: 3.0,
            width_segments: 16,
            height_segments: 8,
        });
        for v in &mesh.vertices {
            let r = Vec3::from_array(v.position).length();
            assert!((r - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn box_spans_its_extents() {
        let mesh = generate(&ShapeKind::Box {
            width: 4.0,
            height: 2.0,
            depth: 6.0,
        });
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        let max = mesh
            .vertices
            .iter()
            .fold(Vec3::splat(f32::MIN), |m, v| {
                m.max(Vec3::from_array(v.position))
            });
        assert!((max - Vec3::new(2.0, 1.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn polyhedra_have_expected_face_counts() {
        // Pentagons fan into three triangles each.
        let dodeca = generate(&ShapeKind::Dodecahedron { radius: 3.0 });
        assert_eq!(dodeca.indices.len(), 12 * 3 * 3);
        let octa = generate(&ShapeKind::Octahedron { radius: 3.0 });
        assert_eq!(octa.indices.len(), 8 * 3);
    }

    #[test]
    fn triangles_face_outward() {
        for shape in all_shapes() {
            let mesh = generate(&shape);
            for tri in mesh.indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]]
                    .map(|i| mesh.vertices[i as usize]);
                let pa = Vec3::from_array(a.position);
                let pb = Vec3::from_array(b.position);
                let pc = Vec3::from_array(c.position);
                let face = (pb - pa).cross(pc - pa);
                if face.length_squared() < 1e-10 {
                    continue;
                }
                let shading = Vec3::from_array(a.normal)
                    + Vec3::from_array(b.normal)
                    + Vec3::from_array(c.normal);
                assert!(
                    face.dot(shading) > 0.0,
                    "{} has an inward-wound triangle",
                    shape.name()
                );
            }
        }
    }
}
