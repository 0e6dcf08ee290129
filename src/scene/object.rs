use glam::{EulerRot, Mat4, Quat, Vec3};

use super::color::Color;
use super::shape::ShapeKind;

/// Surface parameters for a lit mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base (diffuse) color.
    pub color: Color,
    /// Microfacet roughness in `[0, 1]`.
    pub roughness: f32,
}

/// A renderable mesh instance: geometry, material, and transform.
///
/// Created once during bootstrap. The render loop advances `rotation`; the
/// tween engine writes `material.color` and `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualObject {
    /// Geometry descriptor (also the mesh cache key for the renderer).
    pub shape: ShapeKind,
    /// Surface material.
    pub material: Material,
    /// World-space position.
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order. Unbounded.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl VisualObject {
    /// Object at `position` with identity rotation and unit scale.
    #[must_use]
    pub fn new(shape: ShapeKind, material: Material, position: Vec3) -> Self {
        Self {
            shape,
            material,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Orientation quaternion for the current Euler rotation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix (translate · rotate · scale).
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.orientation(),
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> VisualObject {
        VisualObject::new(
            ShapeKind::Box {
                width: 2.0,
                height: 2.0,
                depth: 2.0,
            },
            Material {
                color: Color::WHITE,
                roughness: 0.5,
            },
            Vec3::new(1.0, 2.0, 3.0),
        )
    }

    #[test]
    fn model_matrix_translates_origin_to_position() {
        let obj = cube();
        let p = obj.model_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn zero_scale_collapses_geometry() {
        let mut obj = cube();
        obj.scale = Vec3::ZERO;
        let p = obj.model_matrix().transform_point3(Vec3::ONE);
        assert!((p - obj.position).length() < 1e-6);
    }

    #[test]
    fn rotation_about_y_turns_x_into_negative_z() {
        let mut obj = cube();
        obj.position = Vec3::ZERO;
        obj.rotation = Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let p = obj.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::NEG_Z).length() < 1e-5, "got {p:?}");
    }
}
