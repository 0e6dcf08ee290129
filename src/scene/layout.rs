use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::light::PointLight;
use super::shape::{ShapeKind, ShapeSpec};

/// Built-in layout presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPreset {
    /// Sphere, box, cone and torus.
    #[default]
    Classic,
    /// The classic four plus a dodecahedron and an octahedron, viewed from
    /// further back and spinning slower.
    Extended,
}

/// Static scene configuration consumed by bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    /// Shapes to build, in order.
    pub shapes: Vec<ShapeSpec>,
    /// Point lights.
    pub lights: Vec<PointLight>,
    /// Initial camera eye position (the camera looks at the origin).
    pub camera_position: Vec3,
    /// Upper bound (exclusive) for each rotation speed component, in
    /// radians per frame.
    pub max_rotation_speed: f32,
    /// Material roughness shared by every object.
    pub roughness: f32,
}

const SPHERE: ShapeKind = ShapeKind::Sphere {
    radius: 3.0,
    width_segments: 64,
    height_segments: 64,
};
const BOX: ShapeKind = ShapeKind::Box {
    width: 4.0,
    height: 4.0,
    depth: 4.0,
};
const CONE: ShapeKind = ShapeKind::Cone {
    radius: 3.0,
    height: 6.0,
    radial_segments: 64,
};
const TORUS: ShapeKind = ShapeKind::Torus {
    radius: 3.0,
    tube: 1.0,
    radial_segments: 64,
    tubular_segments: 100,
};

impl SceneLayout {
    /// Four shapes spread around the origin, camera at z = 30.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            shapes: classic_shapes(),
            lights: default_lights(),
            camera_position: Vec3::new(0.0, 0.0, 30.0),
            max_rotation_speed: 0.05,
            roughness: 0.5,
        }
    }

    /// Six shapes, camera at z = 40, slower spin.
    #[must_use]
    pub fn extended() -> Self {
        let mut shapes = classic_shapes();
        shapes.extend([
            ShapeSpec::new(
                ShapeKind::Dodecahedron { radius: 3.0 },
                [-15.0, -10.0, 5.0],
            ),
            ShapeSpec::new(
                ShapeKind::Octahedron { radius: 3.0 },
                [15.0, 10.0, -5.0],
            ),
        ]);
        Self {
            shapes,
            lights: default_lights(),
            camera_position: Vec3::new(0.0, 0.0, 40.0),
            max_rotation_speed: 0.02,
            roughness: 0.5,
        }
    }

    /// Layout for a preset.
    #[must_use]
    pub fn from_preset(preset: LayoutPreset) -> Self {
        match preset {
            LayoutPreset::Classic => Self::classic(),
            LayoutPreset::Extended => Self::extended(),
        }
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::classic()
    }
}

fn classic_shapes() -> Vec<ShapeSpec> {
    vec![
        ShapeSpec::new(SPHERE, [-10.0, 0.0, 0.0]),
        ShapeSpec::new(BOX, [10.0, 5.0, 0.0]),
        ShapeSpec::new(CONE, [0.0, -5.0, 10.0]),
        ShapeSpec::new(TORUS, [0.0, 10.0, -10.0]),
    ]
}

/// White key light above, red below, green right, blue left.
fn default_lights() -> Vec<PointLight> {
    vec![
        PointLight::new(0xffffff, 100.0, 100.0, Vec3::new(0.0, 20.0, 10.0)),
        PointLight::new(0xff0000, 100.0, 100.0, Vec3::new(0.0, -20.0, 10.0)),
        PointLight::new(0x00ff00, 100.0, 100.0, Vec3::new(20.0, 0.0, 10.0)),
        PointLight::new(0x0000ff, 100.0, 100.0, Vec3::new(-20.0, 0.0, 10.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_has_four_shapes_and_four_lights() {
        let layout = SceneLayout::classic();
        assert_eq!(layout.shapes.len(), 4);
        assert_eq!(layout.lights.len(), 4);
        assert_eq!(layout.camera_position.z, 30.0);
    }

    #[test]
    fn extended_adds_two_polyhedra() {
        let layout = SceneLayout::extended();
        assert_eq!(layout.shapes.len(), 6);
        assert_eq!(layout.shapes[4].shape.name(), "dodecahedron");
        assert_eq!(layout.shapes[5].shape.name(), "octahedron");
        assert!(layout.max_rotation_speed < SceneLayout::classic().max_rotation_speed);
    }
}
