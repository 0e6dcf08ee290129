//! Scene container: visual objects, point lights, and per-object spin.
//!
//! [`Scene::bootstrap`] builds everything once from a [`SceneLayout`]. After
//! that the object list never grows or shrinks; the render loop and the
//! tween engine mutate objects in place by index.

/// Linear RGB color type.
pub mod color;
/// Built-in layouts and the bootstrap configuration type.
pub mod layout;
/// Point light source.
pub mod light;
/// Visual object (mesh instance) and material.
pub mod object;
/// Primitive geometry descriptors.
pub mod shape;

pub use color::Color;
use glam::Vec3;
pub use layout::{LayoutPreset, SceneLayout};
pub use light::PointLight;
pub use object::{Material, VisualObject};
use rand::Rng;
pub use shape::{ShapeKind, ShapeSpec};

/// The shared scene container.
///
/// `objects` and `rotation_speeds` are index-aligned and have equal length
/// for the scene's whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<VisualObject>,
    rotation_speeds: Vec<Vec3>,
    lights: Vec<PointLight>,
    camera_position: Vec3,
}

impl Scene {
    /// Build one object per layout entry with a random material color and a
    /// random rotation speed, and register the layout's lights.
    pub fn bootstrap<R: Rng + ?Sized>(layout: &SceneLayout, rng: &mut R) -> Self {
        let objects: Vec<VisualObject> = layout
            .shapes
            .iter()
            .map(|spec| {
                let material = Material {
                    color: Color::new(rng.random(), rng.random(), rng.random()),
                    roughness: layout.roughness,
                };
                VisualObject::new(spec.shape, material, spec.position())
            })
            .collect();

        let max = layout.max_rotation_speed;
        let rotation_speeds = objects
            .iter()
            .map(|_| {
                Vec3::new(
                    rng.random::<f32>() * max,
                    rng.random::<f32>() * max,
                    rng.random::<f32>() * max,
                )
            })
            .collect();

        for (obj, speed) in objects.iter().zip(&rotation_speeds) {
            log::debug!(
                "bootstrap: {} at {:?}, color {:?}, spin {:?}",
                obj.shape.name(),
                obj.position,
                obj.material.color,
                speed
            );
        }

        Self {
            objects,
            rotation_speeds,
            lights: layout.lights.clone(),
            camera_position: layout.camera_position,
        }
    }

    /// Add each object's rotation speed to its rotation.
    pub fn advance_rotations(&mut self) {
        for (obj, speed) in self.objects.iter_mut().zip(&self.rotation_speeds) {
            obj.rotation += *speed;
        }
    }

    /// All visual objects.
    #[must_use]
    pub fn objects(&self) -> &[VisualObject] {
        &self.objects
    }

    /// Mutable access to the objects. The slice cannot change length, so
    /// the rotation-speed alignment is preserved.
    pub fn objects_mut(&mut self) -> &mut [VisualObject] {
        &mut self.objects
    }

    /// Per-object rotation increments, index-aligned with [`objects`](Self::objects).
    #[must_use]
    pub fn rotation_speeds(&self) -> &[Vec3] {
        &self.rotation_speeds
    }

    /// All point lights.
    #[must_use]
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Camera eye position recorded at bootstrap.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn bootstrap_builds_one_object_per_shape() {
        let layout = SceneLayout::classic();
        let scene = Scene::bootstrap(&layout, &mut seeded());

        assert_eq!(scene.len(), layout.shapes.len());
        assert_eq!(scene.rotation_speeds().len(), scene.len());
        assert_eq!(scene.lights().len(), 4);

        for (obj, spec) in scene.objects().iter().zip(&layout.shapes) {
            assert_eq!(obj.position, spec.position());
            assert_eq!(obj.shape, spec.shape);
            assert!(obj.material.color.is_valid());
            assert_eq!(obj.material.roughness, 0.5);
        }
    }

    #[test]
    fn rotation_speeds_respect_bound() {
        let layout = SceneLayout::extended();
        let scene = Scene::bootstrap(&layout, &mut seeded());
        for speed in scene.rotation_speeds() {
            for c in speed.to_array() {
                assert!((0.0..layout.max_rotation_speed).contains(&c));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_scene() {
        let layout = SceneLayout::classic();
        let a = Scene::bootstrap(&layout, &mut seeded());
        let b = Scene::bootstrap(&layout, &mut seeded());
        assert_eq!(a.objects(), b.objects());
        assert_eq!(a.rotation_speeds(), b.rotation_speeds());
    }

    #[test]
    fn rotation_after_k_steps_is_k_times_speed() {
        let mut scene = Scene::bootstrap(&SceneLayout::classic(), &mut seeded());
        let initial: Vec<Vec3> =
            scene.objects().iter().map(|o| o.rotation).collect();

        for k in 0..=25u32 {
            for (i, obj) in scene.objects().iter().enumerate() {
                let expected = initial[i] + scene.rotation_speeds()[i] * k as f32;
                assert!(
                    (obj.rotation - expected).length() < 1e-4,
                    "object {i} after {k} steps: {:?} vs {expected:?}",
                    obj.rotation
                );
            }
            scene.advance_rotations();
        }
    }

    #[test]
    fn empty_layout_is_a_valid_scene() {
        let layout = SceneLayout {
            shapes: Vec::new(),
            ..SceneLayout::classic()
        };
        let mut scene = Scene::bootstrap(&layout, &mut seeded());
        assert!(scene.is_empty());
        scene.advance_rotations();
        assert!(scene.rotation_speeds().is_empty());
    }
}
