use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Keeps the polar angle off the poles so `look_at` never degenerates.
const POLAR_EPSILON: f32 = 1e-3;

/// Pending input below this magnitude is dropped instead of decayed.
const SETTLE_EPSILON: f32 = 1e-6;

/// Per-notch dolly factor before `zoom_speed` scaling.
const ZOOM_BASE: f32 = 0.95;

/// Orbit position around the target: radius, azimuth about +Y measured from
/// +Z, and polar angle measured from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Orbit controls with damping.
///
/// Drag input accumulates as pending deltas; [`update`](Self::update)
/// applies a damped share of them each frame so motion eases out after the
/// pointer stops.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// The controlled camera.
    pub camera: Camera,

    initial_eye: Vec3,
    initial_target: Vec3,

    pending_theta: f32,
    pending_phi: f32,
    pending_pan: Vec3,
    pending_scale: f32,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    enable_damping: bool,
    damping_factor: f32,
    enable_pan: bool,
    enable_zoom: bool,
    /// Whether the camera spins around the target on its own.
    pub auto_rotate: bool,
    auto_rotate_speed: f32,
    min_distance: f32,
    max_distance: f32,

    viewport_height: f32,
}

impl CameraController {
    /// Controller around `camera` configured from options.
    #[must_use]
    pub fn new(camera: Camera, options: &CameraOptions) -> Self {
        Self {
            initial_eye: camera.eye,
            initial_target: camera.target,
            camera,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_pan: Vec3::ZERO,
            pending_scale: 1.0,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            enable_damping: options.enable_damping,
            damping_factor: options.damping_factor.clamp(0.0, 1.0),
            enable_pan: options.enable_pan,
            enable_zoom: options.enable_zoom,
            auto_rotate: options.auto_rotate,
            auto_rotate_speed: options.auto_rotate_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance.max(options.min_distance),
            viewport_height: 1.0,
        }
    }

    /// Queue an orbit by `delta` pixels of drag.
    pub fn rotate(&mut self, delta: Vec2) {
        let h = self.viewport_height;
        self.pending_theta -= TAU * delta.x / h * self.rotate_speed;
        self.pending_phi -= TAU * delta.y / h * self.rotate_speed;
    }

    /// Queue a screen-space pan by `delta` pixels of drag.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.enable_pan {
            return;
        }
        let offset = self.camera.eye - self.camera.target;
        // World units per pixel at the target's depth.
        let half_fov = (self.camera.fovy.to_radians() * 0.5).tan();
        let scale = 2.0 * offset.length() * half_fov / self.viewport_height
            * self.pan_speed;

        let forward = (-offset).normalize_or_zero();
        let right = forward.cross(self.camera.up).normalize_or_zero();
        let up = right.cross(forward);
        self.pending_pan += right * (-delta.x * scale) + up * (delta.y * scale);
    }

    /// Queue a dolly (positive = zoom in, negative = zoom out).
    pub fn zoom(&mut self, delta: f32) {
        if !self.enable_zoom || delta == 0.0 {
            return;
        }
        let step = ZOOM_BASE.powf(self.zoom_speed * delta.abs());
        if delta > 0.0 {
            self.pending_scale *= step;
        } else {
            self.pending_scale /= step;
        }
    }

    /// Apply pending input and auto-rotation. Returns whether the camera
    /// moved.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.auto_rotate && !self.is_settling() {
            return false;
        }
        let before = (self.camera.eye, self.camera.target);
        let share = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        let mut s = Spherical::from_offset(self.camera.eye - self.camera.target);
        if self.auto_rotate {
            s.theta -= TAU / 60.0 * self.auto_rotate_speed * dt.max(0.0);
        }
        s.theta += self.pending_theta * share;
        s.phi = (s.phi + self.pending_phi * share)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        s.radius = (s.radius * self.pending_scale)
            .clamp(self.min_distance, self.max_distance);

        self.camera.target += self.pending_pan * share;
        self.camera.eye = self.camera.target + s.to_offset();

        let keep = 1.0 - share;
        self.pending_theta = settle(self.pending_theta * keep);
        self.pending_phi = settle(self.pending_phi * keep);
        self.pending_pan *= keep;
        if self.pending_pan.length() < SETTLE_EPSILON {
            self.pending_pan = Vec3::ZERO;
        }
        self.pending_scale = 1.0;

        let (eye, target) = before;
        eye.distance_squared(self.camera.eye) > 0.0
            || target.distance_squared(self.camera.target) > 0.0
    }

    /// Whether any queued input is still being applied.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending_theta != 0.0
            || self.pending_phi != 0.0
            || self.pending_pan != Vec3::ZERO
            || self.pending_scale != 1.0
    }

    /// Restore the initial orbit and drop pending input.
    pub fn reset(&mut self) {
        self.camera.eye = self.initial_eye;
        self.camera.target = self.initial_target;
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_pan = Vec3::ZERO;
        self.pending_scale = 1.0;
    }

    /// Update aspect and drag scaling for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        self.viewport_height = height as f32;
    }

    /// Current eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.camera.eye.distance(self.camera.target)
    }
}

fn settle(v: f32) -> f32 {
    if v.abs() < SETTLE_EPSILON {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(options: &CameraOptions) -> CameraController {
        let camera = Camera::looking_at_origin(
            Vec3::new(0.0, 0.0, 30.0),
            1.0,
            options,
        );
        let mut c = CameraController::new(camera, options);
        c.resize(800, 600);
        c
    }

    #[test]
    fn idle_update_does_not_move() {
        let mut c = controller(&CameraOptions::default());
        assert!(!c.update(1.0 / 60.0));
        assert!((c.camera.eye - Vec3::new(0.0, 0.0, 30.0)).length() < 1e-4);
    }

    #[test]
    fn damped_rotation_converges_to_full_drag() {
        let options = CameraOptions::default();
        let mut c = controller(&options);
        // A quarter turn: 2π · dx / h = π/2.
        c.rotate(Vec2::new(150.0, 0.0));
        assert!(c.update(1.0 / 60.0));
        for _ in 0..600 {
            let _ = c.update(1.0 / 60.0);
        }
        assert!(!c.is_settling());
        // θ decreased by π/2 from +Z, so the eye swings to -X.
        let expected = Vec3::new(-30.0, 0.0, 0.0);
        assert!(
            (c.camera.eye - expected).length() < 1e-2,
            "eye {:?}",
            c.camera.eye
        );
        assert!((c.distance() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let options = CameraOptions {
            enable_damping: false,
            ..CameraOptions::default()
        };
        let mut c = controller(&options);
        c.rotate(Vec2::new(150.0, 0.0));
        let _ = c.update(0.0);
        assert!(!c.is_settling());
        assert!((c.camera.eye - Vec3::new(-30.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let options = CameraOptions {
            enable_damping: false,
            ..CameraOptions::default()
        };
        let mut c = controller(&options);
        c.rotate(Vec2::new(0.0, 10_000.0));
        let _ = c.update(0.0);
        let offset = c.camera.eye - c.camera.target;
        // Never exactly on the pole, never past it.
        assert!(offset.y < 30.0 && offset.y > 29.9);
        assert!(offset.x.is_finite() && offset.z.is_finite());
        assert!((offset.length() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped_to_distance_range() {
        let options = CameraOptions {
            min_distance: 10.0,
            max_distance: 40.0,
            ..CameraOptions::default()
        };
        let mut c = controller(&options);
        c.zoom(100.0);
        let _ = c.update(0.0);
        assert!((c.distance() - 10.0).abs() < 1e-3);
        c.zoom(-100.0);
        let _ = c.update(0.0);
        assert!((c.distance() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn disabled_pan_and_zoom_are_ignored() {
        let options = CameraOptions {
            enable_pan: false,
            enable_zoom: false,
            ..CameraOptions::default()
        };
        let mut c = controller(&options);
        c.pan(Vec2::new(50.0, 50.0));
        c.zoom(5.0);
        assert!(!c.is_settling());
        assert!(!c.update(0.0));
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let options = CameraOptions {
            enable_damping: false,
            ..CameraOptions::default()
        };
        let mut c = controller(&options);
        c.pan(Vec2::new(100.0, 0.0));
        let _ = c.update(0.0);
        // Dragging right slides the scene right, so the camera goes left.
        assert!(c.camera.target.x < 0.0);
        assert!((c.distance() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn auto_rotate_spins_without_input() {
        let mut c = controller(&CameraOptions {
            auto_rotate: true,
            ..CameraOptions::default()
        });
        assert!(c.update(1.0));
        assert!(c.camera.eye.x.abs() > 0.1);
    }

    #[test]
    fn reset_restores_initial_orbit() {
        let mut c = controller(&CameraOptions::default());
        c.rotate(Vec2::new(200.0, 80.0));
        c.zoom(3.0);
        for _ in 0..10 {
            let _ = c.update(1.0 / 60.0);
        }
        c.reset();
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(c.camera.target, Vec3::ZERO);
        assert!(!c.is_settling());
    }

    #[test]
    fn resize_ignores_zero_dimensions() {
        let mut c = controller(&CameraOptions::default());
        c.resize(0, 600);
        c.resize(800, 0);
        assert!((c.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        c.resize(1920, 1080);
        assert!((c.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
