//! Property-keyed, time-based tweens with overwrite-on-restart semantics.

use std::collections::HashMap;

use glam::Vec3;

use super::easing::EasingFunction;
use crate::scene::{Color, VisualObject};

/// Linear interpolation between two values.
pub trait Lerp: Copy {
    /// Value at fraction `t` between `self` (t = 0) and `other` (t = 1).
    #[must_use]
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self::lerp(self, other, t)
    }
}

impl Lerp for Color {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            Lerp::lerp(self.r, other.r, t),
            Lerp::lerp(self.g, other.g, t),
            Lerp::lerp(self.b, other.b, t),
        )
    }
}

/// One interpolation from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    /// Start value.
    pub from: T,
    /// End value.
    pub to: T,
    /// Seconds advanced so far.
    pub elapsed: f32,
    /// Total length in seconds. Zero or negative completes immediately.
    pub duration: f32,
    /// Progress curve.
    pub easing: EasingFunction,
}

impl<T: Lerp> Tween<T> {
    /// Tween at its start.
    #[must_use]
    pub fn new(from: T, to: T, duration: f32, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            easing,
        }
    }

    /// Raw progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Whether the tween has reached its end value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current value. Exactly `to` once complete.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_complete() {
            self.to
        } else {
            self.from.lerp(self.to, self.easing.evaluate(self.progress()))
        }
    }

    /// Advance by `dt` seconds (negative values are ignored) and return the
    /// new value.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed += dt.max(0.0);
        self.value()
    }
}

/// Animatable object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    /// `material.color`.
    Color,
    /// `scale`.
    Scale,
}

/// Identifies one tween slot: at most one tween runs per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenKey {
    /// Index into the scene's object list.
    pub object: usize,
    /// Property being animated.
    pub property: TweenProperty,
}

impl TweenKey {
    /// Color slot of an object.
    #[must_use]
    pub const fn color(object: usize) -> Self {
        Self {
            object,
            property: TweenProperty::Color,
        }
    }

    /// Scale slot of an object.
    #[must_use]
    pub const fn scale(object: usize) -> Self {
        Self {
            object,
            property: TweenProperty::Scale,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ActiveTween {
    Color(Tween<Color>),
    Scale(Tween<Vec3>),
}

impl ActiveTween {
    /// Advance and write the value into `obj`. Returns whether finished.
    fn step(&mut self, dt: f32, obj: &mut VisualObject) -> bool {
        match self {
            Self::Color(t) => {
                obj.material.color = t.advance(dt);
                t.is_complete()
            }
            Self::Scale(t) => {
                obj.scale = t.advance(dt);
                t.is_complete()
            }
        }
    }
}

/// Drives every running tween and writes results into the scene objects.
///
/// Starting a tween on a key that already has one replaces it. Callers pass
/// the object's current value as `from`, so the new tween picks up where the
/// interrupted one left off instead of stacking on top of it.
#[derive(Debug, Default)]
pub struct Tweener {
    active: HashMap<TweenKey, ActiveTween>,
}

impl Tweener {
    /// Empty tweener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a color tween on object `object`.
    pub fn color_to(
        &mut self,
        object: usize,
        from: Color,
        to: Color,
        duration: f32,
        easing: EasingFunction,
    ) {
        let tween = Tween::new(from, to, duration, easing);
        let _ = self
            .active
            .insert(TweenKey::color(object), ActiveTween::Color(tween));
    }

    /// Start (or restart) a scale tween on object `object`.
    pub fn scale_to(
        &mut self,
        object: usize,
        from: Vec3,
        to: Vec3,
        duration: f32,
        easing: EasingFunction,
    ) {
        let tween = Tween::new(from, to, duration, easing);
        let _ = self
            .active
            .insert(TweenKey::scale(object), ActiveTween::Scale(tween));
    }

    /// Advance every tween by `dt` seconds, write the values into
    /// `objects`, and drop tweens that finished (after writing their exact
    /// end value). Tweens whose object index is out of range are dropped.
    pub fn step(&mut self, dt: f32, objects: &mut [VisualObject]) {
        self.active.retain(|key, tween| {
            objects
                .get_mut(key.object)
                .is_some_and(|obj| !tween.step(dt, obj))
        });
    }

    /// End value of the running color tween on `object`, if any.
    #[must_use]
    pub fn color_target(&self, object: usize) -> Option<Color> {
        match self.active.get(&TweenKey::color(object)) {
            Some(ActiveTween::Color(t)) => Some(t.to),
            _ => None,
        }
    }

    /// Whether `key` has a running tween.
    #[must_use]
    pub fn is_active(&self, key: TweenKey) -> bool {
        self.active.contains_key(&key)
    }

    /// Whether any tween is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no tween is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drop every running tween, leaving objects at their current values.
    pub fn cancel_all(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Material, ShapeKind};

    fn objects(n: usize) -> Vec<VisualObject> {
        (0..n)
            .map(|i| {
                VisualObject::new(
                    ShapeKind::Octahedron { radius: 1.0 },
                    Material {
                        color: Color::new(0.0, 0.0, 0.0),
                        roughness: 0.5,
                    },
                    Vec3::new(i as f32, 0.0, 0.0),
                )
            })
            .collect()
    }

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-6
            && (a.g - b.g).abs() < 1e-6
            && (a.b - b.b).abs() < 1e-6
    }

    #[test]
    fn linear_tween_hits_midpoint_and_end() {
        let mut t = Tween::new(0.0_f32, 10.0, 2.0, EasingFunction::Linear);
        assert_eq!(t.advance(1.0), 5.0);
        assert!(!t.is_complete());
        assert_eq!(t.advance(5.0), 10.0);
        assert!(t.is_complete());
    }

    #[test]
    fn zero_duration_completes_at_target() {
        let t = Tween::new(Vec3::ZERO, Vec3::ONE, 0.0, EasingFunction::Linear);
        assert!(t.is_complete());
        assert_eq!(t.value(), Vec3::ONE);
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut t = Tween::new(0.0_f32, 1.0, 1.0, EasingFunction::Linear);
        let _ = t.advance(0.5);
        assert_eq!(t.advance(-1.0), 0.5);
    }

    #[test]
    fn step_writes_and_drops_finished_tweens() {
        let mut objs = objects(2);
        let mut tweener = Tweener::new();
        let white = Color::new(1.0, 1.0, 1.0);
        tweener.color_to(0, objs[0].material.color, white, 1.0, EasingFunction::Linear);
        tweener.scale_to(1, Vec3::ZERO, Vec3::ONE, 1.0, EasingFunction::Linear);
        assert_eq!(tweener.len(), 2);

        tweener.step(0.5, &mut objs);
        assert!(close(objs[0].material.color, Color::new(0.5, 0.5, 0.5)));
        assert!((objs[1].scale - Vec3::splat(0.5)).length() < 1e-6);
        assert!(tweener.is_animating());

        tweener.step(10.0, &mut objs);
        assert_eq!(objs[0].material.color, white);
        assert_eq!(objs[1].scale, Vec3::ONE);
        assert!(!tweener.is_animating());
    }

    #[test]
    fn restarting_a_key_replaces_the_running_tween() {
        let mut objs = objects(1);
        let mut tweener = Tweener::new();
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);

        tweener.color_to(0, objs[0].material.color, red, 1.0, EasingFunction::QuadraticOut);
        tweener.step(0.3, &mut objs);
        let midway = objs[0].material.color;
        assert!(midway.r > 0.0 && midway.r < 1.0);

        tweener.color_to(0, midway, blue, 1.0, EasingFunction::QuadraticOut);
        assert_eq!(tweener.len(), 1);

        // First step after the restart starts from the interrupted value.
        tweener.step(0.0, &mut objs);
        assert!(close(objs[0].material.color, midway));

        tweener.step(1.0, &mut objs);
        assert_eq!(objs[0].material.color, blue);
        assert!(tweener.is_empty());
    }

    #[test]
    fn color_and_scale_on_one_object_are_independent() {
        let mut objs = objects(1);
        let mut tweener = Tweener::new();
        tweener.scale_to(0, Vec3::ZERO, Vec3::ONE, 1.0, EasingFunction::Linear);
        tweener.color_to(
            0,
            objs[0].material.color,
            Color::WHITE,
            2.0,
            EasingFunction::Linear,
        );
        tweener.step(1.0, &mut objs);
        assert!(!tweener.is_active(TweenKey::scale(0)));
        assert!(tweener.is_active(TweenKey::color(0)));
    }

    #[test]
    fn out_of_range_object_is_dropped() {
        let mut objs = objects(1);
        let mut tweener = Tweener::new();
        tweener.scale_to(5, Vec3::ZERO, Vec3::ONE, 1.0, EasingFunction::Linear);
        tweener.step(0.1, &mut objs);
        assert!(tweener.is_empty());
        assert_eq!(objs[0].scale, Vec3::ONE);
    }

    #[test]
    fn cancel_all_leaves_current_values() {
        let mut objs = objects(1);
        let mut tweener = Tweener::new();
        tweener.scale_to(0, Vec3::ZERO, Vec3::ONE, 1.0, EasingFunction::Linear);
        tweener.step(0.25, &mut objs);
        tweener.cancel_all();
        tweener.step(1.0, &mut objs);
        assert!((objs[0].scale - Vec3::splat(0.25)).length() < 1e-6);
    }
}
