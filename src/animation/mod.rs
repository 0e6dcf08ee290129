//! Tween system for color and scale transitions.
//!
//! The render loop owns a [`Tweener`] and steps it once per frame with the
//! frame's wall-clock delta, so transitions take the same time at any
//! refresh rate.

pub mod easing;
pub mod tween;

pub use easing::EasingFunction;
pub use tween::{Lerp, Tween, TweenKey, TweenProperty, Tweener};
