// interp.rs
//
// Interpolation helpers for consumers of the easing curves.
// Interpolation is unclamped so overshooting curves carry through.

use glam::{Quat, Vec2, Vec3};

use crate::easing::{evaluate, EaseType};

/// Linearly interpolate between two values. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values. `t` is not clamped.
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values. `t` is not clamped.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Where `value` sits between `a` and `b`, clamped to [0, 1].
/// Returns 0 for an empty range.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        0.0
    } else {
        ((value - a) / (b - a)).clamp(0.0, 1.0)
    }
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, ease_type: EaseType) -> f32 {
    lerp(a, b, evaluate(t, ease_type))
}

/// Interpolate Vec2 with easing.
#[inline]
pub fn ease_vec2(a: Vec2, b: Vec2, t: f32, ease_type: EaseType) -> Vec2 {
    lerp_vec2(a, b, evaluate(t, ease_type))
}

/// Rotate from `a` towards `b` with easing.
///
/// Normalized lerp along the shorter arc; the eased value is not clamped.
#[inline]
pub fn ease_quat(a: Quat, b: Quat, t: f32, ease_type: EaseType) -> Quat {
    a.lerp(b, evaluate(t, ease_type))
}
