// easing/curves.rs
//
// Base easing formulas and the InOut/OutIn combinators.
// Every function is pure f32 math; no input is clamped.

use std::f32::consts::PI;

/// Back overshoot amount.
const BACK_S: f32 = 1.70158;

// ── Combinators ──────────────────────────────────────────────────────────

/// Ease in over the first half, ease out over the second.
///
/// Each half is rescaled to half of the output range. `t == 0.5` takes the
/// second branch.
#[inline]
pub fn in_out(in_fn: fn(f32) -> f32, out_fn: fn(f32) -> f32, t: f32) -> f32 {
    if t < 0.5 {
        in_fn(t * 2.0) * 0.5
    } else {
        out_fn(t * 2.0 - 1.0) * 0.5 + 0.5
    }
}

/// Ease out over the first half, ease in over the second.
#[inline]
pub fn out_in(out_fn: fn(f32) -> f32, in_fn: fn(f32) -> f32, t: f32) -> f32 {
    if t < 0.5 {
        out_fn(t * 2.0) * 0.5
    } else {
        in_fn(t * 2.0 - 1.0) * 0.5 + 0.5
    }
}

// ── Circ ─────────────────────────────────────────────────────────────────

/// `1 - sqrt(1 - t²)`. NaN outside [-1, 1].
#[inline]
pub fn in_circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

#[inline]
pub fn out_circ(t: f32) -> f32 {
    (1.0 - (t - 1.0) * (t - 1.0)).sqrt()
}

// ── Cubic ────────────────────────────────────────────────────────────────

#[inline]
pub fn in_cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
pub fn out_cubic(t: f32) -> f32 {
    (t - 1.0) * (t - 1.0) * (t - 1.0) + 1.0
}

// ── Back (overshoot) ─────────────────────────────────────────────────────

#[inline]
pub fn in_back(t: f32) -> f32 {
    t * t * ((BACK_S + 1.0) * t - BACK_S)
}

#[inline]
pub fn out_back(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * ((BACK_S + 1.0) * t + BACK_S) + 1.0
}

// ── Quint ────────────────────────────────────────────────────────────────

#[inline]
pub fn in_quint(t: f32) -> f32 {
    t * t * t * t * t
}

#[inline]
pub fn out_quint(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

// ── Expo ─────────────────────────────────────────────────────────────────

/// Exactly 0 at `t == 0`.
#[inline]
pub fn in_expo(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * (t - 1.0))
    }
}

/// Exactly 1 at `t == 1`.
#[inline]
pub fn out_expo(t: f32) -> f32 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

// ── Sine ─────────────────────────────────────────────────────────────────

#[inline]
pub fn in_sine(t: f32) -> f32 {
    1.0 - (t * PI * 0.5).cos()
}

#[inline]
pub fn out_sine(t: f32) -> f32 {
    (t * PI * 0.5).sin()
}

// ── Bounce ───────────────────────────────────────────────────────────────

#[inline]
pub fn in_bounce(t: f32) -> f32 {
    1.0 - out_bounce(1.0 - t)
}

/// Four parabolic segments, each landing a little higher than the last.
#[inline]
pub fn out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

// ── Quad ─────────────────────────────────────────────────────────────────

#[inline]
pub fn in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
pub fn out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Closed form; not built from `in_out`.
#[inline]
pub fn in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powf(2.0) * 0.5
    }
}

// ── Quart ────────────────────────────────────────────────────────────────

#[inline]
pub fn in_quart(t: f32) -> f32 {
    t * t * t * t
}

#[inline]
pub fn out_quart(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

/// Closed form; not built from `in_out`.
#[inline]
pub fn in_out_quart(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powf(4.0) * 0.5
    }
}

// ── Elastic ──────────────────────────────────────────────────────────────

#[inline]
pub fn in_elastic(t: f32) -> f32 {
    const C: f32 = 2.0 * PI / 3.0;
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        -2.0_f32.powf(10.0 * t - 10.0) * ((t * 10.0 - 10.75) * C).sin()
    }
}

#[inline]
pub fn out_elastic(t: f32) -> f32 {
    const C: f32 = 2.0 * PI / 3.0;
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C).sin() + 1.0
    }
}

/// Closed form with a longer period (`2π / 4.5`); not built from `in_out`.
#[inline]
pub fn in_out_elastic(t: f32) -> f32 {
    const C: f32 = 2.0 * PI / 4.5;
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }

    let t = t * 2.0;
    if t < 1.0 {
        -0.5 * 2.0_f32.powf(10.0 * (t - 1.0)) * ((t * 10.0 - 10.75) * C).sin()
    } else {
        2.0_f32.powf(-10.0 * (t - 1.0)) * ((t * 10.0 - 10.75) * C).sin() * 0.5 + 1.0
    }
}
