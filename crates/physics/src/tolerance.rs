//! The single tolerance policy used by every geometric predicate in this crate.
//!
//! Comparisons against zero are relative: a quantity counts as zero when it is within [EPSILON] times the magnitude of
//! the values it was computed from, floored at an absolute [EPSILON] so that tiny shapes near the origin still
//! behave.
use crate::V2;

pub const EPSILON: f64 = 1e-9;

/// The tolerance to use for a quantity computed from values of the given magnitude.
pub fn scaled(magnitude: f64) -> f64 {
    EPSILON * magnitude.abs().max(1.0)
}

/// Is `value` zero, relative to `magnitude`?
pub fn is_zero(value: f64, magnitude: f64) -> bool {
    value.abs() <= scaled(magnitude)
}

/// The largest absolute coordinate among the given points, used to scale tolerances.
pub fn magnitude<'a>(points: impl IntoIterator<Item = &'a V2>) -> f64 {
    points
        .into_iter()
        .fold(0.0f64, |acc, p| acc.max(p.x.abs()).max(p.y.abs()))
}

/// Is this vector too short to have a direction?
///
/// The magnitude is taken from the points the vector was computed from, so that the difference of two large,
/// nearly-equal coordinates counts as zero.
pub fn is_zero_length(v: V2, p1: V2, p2: V2) -> bool {
    v.length() <= scaled(magnitude([&p1, &p2]))
}

/// Do two points coincide?
pub fn points_coincide(a: &V2, b: &V2) -> bool {
    is_zero_length(*a - *b, *a, *b)
}
