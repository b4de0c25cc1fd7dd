use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

/// Euclidean distance `|b - a|`.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Angle of the vector `to - from` via `atan2`, in (−π, π].
///
/// Coincident points give 0.
#[inline]
pub fn bearing_angle(from: Vector2<f64>, to: Vector2<f64>) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Map an angle into [0, 2π).
///
/// Inputs in [−π, π] (every `bearing_angle`) are shifted by a single `+2π`
/// when negative; a negative input within one ulp of 0 therefore lands on
/// 2π itself. Other reals are reduced with `rem_euclid`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    if (-PI..=PI).contains(&angle) {
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    } else {
        angle.rem_euclid(TAU)
    }
}
