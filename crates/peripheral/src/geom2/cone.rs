//! Symmetric angular cone around a facing direction.
//!
//! The cone `[direction − h, direction + h]` is compared against normalized
//! bearings WITHOUT wrapping modulo 2π. For a facing direction near 0 (East)
//! a bearing just under 2π is geometrically inside a wide cone but tests
//! false here; likewise for South/West cones whose upper end passes 2π.
//! Both ends are inclusive.

use std::f64::consts::{PI, TAU};

/// Inclusive, unwrapped cone test.
///
/// Pre: `source_direction`, `target_angle` in [0, 2π); `0 <= half_angle <= π`.
#[inline]
pub fn in_cone(source_direction: f64, half_angle: f64, target_angle: f64) -> bool {
    target_angle <= source_direction + half_angle && target_angle >= source_direction - half_angle
}

/// A cone of vision: facing angle plus half-width, both in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    pub direction: f64,
    pub half_angle: f64,
}

impl Cone {
    #[inline]
    pub fn new(direction: f64, half_angle: f64) -> Self {
        debug_assert!((0.0..TAU).contains(&direction), "direction not normalized");
        debug_assert!((0.0..=PI).contains(&half_angle), "half-angle out of range");
        Self {
            direction,
            half_angle,
        }
    }

    /// Build from a half-angle given in degrees.
    #[inline]
    pub fn from_degrees(direction: f64, half_angle_deg: f64) -> Self {
        Self::new(direction, half_angle_deg.to_radians())
    }

    /// `in_cone` against this cone; `target_angle` must be normalized.
    #[inline]
    pub fn contains(&self, target_angle: f64) -> bool {
        in_cone(self.direction, self.half_angle, target_angle)
    }

    /// Lower and upper bound of the unwrapped interval.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (
            self.direction - self.half_angle,
            self.direction + self.half_angle,
        )
    }

    /// True if the unwrapped interval leaves [0, 2π), i.e. part of the
    /// geometric cone is unreachable by normalized bearings.
    ///
    /// An upper bound of exactly 2π counts: bearing 0 normalizes to 0, not 2π.
    #[inline]
    pub fn is_seam_clipped(&self) -> bool {
        let (lo, hi) = self.bounds();
        lo < 0.0 || hi >= TAU
    }
}
