//! 2D angular geometry for the visibility filter.
//!
//! Purpose
//! - Provide the small set of primitives the engine needs: Euclidean
//!   distance, bearing via `atan2`, normalization into [0, 2π), and a
//!   symmetric cone test around a facing direction.
//!
//! Conventions
//! - Angles are radians, measured counterclockwise from +x.
//! - Facing directions and normalized bearings live in [0, 2π).
//! - The cone interval is compared as-is, without wrapping modulo 2π
//!   (see `cone::in_cone`).
//!
//! Code cross-refs: `store::Point`, `visibility::visible_points`

mod cone;
mod types;
mod util;

pub use cone::{in_cone, Cone};
pub use types::{Direction, ParseDirectionError};
pub use util::{bearing_angle, distance, normalize_angle};
