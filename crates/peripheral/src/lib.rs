//! Peripheral-cone visibility over labeled 2D points.
//!
//! Layout
//! - `geom2`: distance/bearing/angle primitives, cardinal `Direction`, and the
//!   cone membership predicate.
//! - `store`: immutable, coordinate-sorted `PointStore`.
//! - `query`: parsing and validation of user queries into `ValidQuery`.
//! - `visibility`: the engine that filters a store through a query.
//! - `rand`: seeded random scenes for property tests and benchmarks.
//!
//! API Policy
//! - This crate backs the `peripheral` CLI. There is no stable public API;
//!   prefer the `prelude` re-exports in callers.

pub mod geom2;
pub mod query;
pub mod rand;
pub mod store;
pub mod visibility;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Cone, Direction};
pub use nalgebra::Vector2 as Vec2;
pub use query::{Query, QueryError, ValidQuery};
pub use store::{Point, PointStore, StoreError};
pub use visibility::{visible_points, VisibilityResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        bearing_angle, distance, in_cone, normalize_angle, Cone, Direction,
    };
    pub use crate::query::{Query, QueryError, ValidQuery};
    pub use crate::rand::{draw_scene, ReplayToken, SceneCfg};
    pub use crate::store::{Point, PointStore, StoreError};
    pub use crate::visibility::{visible_points, VisibilityResult};
    pub use nalgebra::Vector2 as Vec2;
}
