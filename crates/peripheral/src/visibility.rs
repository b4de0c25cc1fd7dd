//! Visibility engine: filter a point store through a validated query.
//!
//! A target is visible iff
//! - it is not structurally equal to the source, and
//! - `distance(source, target) <= max_distance`, and
//! - its normalized bearing from the source lies in the (unwrapped,
//!   inclusive) cone around the source's facing direction.
//!
//! Pure and linear in the number of points; safe to call repeatedly or from
//! several threads on shared inputs.

use crate::geom2::{bearing_angle, distance, normalize_angle, Cone};
use crate::query::ValidQuery;
use crate::store::{cmp_xy, Point};

/// Visible points sorted by (x, then y), plus what produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityResult {
    pub source: Point,
    pub cone: Cone,
    pub max_distance: f64,
    pub visible: Vec<Point>,
}

impl VisibilityResult {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[inline]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(|p| p.label.as_str())
    }
}

/// Single-target predicate used by `visible_points`.
#[inline]
pub fn is_visible(source: &Point, cone: Cone, max_distance: f64, target: &Point) -> bool {
    let bearing = normalize_angle(bearing_angle(source.pos, target.pos));
    distance(source.pos, target.pos) <= max_distance && cone.contains(bearing)
}

/// Run `query` over its store.
pub fn visible_points(query: &ValidQuery<'_>) -> VisibilityResult {
    let source = query.source();
    let cone = query.cone();
    let max_distance = query.query().max_distance;

    // Exclusion compares whole rows, not positions.
    let mut visible: Vec<Point> = query
        .store()
        .points()
        .iter()
        .filter(|p| *p != source)
        .filter(|p| is_visible(source, cone, max_distance, p))
        .cloned()
        .collect();
    visible.sort_by(cmp_xy);

    VisibilityResult {
        source: source.clone(),
        cone,
        max_distance,
        visible,
    }
}
