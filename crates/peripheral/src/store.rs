//! Labeled points and the immutable, coordinate-sorted point store.
//!
//! Invariants:
//! - Points are sorted ascending by (x, then y); ties keep insertion order.
//! - Labels are unique.
//! - Coordinates are finite.
//!
//! Ordinals handed to users are 1-based positions in this sorted order, not
//! the order rows were loaded in.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::geom2::Direction;

/// A labeled 2D point with an optional facing direction.
///
/// The direction only matters when the point is used as an observer.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub label: String,
    pub pos: Vector2<f64>,
    pub direction: Option<Direction>,
}

impl Point {
    #[inline]
    pub fn new(label: impl Into<String>, x: f64, y: f64, direction: Option<Direction>) -> Self {
        Self {
            label: label.into(),
            pos: Vector2::new(x, y),
            direction,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Ascending by x, then y.
#[inline]
pub fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    match a.pos.x.partial_cmp(&b.pos.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Errors surfaced while building a `PointStore`.
#[derive(Debug, PartialEq)]
pub enum StoreError {
    /// Two rows share a label.
    DuplicateLabel { label: String },
    /// A coordinate is NaN or infinite.
    NonFinite { label: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateLabel { label } => {
                write!(f, "label {label:?} appears more than once")
            }
            StoreError::NonFinite { label } => {
                write!(f, "point {label:?} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Immutable point collection, sorted by (x, then y).
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Validate and sort. Input order is irrelevant.
    pub fn new(mut points: Vec<Point>) -> Result<Self, StoreError> {
        {
            let mut seen = HashSet::with_capacity(points.len());
            for p in &points {
                if !(p.pos.x.is_finite() && p.pos.y.is_finite()) {
                    return Err(StoreError::NonFinite {
                        label: p.label.clone(),
                    });
                }
                if !seen.insert(p.label.as_str()) {
                    return Err(StoreError::DuplicateLabel {
                        label: p.label.clone(),
                    });
                }
            }
        }
        // Stable: equal coordinates keep load order.
        points.sort_by(cmp_xy);
        Ok(Self { points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at 1-based `ordinal`; `None` outside `[1, len]`.
    #[inline]
    pub fn get(&self, ordinal: usize) -> Option<&Point> {
        ordinal.checked_sub(1).and_then(|i| self.points.get(i))
    }

    /// `(max x, max y)` over all points, or `None` when empty.
    pub fn max_xy(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold((first.x(), first.y()), |(mx, my), p| {
            (mx.max(p.x()), my.max(p.y()))
        }))
    }
}
