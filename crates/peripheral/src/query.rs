//! User queries: `point angle distance`.
//!
//! - `Query`: named fields (1-based ordinal, half-angle in degrees, max distance).
//! - `ValidQuery`: a query checked against a concrete `PointStore`; the only
//!   input the engine accepts.
//!
//! Rules, checked in this order (first failure wins):
//! 1. exactly three whitespace-separated tokens;
//! 2. every token parses as a real number `>= 0` (NaN fails);
//! 3. ordinal in `[1, store.len()]`;
//! 4. ordinal is a whole number;
//! 5. half-angle `<= 180` degrees;
//! 6. the source point has a facing direction.

use std::fmt;

use crate::geom2::{Cone, Direction};
use crate::store::{Point, PointStore};

/// Number of tokens in a query line.
pub const QUERY_ARITY: usize = 3;
/// Widest accepted half-angle, in degrees.
pub const MAX_HALF_ANGLE_DEG: f64 = 180.0;

/// A visibility query with named fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Query {
    /// 1-based position in the coordinate-sorted store.
    pub ordinal: usize,
    pub half_angle_deg: f64,
    pub max_distance: f64,
}

/// Rejection reasons; `Display` is the corrective message shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryError {
    TokenCount { got: usize },
    NotNonNegative,
    OrdinalOutOfRange { count: usize },
    OrdinalNotInteger,
    AngleTooWide,
    NoDirection { label: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::TokenCount { .. } => write!(f, "Usage: point angle distance"),
            QueryError::NotNonNegative => {
                write!(f, "Error: the inserted values must be positive integers")
            }
            QueryError::OrdinalOutOfRange { count } => {
                write!(f, "Error: Data Point number must be between 1 and {count}")
            }
            QueryError::OrdinalNotInteger => {
                write!(f, "Error: Data Point number must be a whole number")
            }
            QueryError::AngleTooWide => write!(
                f,
                "Error: the maximum value for the angle is {MAX_HALF_ANGLE_DEG} degrees"
            ),
            QueryError::NoDirection { label } => {
                write!(f, "Error: Data Point {label} has no facing direction")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// A non-negative real, or `None` (NaN and negatives included).
fn non_negative(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| *v >= 0.0)
}

impl Query {
    #[inline]
    pub fn new(ordinal: usize, half_angle_deg: f64, max_distance: f64) -> Self {
        Self {
            ordinal,
            half_angle_deg,
            max_distance,
        }
    }

    /// Parse and validate one input line against `store`.
    pub fn parse<'s>(line: &str, store: &'s PointStore) -> Result<ValidQuery<'s>, QueryError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != QUERY_ARITY {
            return Err(QueryError::TokenCount { got: tokens.len() });
        }
        let values: Vec<f64> = tokens
            .iter()
            .map(|t| non_negative(t))
            .collect::<Option<_>>()
            .ok_or(QueryError::NotNonNegative)?;
        let (ordinal, half_angle_deg, max_distance) = (values[0], values[1], values[2]);

        if ordinal < 1.0 || ordinal > store.len() as f64 {
            return Err(QueryError::OrdinalOutOfRange { count: store.len() });
        }
        if ordinal.fract() != 0.0 {
            return Err(QueryError::OrdinalNotInteger);
        }
        Query::new(ordinal as usize, half_angle_deg, max_distance).validate(store)
    }

    /// Check rules 2–6 for an already-typed query.
    pub fn validate(self, store: &PointStore) -> Result<ValidQuery<'_>, QueryError> {
        if !(self.half_angle_deg >= 0.0 && self.max_distance >= 0.0) {
            return Err(QueryError::NotNonNegative);
        }
        let source = store
            .get(self.ordinal)
            .ok_or(QueryError::OrdinalOutOfRange { count: store.len() })?;
        if self.half_angle_deg > MAX_HALF_ANGLE_DEG {
            return Err(QueryError::AngleTooWide);
        }
        let direction = source.direction.ok_or_else(|| QueryError::NoDirection {
            label: source.label.clone(),
        })?;
        Ok(ValidQuery {
            store,
            query: self,
            source,
            direction,
        })
    }
}

/// A query proven valid for `store`.
#[derive(Clone, Copy, Debug)]
pub struct ValidQuery<'s> {
    store: &'s PointStore,
    query: Query,
    source: &'s Point,
    direction: Direction,
}

impl<'s> ValidQuery<'s> {
    #[inline]
    pub fn store(&self) -> &'s PointStore {
        self.store
    }

    #[inline]
    pub fn query(&self) -> Query {
        self.query
    }

    #[inline]
    pub fn source(&self) -> &'s Point {
        self.source
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cone this query evaluates, in radians.
    #[inline]
    pub fn cone(&self) -> Cone {
        Cone::from_degrees(self.direction.radians(), self.query.half_angle_deg)
    }
}
