//! Cardinal facing directions.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

/// Facing direction of an observer, one of the four cardinal points.
///
/// Invariants:
/// - `radians()` is a canonical constant in [0, 2π).
/// - Names parse case-sensitively (`"East"`, not `"east"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Canonical angle: East=0, North=π/2, West=π, South=3π/2.
    #[inline]
    pub fn radians(self) -> f64 {
        match self {
            Direction::East => 0.0,
            Direction::North => FRAC_PI_2,
            Direction::West => PI,
            Direction::South => 3.0 * FRAC_PI_2,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::North => "North",
            Direction::West => "West",
            Direction::South => "South",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown direction name (holds the offending text).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction {:?} (expected one of East, North, West, South)",
            self.0
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}
