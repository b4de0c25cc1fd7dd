//! Seeded random scenes (uniform points in a box + random facings).
//!
//! Purpose
//! - Reproducible inputs for property tests and benchmarks. A replay token
//!   `(seed, index)` is mixed into a single RNG so scenes can be indexed.
//!
//! Model
//! - `count` points with x, y uniform in `[0, extent)`, labels `"1"..="count"`
//!   in draw order, and a facing direction drawn uniformly from the four
//!   cardinal points (every point can act as a source).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Direction;
use crate::store::{Point, PointStore};

/// Scene sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub count: usize,
    /// Side length of the square the points are drawn from.
    pub extent: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            count: 25,
            extent: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random scene. Labels are unique and coordinates finite, so the
/// store always builds.
pub fn draw_scene(cfg: SceneCfg, tok: ReplayToken) -> PointStore {
    let mut rng = tok.to_std_rng();
    let extent = cfg.extent.max(1e-9);
    let points = (1..=cfg.count)
        .map(|k| {
            let pos = Vector2::new(rng.gen::<f64>() * extent, rng.gen::<f64>() * extent);
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            Point {
                label: k.to_string(),
                pos,
                direction: Some(direction),
            }
        })
        .collect();
    PointStore::new(points).unwrap_or_default()
}
