//! Random point clouds (replay tokens for reproducibility).
//!
//! Purpose
//! - Deterministic inputs for tests, benches and the CLI runner.
//! - `Grid` draws small integer coordinates, so orientation tests are exact and
//!   collinear runs and duplicates are frequent.
//! - `Line` puts every point on one segment through the origin, with integer
//!   coordinates so the set is exactly collinear.
//!
//! Code cross-refs: `compute_convex_hull`, `check::monotone_chain`

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Shape the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointDist {
    /// Uniform in `[-half_width, half_width]²`.
    Square { half_width: f64 },
    /// Uniform in the disc of the given radius (area-uniform).
    Disc { radius: f64 },
    /// On the circle of the given radius; every point is a hull vertex.
    Circle { radius: f64 },
    /// Integer coordinates in `[0, side)²`.
    Grid { side: u32 },
    /// Integer multiples `t * d`, `|t| <= half_length`, of one random small
    /// direction `d`. Drawn once per call, so all points are collinear.
    Line { half_length: u32 },
}

impl Default for PointDist {
    fn default() -> Self {
        PointDist::Square { half_width: 1.0 }
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
        // SplitMix64 finalizer over (seed, index).
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

/// Draw `n` points from `dist`.
pub fn sample_points(dist: PointDist, n: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let dir = match dist {
        PointDist::Line { .. } => line_direction(&mut rng),
        _ => (0.0, 0.0),
    };
    (0..n).map(|_| sample_one(dist, dir, &mut rng)).collect()
}

/// Nonzero direction with integer components in `[-4, 4]`.
fn line_direction<R: Rng>(rng: &mut R) -> (f64, f64) {
    loop {
        let (dx, dy): (i32, i32) = (rng.gen_range(-4..=4), rng.gen_range(-4..=4));
        if (dx, dy) != (0, 0) {
            return (f64::from(dx), f64::from(dy));
        }
    }
}

fn sample_one<R: Rng>(dist: PointDist, dir: (f64, f64), rng: &mut R) -> Point {
    match dist {
        PointDist::Square { half_width } => {
            let h = half_width.abs();
            if h == 0.0 {
                return Point2::origin();
            }
            Point2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
        }
        PointDist::Disc { radius } => {
            let r = radius.abs() * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Point2::new(r * th.cos(), r * th.sin())
        }
        PointDist::Circle { radius } => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Point2::new(radius * th.cos(), radius * th.sin())
        }
        PointDist::Line { half_length } => {
            let h = i64::from(half_length);
            let t = rng.gen_range(-h..=h) as f64;
            Point2::new(t * dir.0, t * dir.1)
        }
        PointDist::Grid { side } => {
            let s = side.max(1);
            Point2::new(
                f64::from(rng.gen_range(0..s)),
                f64::from(rng.gen_range(0..s)),
            )
        }
    }
}
