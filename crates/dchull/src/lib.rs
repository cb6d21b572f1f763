//! Divide-and-conquer convex hulls of planar point sets.
//!
//! Entry point: [`compute_convex_hull`]. The algorithm sorts the points by x,
//! splits at the midpoint, recurses to single points, and merges sibling hulls
//! along their upper and lower tangents. Hulls are counter-clockwise and start
//! at their lexicographically smallest vertex.
//!
//! API Policy
//! - `hull2` holds everything; the crate root re-exports the common surface.
//! - Validation helpers (`hull2::check`) and samplers (`hull2::rand`) are public
//!   because the CLI and benches use them.

pub mod hull2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull2::{
    compute_convex_hull, compute_convex_hull_observed, compute_convex_hull_with, find_tangents,
    hull_of_sorted, sort_points, Hull, HullCfg, HullError, MergeEvent, MergeObserver, Point,
    Tangent, Tangents,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull2::check::{contains_all, is_convex_ccw, monotone_chain, same_cycle};
    pub use crate::hull2::rand::{sample_points, PointDist, ReplayToken};
    pub use crate::hull2::{
        compute_convex_hull, compute_convex_hull_observed, compute_convex_hull_with, Hull,
        HullCfg, HullError, MergeEvent, MergeObserver, MergeRecorder, NoopObserver, Point,
    };
}

