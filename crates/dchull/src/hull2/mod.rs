//! Divide-and-conquer convex hull in 2D.
//!
//! Purpose
//! - Compute the counter-clockwise, strictly convex hull of a finite point set
//!   in O(n log n): sort by x, split at the midpoint, recurse, and merge two
//!   separated hulls along their upper and lower tangents.
//! - Keep the core pure. Visualization hooks are injected observers; nothing
//!   global, nothing timed.
//!
//! Numerics
//! - Orientation signs (cross products) only; no slopes, no division.
//! - Exact coordinate equality; duplicates collapse, collinear runs keep their
//!   two outer points.
//!
//! Code cross-refs: `sort::sort_points`, `divide::hull_of_sorted`,
//! `tangent::find_tangents`, `driver::compute_convex_hull`

pub mod check;
mod divide;
mod driver;
mod error;
pub mod observer;
mod predicates;
pub mod rand;
mod sort;
mod tangent;
mod types;

pub use divide::{hull_of_sorted, hull_of_sorted_observed};
pub use driver::{compute_convex_hull, compute_convex_hull_observed, compute_convex_hull_with};
pub use error::HullError;
pub use observer::{MergeEvent, MergeObserver, MergeRecord, MergeRecorder, NoopObserver};
pub use predicates::{lex_cmp, orient};
pub use sort::{is_sorted, sort_points};
pub use tangent::{find_tangents, lower_tangent, stitch, upper_tangent};
pub use types::{Hull, HullCfg, Point, Tangent, Tangents};

#[cfg(test)]
mod tests;
