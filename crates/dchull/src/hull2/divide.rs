//! Recursive divider: split at the midpoint, recurse, merge bottom-up.
//!
//! Input contract
//! - Non-empty, finite, in `sort_points` order. Exact duplicates are collapsed
//!   up front (they are adjacent after sorting), so every subproblem holds
//!   pairwise distinct points and each left half lies strictly west of its
//!   right half in lexicographic order.
//!
//! Code cross-refs: `tangent::{find_tangents, stitch}`, `observer::MergeObserver`

use super::error::HullError;
use super::observer::{MergeEvent, MergeObserver, NoopObserver};
use super::predicates::unsigned_zero;
use super::sort::is_sorted;
use super::tangent::{find_tangents, stitch};
use super::types::{Hull, Point, Tangents};

/// Hull of points already sorted by `sort_points`.
pub fn hull_of_sorted(points: &[Point]) -> Result<Hull, HullError> {
    hull_of_sorted_observed(points, &mut NoopObserver)
}

/// Same as `hull_of_sorted`, reporting every merge to `obs`.
pub fn hull_of_sorted_observed<O: MergeObserver + ?Sized>(
    points: &[Point],
    obs: &mut O,
) -> Result<Hull, HullError> {
    let pts = prepare_sorted(points)?;
    Ok(recurse(&pts, 0, obs))
}

/// Validate a sorted input, clear signed zeros and drop exact duplicates.
pub(crate) fn prepare_sorted(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if points.is_empty() {
        return Err(HullError::empty());
    }
    check_finite(points)?;
    if !is_sorted(points) {
        return Err(HullError::invalid("points are not sorted by (x, y)"));
    }
    let mut pts: Vec<Point> = points.iter().map(unsigned_zero).collect();
    pts.dedup();
    Ok(pts)
}

pub(crate) fn check_finite(points: &[Point]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(k) => Err(HullError::invalid(format!(
            "point {k} has a non-finite coordinate"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn recurse<O: MergeObserver + ?Sized>(
    pts: &[Point],
    depth: usize,
    obs: &mut O,
) -> Hull {
    if pts.len() == 1 {
        return Hull::point(pts[0]);
    }
    let mid = pts.len() / 2;
    let left = recurse(&pts[..mid], depth + 1, obs);
    let right = recurse(&pts[mid..], depth + 1, obs);
    obs.before_merge(&left, &right, depth);
    let (merged, tangents) = merge(&left, &right);
    obs.after_merge(&MergeEvent {
        left: &left,
        right: &right,
        tangents,
        merged: &merged,
        depth,
    });
    merged
}

/// Merge two separated hulls. Two single points short-circuit to a segment.
pub(crate) fn merge(left: &Hull, right: &Hull) -> (Hull, Option<Tangents>) {
    if let ([a], [b]) = (left.vertices(), right.vertices()) {
        return (Hull::segment(*a, *b), None);
    }
    let t = find_tangents(left, right);
    (stitch(left, right, &t), Some(t))
}

/// Parallel variant of `recurse`: halves of at least `min_len` points run on
/// the rayon pool and are joined before the merge.
#[cfg(feature = "parallel")]
pub(crate) fn recurse_par(pts: &[Point], min_len: usize) -> Hull {
    if pts.len() < min_len.max(2) {
        return recurse(pts, 0, &mut NoopObserver);
    }
    let mid = pts.len() / 2;
    let (left, right) = rayon::join(
        || recurse_par(&pts[..mid], min_len),
        || recurse_par(&pts[mid..], min_len),
    );
    merge(&left, &right).0
}
