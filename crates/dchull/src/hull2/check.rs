//! Independent checks for computed hulls.
//!
//! - `monotone_chain`: Andrew's algorithm, used as an oracle.
//! - `is_convex_ccw`, `contains_all`: structural properties.
//! - `same_cycle`: rotation-insensitive equality of vertex cycles.

use super::predicates::{lex_cmp, orient, unsigned_zero};
use super::types::{Hull, Point};

/// Andrew’s monotone chain convex hull (CCW, strictly convex, lex-min first).
/// Returns `None` for empty input.
pub fn monotone_chain(points: &[Point]) -> Option<Hull> {
    if points.is_empty() {
        return None;
    }
    let mut pts: Vec<Point> = points.iter().map(unsigned_zero).collect();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return Some(Hull::from_ccw(pts));
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && orient(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && orient(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(Hull::from_ccw(hull))
}

/// Every consecutive triple turns strictly left and all vertices are distinct.
/// Degenerate hulls (1 or 2 distinct vertices) pass trivially.
pub fn is_convex_ccw(hull: &Hull) -> bool {
    let v = hull.vertices();
    match v.len() {
        0 => false,
        1 => true,
        2 => v[0] != v[1],
        n => (0..n).all(|k| {
            let a = &v[k];
            let b = &v[hull.next(k)];
            let c = &v[hull.next(hull.next(k))];
            orient(a, b, c) > 0.0
        }),
    }
}

/// Every point lies on or inside `hull`.
pub fn contains_all(hull: &Hull, points: &[Point]) -> bool {
    points.iter().all(|p| hull.contains(p))
}

/// Same cyclic sequence up to rotation (winding must match).
pub fn same_cycle(a: &Hull, b: &Hull) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let (av, bv) = (a.vertices(), b.vertices());
    match bv.iter().position(|p| *p == av[0]) {
        Some(off) => (0..av.len()).all(|k| av[k] == bv[(k + off) % bv.len()]),
        None => false,
    }
}
