//! Core 2D hull types.
//!
//! - `Point`: exact `(x, y)` coordinate pair (`nalgebra::Point2<f64>`).
//! - `Hull`: owned cyclic vertex sequence, counter-clockwise.
//! - `Tangent`, `Tangents`: vertex index pairs discovered during a merge.
//! - `HullCfg`: knobs for the recursive driver.
//!
//! Code cross-refs: `predicates::{orient, lex_cmp}`, `tangent::find_tangents`,
//! `divide::hull_of_sorted`

use nalgebra::Point2;

use super::predicates::{lex_cmp, orient};

/// Input coordinate pair. Compared exactly, without tolerance.
pub type Point = Point2<f64>;

/// Convex polygon boundary listed counter-clockwise.
///
/// Invariants:
/// - At least one vertex; vertices pairwise distinct.
/// - Size 1 is a point, size 2 a segment (both degenerate but valid).
/// - Size ≥ 3 is strictly convex: every consecutive triple turns left.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    verts: Vec<Point>,
}

impl Hull {
    /// Degenerate hull of a single point.
    #[inline]
    pub fn point(p: Point) -> Self {
        Self { verts: vec![p] }
    }

    /// Degenerate hull of two distinct points.
    #[inline]
    pub fn segment(a: Point, b: Point) -> Self {
        debug_assert!(a != b, "segment endpoints must differ");
        Self { verts: vec![a, b] }
    }

    /// Wrap a vertex list that already satisfies the invariants.
    pub(crate) fn from_ccw(verts: Vec<Point>) -> Self {
        debug_assert!(!verts.is_empty(), "hull must have a vertex");
        Self { verts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false for a constructed hull; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.verts
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Point> {
        self.verts.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.verts.iter()
    }

    /// Successor of vertex `i` in winding order (wraps around).
    ///
    /// This pair (`next`/`prev`) is the only place cyclic index arithmetic
    /// happens; callers never reduce indices modulo `len` themselves.
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        if i + 1 == self.verts.len() {
            0
        } else {
            i + 1
        }
    }

    /// Predecessor of vertex `i` in winding order (wraps around).
    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        if i == 0 {
            self.verts.len() - 1
        } else {
            i - 1
        }
    }

    /// Boundary edges `(v_k, v_{k+1})`, closing back to the first vertex.
    /// A point hull yields one zero-length edge; a segment yields both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..self.verts.len()).map(move |k| (self.verts[k], self.verts[self.next(k)]))
    }

    /// Index of the lexicographically smallest vertex (min x, then min y).
    pub fn lex_min_index(&self) -> usize {
        extreme_index(&self.verts, |a, b| lex_cmp(a, b).is_lt())
    }

    /// Index of the lexicographically greatest vertex (max x, then max y).
    pub fn lex_max_index(&self) -> usize {
        extreme_index(&self.verts, |a, b| lex_cmp(a, b).is_gt())
    }

    /// Same cycle, rotated so that it starts at the lexicographically smallest vertex.
    pub fn rotated_to_lex_min(mut self) -> Self {
        let k = self.lex_min_index();
        self.verts.rotate_left(k);
        self
    }

    /// Enclosed area (shoelace). Zero for degenerate hulls.
    pub fn area(&self) -> f64 {
        if self.verts.len() < 3 {
            return 0.0;
        }
        let twice: f64 = self
            .edges()
            .map(|(p, q)| p.x * q.y - q.x * p.y)
            .sum();
        0.5 * twice
    }

    /// Boundary length. A segment counts both directions (closed curve).
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(p, q)| (q - p).norm()).sum()
    }

    /// Boundary-inclusive membership using exact orientation signs.
    pub fn contains(&self, p: &Point) -> bool {
        match self.verts.as_slice() {
            [] => false,
            [a] => a == p,
            [a, b] => {
                orient(a, b, p) == 0.0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            }
            _ => self.edges().all(|(a, b)| orient(&a, &b, p) >= 0.0),
        }
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.verts.iter()
    }
}

fn extreme_index(verts: &[Point], better: impl Fn(&Point, &Point) -> bool) -> usize {
    let mut best = 0usize;
    for (k, v) in verts.iter().enumerate().skip(1) {
        if better(v, &verts[best]) {
            best = k;
        }
    }
    best
}

/// Line touching both hulls: vertex `left` of the left hull, vertex `right` of the right hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub left: usize,
    pub right: usize,
}

/// Upper and lower tangent of one merge step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangents {
    pub upper: Tangent,
    pub lower: Tangent,
}

/// Driver configuration.
///
/// `parallel` only takes effect when the crate is built with the `parallel`
/// feature; otherwise the recursion is always sequential.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Evaluate the two recursive halves concurrently (rayon::join).
    pub parallel: bool,
    /// Subproblems smaller than this recurse sequentially even when `parallel` is set.
    pub par_min_len: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            parallel: false,
            par_min_len: 4096,
        }
    }
}

impl HullCfg {
    /// Default tuning with parallel recursion enabled.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }
}
