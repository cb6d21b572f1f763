//! Tangent merger: upper/lower tangents of two separated convex hulls.
//!
//! Preconditions (checked in debug builds only)
//! - Both hulls are counter-clockwise and convex.
//! - Every vertex of `left` is lexicographically smaller than every vertex of `right`.
//!
//! Search
//! - Start from the lexicographically extreme vertices facing each other.
//! - Upper: advance `i` forward on `left` and `j` backward on `right` while the
//!   candidate vertex lies strictly left of the current line `left[i] → right[j]`.
//! - Lower: mirror (`i` backward, `j` forward, strictly right).
//! - Alternate both sides until one full pass moves neither index.
//!
//! Degeneracies
//! - All comparisons are orientation signs; there is no slope or division, so
//!   vertical tangents are ordinary.
//! - A candidate exactly on the line is adopted only if it lies beyond the
//!   current endpoint, away from the other hull. The merged boundary then keeps
//!   only the outermost of a collinear run, preserving strict convexity.
//! - A candidate equal to the current endpoint (size-1 hull) is never adopted.

use super::predicates::{beyond, lex_cmp, orient};
use super::types::{Hull, Point, Tangent, Tangents};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chain {
    Upper,
    Lower,
}

/// Both tangents of one merge step.
pub fn find_tangents(left: &Hull, right: &Hull) -> Tangents {
    debug_assert!(separated(left, right), "left hull must lie west of right hull");
    Tangents {
        upper: upper_tangent(left, right),
        lower: lower_tangent(left, right),
    }
}

/// Line touching both hulls with every vertex on or below it.
pub fn upper_tangent(left: &Hull, right: &Hull) -> Tangent {
    walk(left, right, Chain::Upper)
}

/// Line touching both hulls with every vertex on or above it.
pub fn lower_tangent(left: &Hull, right: &Hull) -> Tangent {
    walk(left, right, Chain::Lower)
}

fn walk(left: &Hull, right: &Hull, chain: Chain) -> Tangent {
    walk_by(left, right, chain, improves)
}

type Improves = fn(&Point, &Point, &Point, Moving, Chain) -> bool;

/// Tangent walk with the step test supplied by the caller.
///
/// Stops after `2 * (n + m) + 2` adopted steps even if the test keeps
/// accepting candidates (float orientation signs are not always consistent
/// on near-collinear input).
fn walk_by(left: &Hull, right: &Hull, chain: Chain, improves: Improves) -> Tangent {
    let (step_left, step_right): (fn(&Hull, usize) -> usize, fn(&Hull, usize) -> usize) =
        match chain {
            Chain::Upper => (Hull::next, Hull::prev),
            Chain::Lower => (Hull::prev, Hull::next),
        };
    let lv = left.vertices();
    let rv = right.vertices();
    let mut i = left.lex_max_index();
    let mut j = right.lex_min_index();

    // Each adopted step shrinks the set of candidate positions; a convex pair
    // never needs more than one lap per side.
    let budget = 2 * (lv.len() + rv.len()) + 2;
    let mut steps = 0usize;
    'search: loop {
        let mut moved = false;
        loop {
            let cand = step_left(left, i);
            if !improves(&lv[i], &rv[j], &lv[cand], Moving::Left, chain) {
                break;
            }
            i = cand;
            moved = true;
            steps += 1;
            if steps > budget {
                break 'search;
            }
        }
        loop {
            let cand = step_right(right, j);
            if !improves(&lv[i], &rv[j], &rv[cand], Moving::Right, chain) {
                break;
            }
            j = cand;
            moved = true;
            steps += 1;
            if steps > budget {
                break 'search;
            }
        }
        if !moved {
            return Tangent { left: i, right: j };
        }
    }
    tracing::warn!(
        ?chain,
        left = lv.len(),
        right = rv.len(),
        steps,
        "tangent search hit its step bound"
    );
    Tangent { left: i, right: j }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Moving {
    Left,
    Right,
}

/// Does candidate `c` replace the moving endpoint of line `a → b`?
fn improves(a: &Point, b: &Point, c: &Point, moving: Moving, chain: Chain) -> bool {
    let o = orient(a, b, c);
    let o = match chain {
        Chain::Upper => o,
        Chain::Lower => -o,
    };
    if o > 0.0 {
        return true;
    }
    if o < 0.0 {
        return false;
    }
    match moving {
        Moving::Left => beyond(a, b, c),
        Moving::Right => beyond(b, a, c),
    }
}

fn separated(left: &Hull, right: &Hull) -> bool {
    let lmax = &left.vertices()[left.lex_max_index()];
    let rmin = &right.vertices()[right.lex_min_index()];
    lex_cmp(lmax, rmin).is_lt()
}

/// Stitch two hulls along their tangents (counter-clockwise result).
///
/// Walks `right` forward from the lower to the upper tangent vertex, then
/// `left` forward from the upper to the lower tangent vertex.
pub fn stitch(left: &Hull, right: &Hull, t: &Tangents) -> Hull {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut k = t.lower.right;
    out.push(right.vertices()[k]);
    while k != t.upper.right {
        k = right.next(k);
        out.push(right.vertices()[k]);
    }
    let mut k = t.upper.left;
    out.push(left.vertices()[k]);
    while k != t.lower.left {
        k = left.next(k);
        out.push(left.vertices()[k]);
    }
    Hull::from_ccw(out)
}
