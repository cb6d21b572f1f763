//! Sorter: orders points west to east before recursion.
//!
//! Ties on x are broken by y, so for distinct points every prefix of the
//! sorted sequence is strictly separable from its suffix by a (slightly
//! tilted) vertical line. The merge step relies on that separation.

use super::error::HullError;
use super::predicates::lex_cmp;
use super::types::Point;

/// Copy and sort points by ascending x, then ascending y (stable).
pub fn sort_points(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if points.is_empty() {
        return Err(HullError::empty());
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(lex_cmp);
    Ok(sorted)
}

/// True if `points` is in the order produced by `sort_points`.
pub fn is_sorted(points: &[Point]) -> bool {
    points.windows(2).all(|w| lex_cmp(&w[0], &w[1]).is_le())
}
