use std::cmp::Ordering;

use super::types::Point;

/// Twice the signed area of triangle `(a, b, c)`.
/// Positive if `c` lies left of the directed line `a → b` (counter-clockwise turn),
/// negative if right, zero if collinear.
#[inline]
pub fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Lexicographic order on `(x, y)` using IEEE total ordering.
///
/// `-0.0` and `0.0` compare equal: they are the same coordinate, and the
/// divider needs every prefix to lie geometrically west of its suffix.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    let (a, b) = (unsigned_zero(a), unsigned_zero(b));
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Same point with any `-0.0` coordinate replaced by `0.0`.
#[inline]
pub(crate) fn unsigned_zero(p: &Point) -> Point {
    Point::new(p.x + 0.0, p.y + 0.0)
}

/// For `c` collinear with `a` and `b`: true if `c` lies on the far side of `a`,
/// pointing away from `b`.
#[inline]
pub(crate) fn beyond(a: &Point, b: &Point, c: &Point) -> bool {
    (c - a).dot(&(b - a)) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orient_signs() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert!(orient(&a, &b, &Point::new(0.5, 1.0)) > 0.0);
        assert!(orient(&a, &b, &Point::new(0.5, -1.0)) < 0.0);
        assert_eq!(orient(&a, &b, &Point::new(7.0, 0.0)), 0.0);
        // vertical line: no division involved
        let up = Point::new(0.0, 3.0);
        assert!(orient(&a, &up, &Point::new(-1.0, 1.0)) > 0.0);
    }

    #[test]
    fn lex_breaks_x_ties_by_y() {
        let p = Point::new(1.0, 0.0);
        let q = Point::new(1.0, 2.0);
        assert_eq!(lex_cmp(&p, &q), Ordering::Less);
        assert_eq!(lex_cmp(&q, &p), Ordering::Greater);
        assert_eq!(lex_cmp(&p, &p), Ordering::Equal);
        assert_eq!(lex_cmp(&Point::new(0.0, 9.0), &q), Ordering::Less);
    }

    #[test]
    fn signed_zeros_compare_equal() {
        let neg = Point::new(-0.0, 5.0);
        assert_eq!(lex_cmp(&neg, &Point::new(0.0, 5.0)), Ordering::Equal);
        assert_eq!(lex_cmp(&neg, &Point::new(0.0, 0.0)), Ordering::Greater);
        assert_eq!(lex_cmp(&Point::new(1.0, -0.0), &Point::new(1.0, 0.0)), Ordering::Equal);
        assert!(unsigned_zero(&neg).x.is_sign_positive());
    }

    #[test]
    fn beyond_on_a_line() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(3.0, 0.0);
        assert!(beyond(&a, &b, &Point::new(0.0, 0.0)));
        assert!(!beyond(&a, &b, &Point::new(2.0, 0.0)));
        assert!(!beyond(&a, &b, &a));
    }
}
