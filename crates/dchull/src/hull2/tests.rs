use super::check::{contains_all, is_convex_ccw, monotone_chain, same_cycle};
use super::rand::{sample_points, PointDist, ReplayToken};
use super::*;
use proptest::prelude::*;

fn pts(v: &[(f64, f64)]) -> Vec<Point> {
    v.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn interior_point_is_dropped() {
    let input = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, 2.0)]);
    let h = compute_convex_hull(&input).unwrap();
    assert_eq!(h.vertices(), &pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)])[..]);
}

#[test]
fn collinear_run_keeps_extremes() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    let h = compute_convex_hull(&input).unwrap();
    assert_eq!(h.vertices(), &pts(&[(0.0, 0.0), (3.0, 0.0)])[..]);

    let column = pts(&[(5.0, 3.0), (5.0, -1.0), (5.0, 0.0), (5.0, 7.0), (5.0, 2.0)]);
    let h = compute_convex_hull(&column).unwrap();
    assert_eq!(h.vertices(), &pts(&[(5.0, -1.0), (5.0, 7.0)])[..]);

    let diagonal: Vec<Point> = (0..17).map(|k| Point::new(k as f64, 2.0 * k as f64)).collect();
    let h = compute_convex_hull(&diagonal).unwrap();
    assert_eq!(h.vertices(), &pts(&[(0.0, 0.0), (16.0, 32.0)])[..]);
}

#[test]
fn negative_zero_shares_a_vertical_line_with_zero() {
    let input = pts(&[(-0.0, 5.0), (0.0, 0.0), (0.0, 6.0)]);
    let h = compute_convex_hull(&input).unwrap();
    assert_eq!(h.vertices(), &pts(&[(0.0, 0.0), (0.0, 6.0)])[..]);
    assert!(contains_all(&h, &input));

    let mixed = pts(&[(0.0, -1.0), (-0.0, 3.0), (1.0, 1.0), (-0.0, 0.0), (0.0, 2.0)]);
    let h = compute_convex_hull(&mixed).unwrap();
    assert_eq!(h.vertices(), &pts(&[(0.0, -1.0), (1.0, 1.0), (0.0, 3.0)])[..]);
    assert!(h.iter().all(|p| p.x.is_sign_positive()));
}

#[test]
fn base_cases() {
    let one = compute_convex_hull(&pts(&[(3.0, 4.0)])).unwrap();
    assert_eq!(one.vertices(), &pts(&[(3.0, 4.0)])[..]);

    let two = compute_convex_hull(&pts(&[(1.0, 1.0), (0.0, 0.0)])).unwrap();
    assert_eq!(two.vertices(), &pts(&[(0.0, 0.0), (1.0, 1.0)])[..]);

    // Given clockwise, returned counter-clockwise from the lex-min vertex.
    let tri = compute_convex_hull(&pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)])).unwrap();
    assert_eq!(tri.vertices(), &pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])[..]);
    assert!((tri.area() - 0.5).abs() < 1e-12);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(matches!(
        compute_convex_hull(&[]),
        Err(HullError::InvalidInput { .. })
    ));
    let err = compute_convex_hull(&pts(&[(0.0, 0.0), (f64::INFINITY, 1.0)])).unwrap_err();
    assert!(err.to_string().contains("non-finite"));
    assert!(compute_convex_hull(&pts(&[(f64::NAN, 0.0)])).is_err());
}

#[test]
fn duplicates_only() {
    let input = pts(&[(1.0, 1.0); 9]);
    let h = compute_convex_hull(&input).unwrap();
    assert_eq!(h.len(), 1);
    let input = pts(&[(1.0, 1.0), (2.0, 2.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(compute_convex_hull(&input).unwrap().len(), 2);
}

#[test]
fn agrees_with_monotone_chain_on_random_clouds() {
    let dists = [
        PointDist::Square { half_width: 10.0 },
        PointDist::Disc { radius: 1.0 },
        PointDist::Grid { side: 7 },
        PointDist::Grid { side: 40 },
        PointDist::Line { half_length: 30 },
    ];
    for (d, dist) in dists.iter().enumerate() {
        for &n in &[1usize, 2, 3, 5, 17, 100, 1000] {
            let tok = ReplayToken {
                seed: 2025,
                index: (d * 100 + n) as u64,
            };
            let input = sample_points(*dist, n, tok);
            let h = compute_convex_hull(&input).unwrap();
            let oracle = monotone_chain(&input).unwrap();
            assert_eq!(h, oracle, "dist {dist:?}, n {n}");
            assert!(is_convex_ccw(&h));
            assert!(contains_all(&h, &input));
        }
    }
}

#[test]
fn points_on_a_circle_are_all_vertices() {
    let input = sample_points(
        PointDist::Circle { radius: 3.0 },
        64,
        ReplayToken { seed: 9, index: 0 },
    );
    let h = compute_convex_hull(&input).unwrap();
    assert_eq!(h.len(), 64);
    assert_eq!(h, monotone_chain(&input).unwrap());
}

#[test]
fn idempotent_and_order_independent() {
    use ::rand::seq::SliceRandom;
    use ::rand::{rngs::StdRng, SeedableRng};

    let input = sample_points(
        PointDist::Disc { radius: 5.0 },
        500,
        ReplayToken { seed: 3, index: 1 },
    );
    let h = compute_convex_hull(&input).unwrap();
    let again = compute_convex_hull(h.vertices()).unwrap();
    assert_eq!(h, again);

    let mut shuffled = input.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(11));
    let hs = compute_convex_hull(&shuffled).unwrap();
    assert_eq!(h, hs);
    let mut reversed = input;
    reversed.reverse();
    assert!(same_cycle(&h, &compute_convex_hull(&reversed).unwrap()));
}

#[test]
fn observer_does_not_change_result() {
    let input = sample_points(
        PointDist::Grid { side: 12 },
        300,
        ReplayToken { seed: 5, index: 5 },
    );
    let plain = compute_convex_hull(&input).unwrap();
    let mut rec = MergeRecorder::default();
    let observed = compute_convex_hull_observed(&input, &mut rec).unwrap();
    assert_eq!(plain, observed);

    let mut unique = input.clone();
    unique.sort_by(lex_cmp);
    unique.dedup();
    assert_eq!(rec.records.len(), unique.len() - 1);
    // every intermediate result is itself a valid hull of its children
    for r in &rec.records {
        assert!(is_convex_ccw(&r.merged));
        assert!(contains_all(&r.merged, r.left.vertices()));
        assert!(contains_all(&r.merged, r.right.vertices()));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    let input = sample_points(
        PointDist::Square { half_width: 1.0 },
        20_000,
        ReplayToken { seed: 77, index: 0 },
    );
    let seq = compute_convex_hull(&input).unwrap();
    let cfg = HullCfg {
        parallel: true,
        par_min_len: 64,
    };
    let par = compute_convex_hull_with(&input, cfg).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn presorted_entry_point_matches_driver() {
    let input = sample_points(
        PointDist::Grid { side: 9 },
        80,
        ReplayToken { seed: 8, index: 2 },
    );
    let sorted = sort_points(&input).unwrap();
    let h = hull_of_sorted(&sorted).unwrap().rotated_to_lex_min();
    assert_eq!(h, compute_convex_hull(&input).unwrap());
}

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-12i32..12, -12i32..12), 1..max_len).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Point::new(f64::from(x) / 4.0, f64::from(y) / 4.0))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_matches_oracle(input in grid_points(80)) {
        let h = compute_convex_hull(&input).unwrap();
        prop_assert_eq!(&h, &monotone_chain(&input).unwrap());
        prop_assert!(is_convex_ccw(&h));
        prop_assert!(contains_all(&h, &input));
    }

    #[test]
    fn prop_idempotent(input in grid_points(60)) {
        let h = compute_convex_hull(&input).unwrap();
        let again = compute_convex_hull(h.vertices()).unwrap();
        prop_assert_eq!(h, again);
    }

    #[test]
    fn prop_permutation_invariant(input in grid_points(60), rot in 0usize..60) {
        let h = compute_convex_hull(&input).unwrap();
        let mut moved = input.clone();
        let k = rot % moved.len();
        moved.rotate_left(k);
        moved.reverse();
        prop_assert_eq!(h, compute_convex_hull(&moved).unwrap());
    }
}
