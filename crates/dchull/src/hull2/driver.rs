//! Public entry points: sort, divide, merge, canonicalize.

use super::divide::{check_finite, prepare_sorted, recurse};
use super::error::HullError;
use super::observer::{MergeObserver, NoopObserver};
use super::sort::sort_points;
use super::types::{Hull, HullCfg, Point};

/// Convex hull of `points` with default configuration.
///
/// The result is counter-clockwise and starts at its lexicographically
/// smallest vertex. Fails only on empty input or non-finite coordinates.
pub fn compute_convex_hull(points: &[Point]) -> Result<Hull, HullError> {
    compute_convex_hull_with(points, HullCfg::default())
}

/// Convex hull with explicit configuration (parallel recursion).
pub fn compute_convex_hull_with(points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
    let pts = sorted_unique(points)?;
    let hull = if use_parallel(&cfg, pts.len()) {
        run_parallel(&pts, cfg)
    } else {
        recurse(&pts, 0, &mut NoopObserver)
    };
    let hull = hull.rotated_to_lex_min();
    tracing::debug!(
        n = points.len(),
        unique = pts.len(),
        hull = hull.len(),
        parallel = cfg.parallel,
        "convex_hull"
    );
    Ok(hull)
}

/// Convex hull reporting every merge to `obs`. Always sequential, so
/// events arrive in a deterministic post-order.
pub fn compute_convex_hull_observed<O: MergeObserver + ?Sized>(
    points: &[Point],
    obs: &mut O,
) -> Result<Hull, HullError> {
    let pts = sorted_unique(points)?;
    let hull = recurse(&pts, 0, obs).rotated_to_lex_min();
    tracing::debug!(n = points.len(), hull = hull.len(), "convex_hull_observed");
    Ok(hull)
}

fn sorted_unique(points: &[Point]) -> Result<Vec<Point>, HullError> {
    check_finite(points)?;
    let sorted = sort_points(points)?;
    prepare_sorted(&sorted)
}

#[cfg(feature = "parallel")]
fn use_parallel(cfg: &HullCfg, n: usize) -> bool {
    cfg.parallel && n >= cfg.par_min_len
}

#[cfg(not(feature = "parallel"))]
fn use_parallel(cfg: &HullCfg, _n: usize) -> bool {
    if cfg.parallel {
        tracing::debug!("parallel requested but the `parallel` feature is disabled");
    }
    false
}

#[cfg(feature = "parallel")]
fn run_parallel(pts: &[Point], cfg: HullCfg) -> Hull {
    super::divide::recurse_par(pts, cfg.par_min_len)
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(pts: &[Point], _cfg: HullCfg) -> Hull {
    recurse(pts, 0, &mut NoopObserver)
}
