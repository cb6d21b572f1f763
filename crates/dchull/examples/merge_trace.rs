//! Print every merge step of a small hull computation.
//!
//! Usage:
//!   cargo run -p dchull --example merge_trace -- [n] [seed]
//!
//! Each line shows the two child hull sizes, the tangent vertices, and the
//! merged size; the last line is the final hull.

use dchull::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(16);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let pts = sample_points(PointDist::Grid { side: 10 }, n, ReplayToken { seed, index: 0 });

    let mut rec = MergeRecorder::default();
    let hull = match compute_convex_hull_observed(&pts, &mut rec) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };
    for r in &rec.records {
        let tangents = match r.tangents {
            Some(t) => format!(
                "upper=({}, {}) lower=({}, {})",
                t.upper.left, t.upper.right, t.lower.left, t.lower.right
            ),
            None => "trivial".to_string(),
        };
        println!(
            "depth={:<2} left={:<3} right={:<3} {:<32} merged={}",
            r.depth,
            r.left.len(),
            r.right.len(),
            tangents,
            r.merged.len()
        );
    }
    let verts: Vec<String> = hull.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
    println!("hull [{}] area={:.3}", verts.join(", "), hull.area());
}
