use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::prelude::*;
use std::path::Path;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod output;
mod provenance;
mod trace;

use provenance::{HullSummary, Payload};
use trace::TracingObserver;

#[derive(Parser)]
#[command(name = "dchull")]
#[command(about = "Divide-and-conquer convex hull runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample a point cloud, compute its hull, write vertices + provenance
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DistArg {
    Square,
    Disc,
    Circle,
    Grid,
    Line,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    #[arg(long, value_enum, default_value_t = DistArg::Disc)]
    dist: DistArg,
    /// Number of points to draw
    #[arg(long, default_value_t = 1000)]
    n: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    /// Half-width (square) or radius (disc, circle)
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Grid side length (grid) or largest step along the line (line)
    #[arg(long, default_value_t = 100)]
    side: u32,
    /// Output path; `.parquet` selects Parquet, anything else CSV
    #[arg(long)]
    out: String,
    /// Recurse on both halves concurrently
    #[arg(long)]
    parallel: bool,
    #[arg(long, default_value_t = HullCfg::default().par_min_len)]
    par_min_len: usize,
    /// Cross-check against the monotone chain hull
    #[arg(long)]
    check: bool,
    /// Log every merge step (sequential; use RUST_LOG=debug)
    #[arg(long)]
    trace_merges: bool,
}

impl RunArgs {
    fn point_dist(&self) -> PointDist {
        match self.dist {
            DistArg::Square => PointDist::Square {
                half_width: self.scale,
            },
            DistArg::Disc => PointDist::Disc { radius: self.scale },
            DistArg::Circle => PointDist::Circle { radius: self.scale },
            DistArg::Grid => PointDist::Grid { side: self.side },
            DistArg::Line => PointDist::Line {
                half_length: self.side,
            },
        }
    }

    fn hull_cfg(&self) -> HullCfg {
        HullCfg {
            parallel: self.parallel,
            par_min_len: self.par_min_len,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(&args),
        Action::Report => report(),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let dist = args.point_dist();
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    tracing::info!(dist = ?dist, n = args.n, seed = args.seed, index = args.index, "run");
    let points = sample_points(dist, args.n, tok);

    let hull = if args.trace_merges {
        let mut obs = TracingObserver::default();
        let hull = compute_convex_hull_observed(&points, &mut obs)?;
        tracing::info!(merges = obs.merges, trivial = obs.trivial, "merge_trace");
        hull
    } else {
        compute_convex_hull_with(&points, args.hull_cfg())?
    };
    if args.check {
        verify(&hull, &points)?;
    }
    tracing::info!(
        hull = hull.len(),
        area = hull.area(),
        perimeter = hull.perimeter(),
        "hull"
    );

    let out = Path::new(&args.out);
    output::write_hull(&hull, out)?;
    let params = serde_json::json!({
        "dist": format!("{:?}", args.dist).to_lowercase(),
        "n": args.n,
        "seed": args.seed,
        "index": args.index,
        "scale": args.scale,
        "side": args.side,
        "parallel": args.parallel,
        "par_min_len": args.par_min_len,
    });
    let summary = HullSummary {
        points: points.len(),
        hull_vertices: hull.len(),
        area: hull.area(),
        perimeter: hull.perimeter(),
        checked: args.check,
    };
    let prov = provenance::write_sidecar(out, Payload::new(params).with_summary(summary))?;
    tracing::info!(path = %prov.display(), "provenance_written");
    Ok(())
}

/// Structural checks plus agreement with an independent hull.
fn verify(hull: &Hull, points: &[Point]) -> Result<()> {
    if !is_convex_ccw(hull) {
        bail!("hull is not strictly convex counter-clockwise");
    }
    if !contains_all(hull, points) {
        bail!("hull does not contain every input point");
    }
    let oracle = monotone_chain(points).context("monotone chain on empty input")?;
    if !same_cycle(hull, &oracle) {
        bail!(
            "hull disagrees with monotone chain ({} vs {} vertices)",
            hull.len(),
            oracle.len()
        );
    }
    tracing::info!(vertices = hull.len(), "check_passed");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "dchull_version": dchull::VERSION,
        "features": ["parallel"],
        "defaults": {
            "par_min_len": HullCfg::default().par_min_len
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
