use anyhow::{Context, Result};
use dchull::Hull;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Hull vertices as a frame with columns `vertex`, `x`, `y` (winding order).
pub fn hull_frame(hull: &Hull) -> PolarsResult<DataFrame> {
    let idx: Vec<u32> = (0..hull.len() as u32).collect();
    let xs: Vec<f64> = hull.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = hull.iter().map(|p| p.y).collect();
    df!("vertex" => idx, "x" => xs, "y" => ys)
}

/// Write the hull as Parquet for `*.parquet`, CSV otherwise.
pub fn write_hull(hull: &Hull, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = hull_frame(hull)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(file)
            .finish(&mut df)
            .with_context(|| format!("writing parquet {}", out.display()))?;
    } else {
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing csv {}", out.display()))?;
    }
    tracing::info!(rows = df.height(), path = %out.display(), "hull_written");
    Ok(())
}
