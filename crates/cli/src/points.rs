//! Point-set input (CSV/Parquet via Polars) and the JSON result row.

use anyhow::{bail, Context, Result};
use closest::api::{Algo, PairMatch, Point};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Load columns `x` and `y` from a `.csv` or `.parquet` file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("opening {}", path.display()))?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("opening {}", path.display()))?,
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row}: missing coordinate"),
        })
        .collect()
}

/// One solved instance, as written to `--out`.
#[derive(Debug, Serialize)]
pub struct PairReport {
    pub algo: &'static str,
    pub n: usize,
    pub i: usize,
    pub j: usize,
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub distance: f64,
}

impl PairReport {
    pub fn new(algo: Algo, n: usize, m: &PairMatch) -> Self {
        Self {
            algo: algo.name(),
            n,
            i: m.i,
            j: m.j,
            a: [m.a.x, m.a.y],
            b: [m.b.x, m.b.y],
            distance: m.distance,
        }
    }
}

/// `(x, y)` with shortest round-trip float formatting (`7` rather than `7.0`).
pub fn fmt_point(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}
