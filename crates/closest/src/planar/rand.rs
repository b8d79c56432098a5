//! Random point clouds (uniform box, optional snapping and duplicates) + lattices.
//!
//! Purpose
//! - Reproducible inputs for property tests, benches and the CLI `random` command.
//! - Snapping to a grid and copying earlier points produce the ties, collinear
//!   runs and coincident pairs the solvers must handle.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Uniform-box sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Coordinates are drawn from `[-half_extent, half_extent]²`.
    pub half_extent: f64,
    /// If set, coordinates are rounded to multiples of this step.
    pub snap: Option<f64>,
    /// Probability that a point (after the first) repeats an earlier one. Clamped to [0, 1].
    pub duplicate_frac: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(100),
            half_extent: 1.0,
            snap: None,
            duplicate_frac: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Errors from the samplers.
#[derive(Debug, Clone, PartialEq)]
pub enum CloudError {
    InvalidParams { reason: String },
}

impl CloudError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid cloud params: {reason}"),
        }
    }
}

impl std::error::Error for CloudError {}

/// Draw a point cloud from `cfg`, reproducible from `tok`.
pub fn draw_uniform(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, CloudError> {
    if !(cfg.half_extent.is_finite() && cfg.half_extent > 0.0) {
        return Err(CloudError::invalid(format!(
            "half_extent must be finite and positive, got {}",
            cfg.half_extent
        )));
    }
    if let Some(step) = cfg.snap {
        if !(step.is_finite() && step > 0.0) {
            return Err(CloudError::invalid(format!(
                "snap step must be finite and positive, got {step}"
            )));
        }
    }
    if let PointCount::Uniform { min, max } = cfg.count {
        if min > max {
            return Err(CloudError::invalid(format!("count range {min}..={max} is empty")));
        }
    }

    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let dup = cfg.duplicate_frac.clamp(0.0, 1.0);
    let h = cfg.half_extent;
    let snap = |v: f64| match cfg.snap {
        Some(step) => (v / step).round() * step,
        None => v,
    };

    let mut pts: Vec<Point> = Vec::with_capacity(n);
    for _ in 0..n {
        if !pts.is_empty() && dup > 0.0 && rng.gen::<f64>() < dup {
            let k = rng.gen_range(0..pts.len());
            pts.push(pts[k]);
            continue;
        }
        let x = snap(rng.gen_range(-h..=h));
        let y = snap(rng.gen_range(-h..=h));
        pts.push(Point::new(x, y));
    }
    Ok(pts)
}

/// Axis-aligned `rows × cols` lattice with the given spacing, row-major from the origin.
///
/// Every neighbouring pair is at distance `spacing`, which exercises tie-breaking.
pub fn draw_lattice(rows: usize, cols: usize, spacing: f64) -> Vec<Point> {
    let mut pts = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            pts.push(Point::new(c as f64 * spacing, r as f64 * spacing));
        }
    }
    pts
}
