//! Value types shared by the planar solvers.
//!
//! - `Point`: immutable 2D coordinate with Euclidean `distance`.
//! - `PairMatch`: the winning pair, its input indices and distance.
//! - `PairError`: the single failure mode (fewer than two points).

use std::fmt;

use nalgebra::Vector2;

/// A point in the plane. Equality is coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance `‖self − other‖₂`. Finite inputs give a finite, non-negative result.
    ///
    /// Squares that overflow or drop below the normal range fall back to `hypot`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let d = self.to_vec2() - other.to_vec2();
        let sq = d.norm_squared();
        if sq.is_normal() {
            sq.sqrt()
        } else {
            d.x.hypot(d.y)
        }
    }

    /// Uniform scaling about the origin.
    #[inline]
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Closest pair found by a solver.
///
/// `i`/`j` index into the caller's slice; `a == points[i]`, `b == points[j]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairMatch {
    pub i: usize,
    pub j: usize,
    pub a: Point,
    pub b: Point,
    pub distance: f64,
}

impl PairMatch {
    /// Pair `(points[i], points[j])` whose distance the caller already measured.
    #[inline]
    pub(crate) fn measured(points: &[Point], i: usize, j: usize, distance: f64) -> Self {
        Self {
            i,
            j,
            a: points[i],
            b: points[j],
            distance,
        }
    }

    /// The two points, in the order the solver found them.
    #[inline]
    pub fn points(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    /// Input indices as an unordered pair, normalized to `(min, max)`.
    #[inline]
    pub fn index_pair(&self) -> (usize, usize) {
        (self.i.min(self.j), self.i.max(self.j))
    }
}

/// Errors surfaced by the planar solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairError {
    /// A pair needs at least two points.
    InsufficientPoints { found: usize },
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::InsufficientPoints { found } => {
                write!(f, "closest pair needs at least 2 points, got {found}")
            }
        }
    }
}

impl std::error::Error for PairError {}

/// Boundary check shared by both public solvers.
#[inline]
pub(crate) fn require_pair(points: &[Point]) -> Result<(), PairError> {
    if points.len() < 2 {
        return Err(PairError::InsufficientPoints {
            found: points.len(),
        });
    }
    Ok(())
}
