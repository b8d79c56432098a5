//! Divide and conquer over pre-sorted index orderings.
//!
//! Model
//! - Sort point indices once by x and once by y. A subproblem is a range
//!   `lo..hi` that means the same points in both orderings.
//! - Before recursing, the y-range is stably partitioned by x-rank so each half
//!   sees exactly its own points in y-order. After both halves return, the two
//!   y-runs are merged back, restoring the parent's y-order.
//! - The strip for the merge step is assembled in the scratch buffer, so the
//!   recursion allocates nothing beyond the four buffers built up front.
//!
//! Ties
//! - x-order: x, then y, then input index. y-order: y, then x, then input index.
//! - Left/right results tie in favour of the left half; the strip only wins on a
//!   strictly smaller distance.

use std::cmp::Ordering;

use super::brute::scan_ids;
use super::cfg::BASE_CASE_MAX;
use super::strip::closest_in_strip;
use super::types::{require_pair, PairError, PairMatch, Point};

/// Closest pair of `points` in O(n log n). Fails with `InsufficientPoints` for n < 2.
pub fn closest_pair(points: &[Point]) -> Result<(Point, Point), PairError> {
    closest_pair_match(points).map(|m| m.points())
}

/// Like `closest_pair`, but also reports the input indices and the distance.
pub fn closest_pair_match(points: &[Point]) -> Result<PairMatch, PairError> {
    require_pair(points)?;
    let mut arena = Arena::new(points);
    arena
        .solve(0, points.len())
        .ok_or(PairError::InsufficientPoints {
            found: points.len(),
        })
}

#[inline]
fn cmp_x(points: &[Point], a: usize, b: usize) -> Ordering {
    let (p, q) = (points[a], points[b]);
    p.x.total_cmp(&q.x)
        .then(p.y.total_cmp(&q.y))
        .then(a.cmp(&b))
}

#[inline]
fn cmp_y(points: &[Point], a: usize, b: usize) -> Ordering {
    let (p, q) = (points[a], points[b]);
    p.y.total_cmp(&q.y)
        .then(p.x.total_cmp(&q.x))
        .then(a.cmp(&b))
}

/// Orderings and work buffers for one top-level call.
struct Arena<'a> {
    points: &'a [Point],
    x_order: Vec<usize>,
    y_order: Vec<usize>,
    /// `x_rank[id]` is the position of point `id` in `x_order`.
    x_rank: Vec<usize>,
    scratch: Vec<usize>,
}

impl<'a> Arena<'a> {
    fn new(points: &'a [Point]) -> Self {
        let n = points.len();
        let mut x_order: Vec<usize> = (0..n).collect();
        x_order.sort_unstable_by(|&a, &b| cmp_x(points, a, b));
        let mut y_order: Vec<usize> = (0..n).collect();
        y_order.sort_unstable_by(|&a, &b| cmp_y(points, a, b));
        let mut x_rank = vec![0; n];
        for (pos, &id) in x_order.iter().enumerate() {
            x_rank[id] = pos;
        }
        Self {
            points,
            x_order,
            y_order,
            x_rank,
            scratch: vec![0; n],
        }
    }

    /// Closest pair within `lo..hi`. `None` only for fewer than two points,
    /// which the split arithmetic never produces below a valid top-level call.
    fn solve(&mut self, lo: usize, hi: usize) -> Option<PairMatch> {
        debug_assert!(self.holds_subproblem(lo, hi), "y-range out of sync at {lo}..{hi}");
        let n = hi - lo;
        if n <= BASE_CASE_MAX {
            return scan_ids(self.points, &self.x_order[lo..hi]);
        }

        let mid = lo + n / 2;
        let divide_x = self.points[self.x_order[mid]].x;

        self.partition_y(lo, mid, hi);
        let left = self.solve(lo, mid)?;
        let right = self.solve(mid, hi)?;
        self.merge_y(lo, mid, hi);

        let best = if right.distance < left.distance {
            right
        } else {
            left
        };
        let len = self.fill_strip(lo, hi, divide_x, best.distance);
        match closest_in_strip(self.points, &self.scratch[lo..lo + len]) {
            Some(cross) if cross.distance < best.distance => Some(cross),
            _ => Some(best),
        }
    }

    /// Stable split of `y_order[lo..hi]`: x-ranks below `mid` first, the rest after.
    fn partition_y(&mut self, lo: usize, mid: usize, hi: usize) {
        let (mut l, mut r) = (lo, mid);
        for k in lo..hi {
            let id = self.y_order[k];
            if self.x_rank[id] < mid {
                self.scratch[l] = id;
                l += 1;
            } else {
                self.scratch[r] = id;
                r += 1;
            }
        }
        debug_assert_eq!((l, r), (mid, hi));
        self.y_order[lo..hi].copy_from_slice(&self.scratch[lo..hi]);
    }

    /// Merge the y-sorted runs `lo..mid` and `mid..hi` back into one run.
    fn merge_y(&mut self, lo: usize, mid: usize, hi: usize) {
        let points = self.points;
        let (mut a, mut b) = (lo, mid);
        for out in lo..hi {
            let take_left = b >= hi
                || (a < mid
                    && cmp_y(points, self.y_order[a], self.y_order[b]) != Ordering::Greater);
            if take_left {
                self.scratch[out] = self.y_order[a];
                a += 1;
            } else {
                self.scratch[out] = self.y_order[b];
                b += 1;
            }
        }
        self.y_order[lo..hi].copy_from_slice(&self.scratch[lo..hi]);
    }

    /// Copy every point of `lo..hi` with `|x - divide_x| < d` into `scratch[lo..]`,
    /// in y-order. Returns the strip length.
    fn fill_strip(&mut self, lo: usize, hi: usize, divide_x: f64, d: f64) -> usize {
        let mut len = 0;
        for k in lo..hi {
            let id = self.y_order[k];
            if (self.points[id].x - divide_x).abs() < d {
                self.scratch[lo + len] = id;
                len += 1;
            }
        }
        len
    }

    /// I1: `y_order[lo..hi]` is y-sorted and holds exactly the points of `x_order[lo..hi]`.
    fn holds_subproblem(&self, lo: usize, hi: usize) -> bool {
        let ys = &self.y_order[lo..hi];
        ys.iter().all(|&id| (lo..hi).contains(&self.x_rank[id]))
            && ys
                .windows(2)
                .all(|w| cmp_y(self.points, w[0], w[1]) == Ordering::Less)
    }
}
