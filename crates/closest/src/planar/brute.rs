//! Exhaustive O(k²) pair scan.
//!
//! Iteration order is fixed (i ascending, then j ascending, i < j) and the best
//! pair is only replaced on a strictly smaller distance, so ties resolve to the
//! first pair found.

use super::types::{require_pair, PairError, PairMatch, Point};

/// Closest pair by checking every unordered pair of `points`.
///
/// Returns `InsufficientPoints` for fewer than two points. On success `i < j`.
pub fn closest_pair_brute_force(points: &[Point]) -> Result<PairMatch, PairError> {
    require_pair(points)?;
    // require_pair guarantees at least one pair, so the scan always finds one.
    scan(points, points.len(), |k| k).ok_or(PairError::InsufficientPoints {
        found: points.len(),
    })
}

/// Base case: scan the subproblem listed by `ids` (indices into `points`).
#[inline]
pub(crate) fn scan_ids(points: &[Point], ids: &[usize]) -> Option<PairMatch> {
    scan(points, ids.len(), |k| ids[k])
}

fn scan<F: Fn(usize) -> usize>(points: &[Point], len: usize, id: F) -> Option<PairMatch> {
    let mut best: Option<(usize, usize, f64)> = None;
    for k in 0..len {
        let p = points[id(k)];
        for l in (k + 1)..len {
            let d = p.distance(&points[id(l)]);
            if best.as_ref().is_none_or(|&(_, _, bd)| d < bd) {
                best = Some((id(k), id(l), d));
            }
        }
    }
    best.map(|(i, j, d)| PairMatch::measured(points, i, j, d))
}
