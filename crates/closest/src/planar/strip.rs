//! Strip merge: bounded forward window over a y-ordered band.
//!
//! Packing bound: inside a `d × 2d` box straddling the dividing line, each half
//! holds only a constant number of points pairwise at least `d` apart, so a
//! point can only beat `d` against a few successors in y-order. The window is
//! fixed at `STRIP_WINDOW` and is not shrunk as the running best improves.

use super::cfg::STRIP_WINDOW;
use super::types::{PairMatch, Point};

/// Best pair among `strip` (indices into `points`, sorted by y), comparing each
/// entry with at most `STRIP_WINDOW` successors.
///
/// `None` is the "no improvement" result (fewer than two entries).
pub(crate) fn closest_in_strip(points: &[Point], strip: &[usize]) -> Option<PairMatch> {
    let m = strip.len();
    let mut best: Option<(usize, usize, f64)> = None;
    for k in 0..m {
        let p = points[strip[k]];
        let end = (k + 1 + STRIP_WINDOW).min(m);
        for &q in &strip[k + 1..end] {
            let d = p.distance(&points[q]);
            if best.as_ref().is_none_or(|&(_, _, bd)| d < bd) {
                best = Some((strip[k], q, d));
            }
        }
    }
    best.map(|(i, j, d)| PairMatch::measured(points, i, j, d))
}
