//! Closest pair in the plane (divide and conquer over index orderings).
//!
//! Purpose
//! - Find the two points of a finite planar set at minimum Euclidean distance.
//! - Keep the exhaustive solver around both as a public baseline and as the
//!   base case of the recursion.
//!
//! Layout
//! - `types`: `Point`, `PairMatch`, `PairError`.
//! - `brute`: O(k²) scan with first-found tie-breaking.
//! - `strip`: bounded forward window over a y-ordered band.
//! - `divide`: pre-sorted orderings, recursive split, merge; public entry points.
//! - `cfg`: fixed thresholds (base case size, strip window, test tolerance).
//! - `rand`: reproducible point clouds for tests, benches and the CLI.

mod brute;
pub mod cfg;
mod divide;
pub mod rand;
mod strip;
mod types;

pub use brute::closest_pair_brute_force;
pub use divide::{closest_pair, closest_pair_match};
pub use types::{PairError, PairMatch, Point};

#[cfg(test)]
mod tests;
