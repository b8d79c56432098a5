//! Curated surface for the CLI and experiments (UNSTABLE).
//!
//! Breaking changes are allowed. Prefer these re-exports so call sites read the
//! same across binaries and benches.

pub use crate::planar::cfg::{BASE_CASE_MAX, DIST_EPS, STRIP_WINDOW};
pub use crate::planar::rand::{
    draw_lattice, draw_uniform, CloudCfg, CloudError, PointCount, ReplayToken as CloudReplay,
};
pub use crate::planar::{
    closest_pair, closest_pair_brute_force, closest_pair_match, PairError, PairMatch, Point,
};

/// Which solver a caller asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algo {
    /// Divide and conquer.
    DivideConquer,
    /// Exhaustive pair scan.
    BruteForce,
}

impl Algo {
    /// Parse the short names used on the command line (`dc`, `brute`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dc" | "divide" | "divide-conquer" => Some(Algo::DivideConquer),
            "brute" | "brute-force" | "naive" => Some(Algo::BruteForce),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algo::DivideConquer => "dc",
            Algo::BruteForce => "brute",
        }
    }
}

/// Run the selected solver.
pub fn solve(points: &[Point], algo: Algo) -> Result<PairMatch, PairError> {
    match algo {
        Algo::DivideConquer => closest_pair_match(points),
        Algo::BruteForce => closest_pair_brute_force(points),
    }
}
