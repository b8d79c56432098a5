//! Closest pair of points in the plane.
//!
//! Two solvers share one result type:
//! - `closest_pair_brute_force`: exhaustive O(n²) scan, also the recursion base case.
//! - `closest_pair` / `closest_pair_match`: divide and conquer in O(n log n).
//!
//! The crate never touches I/O. Callers hand in a borrowed `&[Point]` and get
//! back a `PairMatch` (or just the two points).

pub mod api;
pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use planar::{
    closest_pair, closest_pair_brute_force, closest_pair_match, PairError, PairMatch, Point,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::planar::rand::{
        draw_lattice, draw_uniform, CloudCfg, CloudError, PointCount, ReplayToken,
    };
    pub use crate::planar::{
        closest_pair, closest_pair_brute_force, closest_pair_match, PairError, PairMatch, Point,
    };
    pub use nalgebra::Vector2 as Vec2;
}
