//! Fixed thresholds for the planar solvers (internal).
//!
//! Policy
//! - Constants, not knobs. The recursion relies on `BASE_CASE_MAX >= 3` so that
//!   every split of a larger subproblem leaves at least two points per half.

/// Largest subproblem solved by brute force instead of splitting.
pub const BASE_CASE_MAX: usize = 3;
/// Forward neighbours checked per strip point (indices k+1..=k+STRIP_WINDOW).
pub const STRIP_WINDOW: usize = 6;
/// Absolute tolerance used when comparing distances from different solvers.
pub const DIST_EPS: f64 = 1e-9;
