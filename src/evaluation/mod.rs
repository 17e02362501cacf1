//! Optimal subsequence search over a decoded tour.

mod planner;

pub use planner::{find_best_subsequence, SubsequenceResult};
