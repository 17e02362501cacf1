//! Problem facade and the evaluation interface consumed by search algorithms.

mod city_select;

pub use city_select::CitySelectTsp;

use crate::error::TspError;

/// Evaluation interface a search algorithm drives.
///
/// Implementations must be pure: the same chromosome always yields
/// bit-identical fitness and constraint vectors, and evaluation mutates no
/// shared state, so one problem instance can serve many worker threads
/// concurrently without locking.
pub trait Problem: Send + Sync {
    /// Chromosome length expected by [`fitness`](Problem::fitness) and
    /// [`constraints`](Problem::constraints).
    fn dimension(&self) -> usize;

    /// Scalar fitness of a chromosome. Lower is better (minimization).
    ///
    /// # Errors
    ///
    /// Fails only on a malformed chromosome (wrong length for the
    /// encoding), never on an infeasible one.
    fn fitness(&self, chromosome: &[f64]) -> Result<f64, TspError>;

    /// Feasibility-constraint vector of a chromosome.
    ///
    /// Equality constraints come first (satisfied at zero), inequality
    /// constraints last (satisfied when non-positive).
    ///
    /// # Errors
    ///
    /// Fails only on a malformed chromosome, never on an infeasible one.
    fn constraints(&self, chromosome: &[f64]) -> Result<Vec<f64>, TspError>;
}
