//! Immutable problem configuration.

use crate::encoding::Encoding;
use crate::error::TspError;

use super::WeightMatrix;

/// Validated configuration of a city-selection TSP instance.
///
/// Bundles the edge weights, the per-city values, the maximum path length
/// (budget), and the chromosome encoding. The minimum city value is
/// computed once here and cached, since the fitness formula needs it on
/// every evaluation. A configuration is read-only for the lifetime of the
/// problem, so it can be shared freely across evaluation threads.
///
/// # Examples
///
/// ```
/// use tsp_select::encoding::Encoding;
/// use tsp_select::graph::{GraphConfig, WeightMatrix};
///
/// let weights = WeightMatrix::complete(3, 1.0).unwrap();
/// let config = GraphConfig::new(weights, vec![2.0, 1.0, 3.0], 5.0, Encoding::Cities).unwrap();
/// assert_eq!(config.num_cities(), 3);
/// assert_eq!(config.min_value(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    weights: WeightMatrix,
    values: Vec<f64>,
    max_path_length: f64,
    encoding: Encoding,
    min_value: f64,
}

impl GraphConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`TspError::ValueCountMismatch`] if `values.len()` differs from the
    ///   matrix dimension
    /// - [`TspError::InvalidBudget`] if `max_path_length` is negative or
    ///   non-finite
    pub fn new(
        weights: WeightMatrix,
        values: Vec<f64>,
        max_path_length: f64,
        encoding: Encoding,
    ) -> Result<Self, TspError> {
        if values.len() != weights.size() {
            return Err(TspError::ValueCountMismatch);
        }
        if !max_path_length.is_finite() || max_path_length < 0.0 {
            return Err(TspError::InvalidBudget);
        }

        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);

        Ok(Self {
            weights,
            values,
            max_path_length,
            encoding,
            min_value,
        })
    }

    /// The canonical 3-city toy instance: unit weights off the diagonal,
    /// unit city values, budget 1, `RandomKeys` encoding.
    pub fn toy() -> Self {
        let weights =
            WeightMatrix::complete(3, 1.0).expect("complete unit-weight graph is valid");
        Self::new(weights, vec![1.0; 3], 1.0, Encoding::RandomKeys)
            .expect("toy instance is valid")
    }

    /// Edge weights.
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Per-city values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of a single city.
    ///
    /// # Panics
    ///
    /// Panics if `city` is out of bounds.
    pub fn value(&self, city: usize) -> f64 {
        self.values[city]
    }

    /// Maximum path length (the budget).
    pub fn max_path_length(&self) -> f64 {
        self.max_path_length
    }

    /// Chromosome encoding in use.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Smallest city value, cached at construction.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.weights.size()
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::toy()
    }
}
