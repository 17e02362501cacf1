//! City-selection TSP problem facade.

use std::fmt;

use rand::Rng;

use crate::constraints::build_constraints;
use crate::encoding::{decode, random_chromosome, Encoding};
use crate::error::TspError;
use crate::evaluation::{find_best_subsequence, SubsequenceResult};
use crate::graph::{GraphConfig, WeightMatrix};

use super::Problem;

/// City-selection travelling salesman problem (TSP-CS).
///
/// Given edge weights, a value per city, and a maximum path length, the
/// objective rewards the candidate whose decoded tour contains the
/// best-value contiguous stretch fitting the length budget; leftover
/// budget breaks ties. All problem data is validated at construction and
/// immutable afterwards, so one instance can be evaluated from many
/// threads at once.
///
/// # Examples
///
/// ```
/// use tsp_select::encoding::Encoding;
/// use tsp_select::problem::CitySelectTsp;
///
/// let problem = CitySelectTsp::new(
///     vec![
///         vec![0.0, 1.0, 1.0],
///         vec![1.0, 0.0, 1.0],
///         vec![1.0, 1.0, 0.0],
///     ],
///     vec![1.0, 1.0, 1.0],
///     1.0,
///     Encoding::Cities,
/// ).unwrap();
///
/// let fitness = problem.evaluate_fitness(&[0.0, 1.0, 2.0]).unwrap();
/// assert!((fitness - (-2.0)).abs() < 1e-12);
/// assert_eq!(problem.evaluate_constraints(&[0.0, 1.0, 2.0]).unwrap(), vec![0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct CitySelectTsp {
    graph: GraphConfig,
}

impl CitySelectTsp {
    /// Builds a problem instance from nested weight rows, per-city values,
    /// a path budget, and the chromosome encoding.
    ///
    /// # Errors
    ///
    /// Any [`TspError`] raised while validating the weight matrix, the
    /// value-vector size, or the budget.
    pub fn new(
        weights: Vec<Vec<f64>>,
        values: Vec<f64>,
        max_path_length: f64,
        encoding: Encoding,
    ) -> Result<Self, TspError> {
        let weights = WeightMatrix::from_rows(weights)?;
        let graph = GraphConfig::new(weights, values, max_path_length, encoding)?;
        Ok(Self { graph })
    }

    /// Wraps an already-validated configuration.
    pub fn from_config(graph: GraphConfig) -> Self {
        Self { graph }
    }

    /// Decodes a chromosome and returns the best tour window it contains.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::ChromosomeLengthMismatch`] on a chromosome whose
    /// length does not match the encoding.
    pub fn best_subsequence(&self, chromosome: &[f64]) -> Result<SubsequenceResult, TspError> {
        let tour = decode(self.graph.encoding(), chromosome, self.num_cities())?;
        find_best_subsequence(&self.graph, &tour)
    }

    /// Fitness of a chromosome, to be minimized:
    /// `-(value + (1 - min_value) * n + saved_length / max_path_length)`.
    ///
    /// Higher collected value and more unused budget both lower the
    /// fitness; the `(1 - min_value) * n` shift keeps the objective
    /// comparable across instances with negative city values.
    ///
    /// # Errors
    ///
    /// Same as [`best_subsequence`](Self::best_subsequence).
    pub fn evaluate_fitness(&self, chromosome: &[f64]) -> Result<f64, TspError> {
        let best = self.best_subsequence(chromosome)?;
        let n = self.num_cities() as f64;
        Ok(-(best.value
            + (1.0 - self.graph.min_value()) * n
            + best.saved_length / self.graph.max_path_length()))
    }

    /// Feasibility-constraint vector of a chromosome; see
    /// [`build_constraints`].
    ///
    /// # Errors
    ///
    /// Returns [`TspError::ChromosomeLengthMismatch`] on a chromosome whose
    /// length does not match the encoding.
    pub fn evaluate_constraints(&self, chromosome: &[f64]) -> Result<Vec<f64>, TspError> {
        build_constraints(&self.graph, chromosome)
    }

    /// Weight of the edge from city `i` to city `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.graph.weights().get(i, j)
    }

    /// Draws a random chromosome matching this instance's encoding, for
    /// population seeding.
    pub fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        random_chromosome(self.graph.encoding(), self.num_cities(), rng)
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.graph.num_cities()
    }

    /// Chromosome encoding in use.
    pub fn encoding(&self) -> Encoding {
        self.graph.encoding()
    }

    /// The underlying validated configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }
}

impl Default for CitySelectTsp {
    /// The canonical 3-city toy instance (unit weights and values,
    /// budget 1, `RandomKeys`), used as a smoke-test fixture.
    fn default() -> Self {
        Self::from_config(GraphConfig::toy())
    }
}

impl Problem for CitySelectTsp {
    fn dimension(&self) -> usize {
        self.graph.encoding().chromosome_len(self.num_cities())
    }

    fn fitness(&self, chromosome: &[f64]) -> Result<f64, TspError> {
        self.evaluate_fitness(chromosome)
    }

    fn constraints(&self, chromosome: &[f64]) -> Result<Vec<f64>, TspError> {
        self.evaluate_constraints(chromosome)
    }
}

impl fmt::Display for CitySelectTsp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "City-selection travelling salesman problem (TSP-CS)")?;
        writeln!(f, "  cities: {}", self.num_cities())?;
        writeln!(f, "  encoding: {}", self.graph.encoding())?;
        writeln!(f, "  values: {:?}", self.graph.values())?;
        writeln!(f, "  max path length: {}", self.graph.max_path_length())?;
        writeln!(f, "  weights:")?;
        for i in 0..self.num_cities() {
            writeln!(f, "    {:?}", self.graph.weights().row(i))?;
            if i > 5 {
                writeln!(f, "    ...")?;
                break;
            }
        }
        Ok(())
    }
}
