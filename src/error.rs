//! Error type for problem construction and evaluation.

use thiserror::Error;

/// Errors raised while building or evaluating a city-selection TSP instance.
///
/// Every variant is a configuration error: a malformed problem definition,
/// or a chromosome/tour whose shape does not match the encoding. An
/// infeasible but well-formed chromosome is never an error — infeasibility
/// is reported through ordinary constraint values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// A row of the weight matrix has a different length than the row count.
    #[error("adjacency matrix is not square")]
    MatrixNotSquare,

    /// The weight matrix has no cities at all.
    #[error("adjacency matrix must contain at least one city")]
    EmptyMatrix,

    /// A diagonal entry of the weight matrix is not exactly zero.
    #[error("main diagonal elements must all be zeros")]
    NonZeroDiagonal,

    /// An off-diagonal entry of the weight matrix is zero (missing edge).
    #[error("adjacency matrix contains zero values")]
    ZeroWeight,

    /// An off-diagonal entry of the weight matrix is NaN.
    #[error("adjacency matrix contains NaN values")]
    NanWeight,

    /// The value vector length differs from the matrix dimension.
    #[error("size of weight matrix and values vector must be equal")]
    ValueCountMismatch,

    /// The path budget is negative or non-finite.
    #[error("max path length must be finite and non-negative")]
    InvalidBudget,

    /// The chromosome length does not match the encoding's layout.
    #[error("chromosome length {actual} does not match the encoding (expected {expected})")]
    ChromosomeLengthMismatch {
        /// Length required by the encoding for this city count.
        expected: usize,
        /// Length of the chromosome that was supplied.
        actual: usize,
    },

    /// A decoded tour does not visit the expected number of cities.
    #[error("tour dimension must be equal to the city number")]
    TourLengthMismatch,
}
