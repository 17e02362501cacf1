//! Validated city-to-city weight matrix.

use crate::error::TspError;

/// A dense n×n matrix of edge weights stored in row-major order.
///
/// The graph is fully connected with no self-loops: the main diagonal is
/// exactly zero, and every off-diagonal entry is non-zero and not NaN.
/// Validation happens once at construction; there is no mutating access
/// afterwards, so a matrix that exists is always well formed.
///
/// # Examples
///
/// ```
/// use tsp_select::graph::WeightMatrix;
///
/// let wm = WeightMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(wm.size(), 3);
/// assert_eq!(wm.get(1, 2), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    data: Vec<f64>,
    size: usize,
}

impl WeightMatrix {
    /// Builds a weight matrix from nested rows, validating the graph shape.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyMatrix`] if `rows` is empty
    /// - [`TspError::MatrixNotSquare`] if any row length differs from the row count
    /// - [`TspError::NonZeroDiagonal`] if a diagonal entry is not exactly zero
    /// - [`TspError::ZeroWeight`] if an off-diagonal entry is zero
    /// - [`TspError::NanWeight`] if an off-diagonal entry is NaN
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TspError> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::MatrixNotSquare);
            }
            for (j, &w) in row.iter().enumerate() {
                if i == j {
                    if w != 0.0 {
                        return Err(TspError::NonZeroDiagonal);
                    }
                } else if w == 0.0 {
                    return Err(TspError::ZeroWeight);
                } else if w.is_nan() {
                    return Err(TspError::NanWeight);
                }
                data.push(w);
            }
        }

        Ok(Self { data, size: n })
    }

    /// Builds the complete graph on `n` cities with a constant edge weight.
    ///
    /// # Errors
    ///
    /// Same validation as [`from_rows`](Self::from_rows): fails on an empty
    /// graph or a zero/NaN weight.
    pub fn complete(n: usize, weight: f64) -> Result<Self, TspError> {
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { 0.0 } else { weight })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Returns the weight of the edge from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns one row of the matrix as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}
