//! Optimal subsequence search over a Hamiltonian tour.

use serde::{Deserialize, Serialize};

use crate::error::TspError;
use crate::graph::GraphConfig;

/// The best contiguous window of a tour found by [`find_best_subsequence`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubsequenceResult {
    /// Total value of the cities inside the window.
    pub value: f64,
    /// Budget left over after traversing the window's edges.
    pub saved_length: f64,
    /// Tour position where the window starts.
    pub start: usize,
    /// Tour position where the window ends.
    pub end: usize,
}

/// Finds the best-value contiguous window of a Hamiltonian tour whose
/// traversed edge length stays within the path budget.
///
/// Windows are circular: the right end may wrap past the last tour
/// position, but the window never covers the whole cycle. Ties on value go
/// to the window with more unused budget. The value comparison is exact
/// floating-point equality; an epsilon would change which of two
/// equal-value windows wins, so none is applied.
///
/// Both window ends only ever move forward, so the scan is amortized O(n)
/// (two-pointer sliding window) instead of the O(n²) all-pairs scan.
///
/// The tour must be a permutation of all cities. That precondition is not
/// checked beyond the length test; a non-Hamiltonian tour produces an
/// unspecified result rather than an error.
///
/// # Errors
///
/// Returns [`TspError::TourLengthMismatch`] if `tour.len()` differs from
/// the city count.
///
/// # Examples
///
/// ```
/// use tsp_select::evaluation::find_best_subsequence;
/// use tsp_select::graph::GraphConfig;
///
/// let config = GraphConfig::toy();
/// let best = find_best_subsequence(&config, &[0, 1, 2]).unwrap();
/// assert_eq!(best.value, 2.0);
/// assert_eq!(best.saved_length, 0.0);
/// assert_eq!((best.start, best.end), (0, 1));
/// ```
pub fn find_best_subsequence(
    config: &GraphConfig,
    tour: &[usize],
) -> Result<SubsequenceResult, TspError> {
    let n = config.num_cities();
    if tour.len() != n {
        return Err(TspError::TourLengthMismatch);
    }

    let weights = config.weights();
    let mut l = 0_usize;
    let mut r = 0_usize;
    let mut cum_value = config.value(tour[0]);
    let mut saved_length = config.max_path_length();

    // Seed with the single-city window [0, 0]: no edges traversed yet.
    let mut best = SubsequenceResult {
        value: cum_value,
        saved_length,
        start: 0,
        end: 0,
    };

    let mut growing = true;
    let mut scanning = true;
    while scanning {
        while growing {
            // Advance the right end over the next edge.
            saved_length -= weights.get(tour[r % n], tour[(r + 1) % n]);
            cum_value += config.value(tour[(r + 1) % n]);
            r += 1;

            if saved_length < 0.0 || l % n == r % n {
                // Budget exceeded, or the window would cover the full cycle.
                growing = false;
            } else {
                consider(&mut best, cum_value, saved_length, l % n, r % n);
            }
        }

        if l % n == r % n {
            scanning = false;
        } else {
            // Give the left edge back to the budget and drop its city.
            saved_length += weights.get(tour[l % n], tour[(l + 1) % n]);
            cum_value -= config.value(tour[l % n]);
            l += 1;

            if saved_length > 0.0 {
                growing = true;
                consider(&mut best, cum_value, saved_length, l % n, r % n);
            }
            if l == n {
                scanning = false;
            }
        }
    }

    Ok(best)
}

/// Replaces `best` iff the candidate has strictly more value, or equal
/// value with strictly more unused budget.
fn consider(best: &mut SubsequenceResult, value: f64, saved_length: f64, start: usize, end: usize) {
    if value > best.value || (value == best.value && saved_length > best.saved_length) {
        *best = SubsequenceResult {
            value,
            saved_length,
            start,
            end,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::graph::WeightMatrix;

    fn config(
        rows: Vec<Vec<f64>>,
        values: Vec<f64>,
        budget: f64,
    ) -> GraphConfig {
        let weights = WeightMatrix::from_rows(rows).unwrap();
        GraphConfig::new(weights, values, budget, Encoding::Cities).unwrap()
    }

    /// Recomputes the value and traversed length of the window `[start, end]`
    /// directly from the tour, independent of the scan's bookkeeping.
    fn recompute(config: &GraphConfig, tour: &[usize], start: usize, end: usize) -> (f64, f64) {
        let n = tour.len();
        let steps = (end + n - start) % n;
        let mut value = config.value(tour[start]);
        let mut length = 0.0;
        for k in 0..steps {
            let from = tour[(start + k) % n];
            let to = tour[(start + k + 1) % n];
            length += config.weights().get(from, to);
            value += config.value(to);
        }
        (value, length)
    }

    #[test]
    fn test_toy_regression_fixture() {
        let best = find_best_subsequence(&GraphConfig::toy(), &[0, 1, 2]).unwrap();
        assert_eq!(best.value, 2.0);
        assert_eq!(best.saved_length, 0.0);
        assert_eq!(best.start, 0);
        assert_eq!(best.end, 1);
    }

    #[test]
    fn test_tour_length_mismatch() {
        let result = find_best_subsequence(&GraphConfig::toy(), &[0, 1]);
        assert_eq!(result, Err(TspError::TourLengthMismatch));
    }

    #[test]
    fn test_budget_below_any_edge_degenerates_to_seed() {
        let cfg = config(
            vec![
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
            ],
            vec![1.0, 1.0, 1.0],
            0.5,
        );
        let best = find_best_subsequence(&cfg, &[0, 1, 2]).unwrap();
        assert_eq!(best.value, 1.0);
        assert_eq!(best.saved_length, 0.5);
        assert_eq!((best.start, best.end), (0, 0));
    }

    #[test]
    fn test_picks_high_value_pair() {
        // Two-city windows all cost 1; the {1, 2} pair carries the value.
        let cfg = config(
            vec![
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
            ],
            vec![1.0, 5.0, 1.0],
            1.0,
        );
        let best = find_best_subsequence(&cfg, &[0, 1, 2]).unwrap();
        assert_eq!(best.value, 6.0);
        assert_eq!(best.saved_length, 0.0);
        assert_eq!((best.start, best.end), (0, 1));
    }

    #[test]
    fn test_large_budget_takes_all_cities_without_closing() {
        // Budget covers the whole tour; the best window is all n cities
        // over n-1 edges, never the closed cycle.
        let cfg = config(
            vec![
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
            ],
            vec![1.0, 1.0, 1.0],
            10.0,
        );
        let best = find_best_subsequence(&cfg, &[0, 1, 2]).unwrap();
        assert_eq!(best.value, 3.0);
        assert_eq!(best.saved_length, 8.0);
        assert_eq!((best.start, best.end), (0, 2));
    }

    #[test]
    fn test_wrapping_window() {
        // Cheap edge only from city 2 back to city 0, so the best window
        // wraps around the end of the tour.
        let cfg = config(
            vec![
                vec![0.0, 9.0, 9.0],
                vec![9.0, 0.0, 9.0],
                vec![1.0, 9.0, 0.0],
            ],
            vec![4.0, 1.0, 4.0],
            1.5,
        );
        let best = find_best_subsequence(&cfg, &[0, 1, 2]).unwrap();
        assert_eq!(best.value, 8.0);
        assert_eq!(best.saved_length, 0.5);
        assert_eq!((best.start, best.end), (2, 0));
    }

    #[test]
    fn test_asymmetric_weights_direction_matters() {
        // 0 -> 1 is cheap, 1 -> 0 is expensive; only the forward window fits.
        let cfg = config(
            vec![vec![0.0, 1.0], vec![10.0, 0.0]],
            vec![2.0, 3.0],
            1.0,
        );
        let best = find_best_subsequence(&cfg, &[0, 1]).unwrap();
        assert_eq!(best.value, 5.0);
        assert_eq!(best.saved_length, 0.0);
        assert_eq!((best.start, best.end), (0, 1));
    }

    #[test]
    fn test_result_window_bookkeeping_matches_tour() {
        let cfg = config(
            vec![
                vec![0.0, 2.0, 4.0, 1.0],
                vec![3.0, 0.0, 1.0, 2.0],
                vec![2.0, 2.0, 0.0, 3.0],
                vec![1.0, 4.0, 2.0, 0.0],
            ],
            vec![1.0, 3.0, 2.0, 5.0],
            4.0,
        );
        let tour = [2, 0, 3, 1];
        let best = find_best_subsequence(&cfg, &tour).unwrap();
        let (value, length) = recompute(&cfg, &tour, best.start, best.end);
        assert!((best.value - value).abs() < 1e-9);
        assert!((best.saved_length - (cfg.max_path_length() - length)).abs() < 1e-9);
        assert!(best.saved_length >= 0.0);
    }

    #[test]
    fn test_deterministic() {
        let cfg = config(
            vec![
                vec![0.0, 0.7, 1.3],
                vec![0.7, 0.0, 0.9],
                vec![1.3, 0.9, 0.0],
            ],
            vec![0.2, 0.8, 0.5],
            1.6,
        );
        let a = find_best_subsequence(&cfg, &[1, 0, 2]).unwrap();
        let b = find_best_subsequence(&cfg, &[1, 0, 2]).unwrap();
        assert_eq!(a, b);
    }
}
