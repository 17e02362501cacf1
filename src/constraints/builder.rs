//! Per-encoding feasibility constraint generation.

use crate::encoding::{arc_index, Encoding};
use crate::error::TspError;
use crate::graph::GraphConfig;

/// Builds the feasibility-constraint vector for a raw chromosome.
///
/// The vector shape follows [`Encoding::constraint_dimensions`]: equality
/// constraints first (satisfied at exactly zero), inequality constraints
/// last (satisfied when non-positive).
///
/// - `Full`: one-outgoing and one-incoming equality constraint per city,
///   then the MTZ subtour-elimination inequalities.
/// - `RandomKeys`: an empty vector — every key vector decodes to a valid
///   tour, so feasibility is implicit.
/// - `Cities`: a single entry, `0.0` iff the genes are exactly a
///   permutation of `0..n`, else `1.0`.
///
/// Constraint values are ordinary numbers surfaced to the caller for
/// penalty or feasibility handling; a violated constraint is not an error.
///
/// # Errors
///
/// Returns [`TspError::ChromosomeLengthMismatch`] if the chromosome length
/// does not match the encoding's layout.
pub fn build_constraints(config: &GraphConfig, chromosome: &[f64]) -> Result<Vec<f64>, TspError> {
    let n = config.num_cities();
    let encoding = config.encoding();
    let expected = encoding.chromosome_len(n);
    if chromosome.len() != expected {
        return Err(TspError::ChromosomeLengthMismatch {
            expected,
            actual: chromosome.len(),
        });
    }

    Ok(match encoding {
        Encoding::RandomKeys => Vec::new(),
        Encoding::Cities => {
            vec![if is_permutation(chromosome, n) { 0.0 } else { 1.0 }]
        }
        Encoding::Full => full_constraints(chromosome, n),
    })
}

/// True iff the genes are exactly the integers `0..n` in some order.
fn is_permutation(genes: &[f64], n: usize) -> bool {
    let mut seen = vec![false; n];
    for &g in genes {
        // Fractional, negative, NaN, and out-of-range genes all fail here.
        if !(g.fract() == 0.0 && g >= 0.0 && g < n as f64) {
            return false;
        }
        let city = g as usize;
        if seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

fn full_constraints(x: &[f64], n: usize) -> Vec<f64> {
    let dims = Encoding::Full.constraint_dimensions(n);
    let mut c = Vec::with_capacity(dims.total);

    // Exactly one selected outgoing arc per city...
    for i in 0..n {
        let outgoing: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| x[arc_index(i, j, n)])
            .sum();
        c.push(outgoing - 1.0);
    }
    // ...and exactly one incoming.
    for i in 0..n {
        let incoming: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| x[arc_index(j, i, n)])
            .sum();
        c.push(incoming - 1.0);
    }

    // MTZ order labels: walk the selected arcs from city 0. The walk takes
    // exactly n steps and assumes the assignment is a single cycle
    // reachable from city 0; anything else mislabels (but terminates).
    let mut u = vec![0_i64; n];
    let mut current = 0_usize;
    let mut next = 0_usize;
    for step in 0..n {
        u[current] = step as i64 + 1;
        for j in 0..n {
            if j == current {
                continue;
            }
            if x[arc_index(current, j, n)] == 1.0 {
                next = j;
                break;
            }
        }
        current = next;
    }

    // u[i] - u[j] + (n+1) * x[i->j] - n <= 0 for all ordered pairs in 1..n
    for i in 1..n {
        for j in 1..n {
            if i == j {
                continue;
            }
            c.push(
                (u[i] - u[j]) as f64 + (n as f64 + 1.0) * x[arc_index(i, j, n)] - n as f64,
            );
        }
    }

    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightMatrix;

    fn config(n: usize, encoding: Encoding) -> GraphConfig {
        let weights = WeightMatrix::complete(n, 1.0).unwrap();
        GraphConfig::new(weights, vec![1.0; n], 2.0, encoding).unwrap()
    }

    /// Arc-selection chromosome for the cycle visiting `perm` in order.
    fn cycle_chromosome(perm: &[usize]) -> Vec<f64> {
        let n = perm.len();
        let mut x = vec![0.0; Encoding::Full.chromosome_len(n)];
        for k in 0..n {
            x[arc_index(perm[k], perm[(k + 1) % n], n)] = 1.0;
        }
        x
    }

    #[test]
    fn test_random_keys_no_constraints() {
        let cfg = config(4, Encoding::RandomKeys);
        let c = build_constraints(&cfg, &[0.3, 0.1, 0.9, 0.5]).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_cities_valid_permutation() {
        let cfg = config(4, Encoding::Cities);
        let c = build_constraints(&cfg, &[2.0, 0.0, 3.0, 1.0]).unwrap();
        assert_eq!(c, vec![0.0]);
    }

    #[test]
    fn test_cities_duplicate_rejected() {
        let cfg = config(4, Encoding::Cities);
        let c = build_constraints(&cfg, &[2.0, 0.0, 2.0, 1.0]).unwrap();
        assert_eq!(c, vec![1.0]);
    }

    #[test]
    fn test_cities_out_of_range_rejected() {
        let cfg = config(4, Encoding::Cities);
        let c = build_constraints(&cfg, &[2.0, 0.0, 4.0, 1.0]).unwrap();
        assert_eq!(c, vec![1.0]);
        let c = build_constraints(&cfg, &[2.0, -1.0, 3.0, 1.0]).unwrap();
        assert_eq!(c, vec![1.0]);
    }

    #[test]
    fn test_cities_fractional_rejected() {
        let cfg = config(4, Encoding::Cities);
        let c = build_constraints(&cfg, &[2.0, 0.5, 3.0, 1.0]).unwrap();
        assert_eq!(c, vec![1.0]);
    }

    #[test]
    fn test_cities_nan_rejected() {
        let cfg = config(4, Encoding::Cities);
        let c = build_constraints(&cfg, &[2.0, f64::NAN, 3.0, 1.0]).unwrap();
        assert_eq!(c, vec![1.0]);
    }

    #[test]
    fn test_full_feasible_cycle_satisfies_everything() {
        let cfg = config(4, Encoding::Full);
        let x = cycle_chromosome(&[0, 2, 1, 3]);
        let c = build_constraints(&cfg, &x).unwrap();

        let dims = Encoding::Full.constraint_dimensions(4);
        assert_eq!(c.len(), dims.total);
        for &eq in &c[..dims.equality()] {
            assert_eq!(eq, 0.0);
        }
        for &ineq in &c[dims.equality()..] {
            assert!(ineq <= 0.0, "MTZ constraint violated: {ineq}");
        }
    }

    #[test]
    fn test_full_missing_arc_breaks_degree_constraints() {
        let cfg = config(4, Encoding::Full);
        let mut x = cycle_chromosome(&[0, 1, 2, 3]);
        x[arc_index(1, 2, 4)] = 0.0;
        let c = build_constraints(&cfg, &x).unwrap();

        // City 1 has no outgoing arc, city 2 no incoming arc.
        assert_eq!(c[1], -1.0);
        assert_eq!(c[4 + 2], -1.0);
    }

    #[test]
    fn test_full_two_subtours_violate_mtz() {
        // Two disjoint 2-cycles: 0 <-> 1 and 2 <-> 3. Degree constraints
        // all hold; only the MTZ inequalities expose the disconnection.
        let n = 4;
        let cfg = config(n, Encoding::Full);
        let mut x = vec![0.0; Encoding::Full.chromosome_len(n)];
        x[arc_index(0, 1, n)] = 1.0;
        x[arc_index(1, 0, n)] = 1.0;
        x[arc_index(2, 3, n)] = 1.0;
        x[arc_index(3, 2, n)] = 1.0;

        let c = build_constraints(&cfg, &x).unwrap();
        let dims = Encoding::Full.constraint_dimensions(n);
        for &eq in &c[..dims.equality()] {
            assert_eq!(eq, 0.0);
        }
        assert!(
            c[dims.equality()..].iter().any(|&ineq| ineq > 0.0),
            "disconnected subtours must violate at least one MTZ constraint"
        );
    }

    #[test]
    fn test_full_constraint_ordering_matches_dims() {
        for n in [3, 4, 5] {
            let cfg = config(n, Encoding::Full);
            let perm: Vec<usize> = (0..n).collect();
            let c = build_constraints(&cfg, &cycle_chromosome(&perm)).unwrap();
            let dims = Encoding::Full.constraint_dimensions(n);
            assert_eq!(c.len(), dims.total);
            assert_eq!(dims.total - dims.inequality, 2 * n);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let cfg = config(4, Encoding::Full);
        let result = build_constraints(&cfg, &[0.0; 11]);
        assert_eq!(
            result,
            Err(TspError::ChromosomeLengthMismatch {
                expected: 12,
                actual: 11
            })
        );
    }
}
