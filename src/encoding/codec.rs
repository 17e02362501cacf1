//! Chromosome decoding and random generation.

use rand::Rng;

use crate::error::TspError;

use super::Encoding;

/// Index of the arc `(i, j)` in a `Full`-encoding chromosome.
///
/// Ordered pairs with `i != j` are laid out row by row with the diagonal
/// omitted, giving a bijection onto `0..n*(n-1)`.
///
/// # Panics
///
/// Panics in debug builds if `i == j` or either index is `>= n`.
pub fn arc_index(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i != j && i < n && j < n);
    i * (n - 1) + j - usize::from(j > i)
}

/// Decodes a chromosome into a tour: a sequence of `n` city indices.
///
/// - `Cities` chromosomes already are tours; genes are cast to indices.
/// - `RandomKeys` chromosomes are argsorted: the tour visits cities in
///   ascending key order.
/// - `Full` chromosomes are walked from city 0, following the arc whose
///   gene equals `1.0` out of each city.
///
/// Decoding never verifies that the result is a Hamiltonian tour. A
/// `Cities` chromosome with duplicates, or a `Full` assignment that is not
/// a single cycle, decodes to an unspecified (but deterministic and
/// terminating) tour; such chromosomes are flagged by the constraint
/// vector, not here.
///
/// # Errors
///
/// Returns [`TspError::ChromosomeLengthMismatch`] if the chromosome length
/// differs from [`Encoding::chromosome_len`].
pub fn decode(encoding: Encoding, chromosome: &[f64], n: usize) -> Result<Vec<usize>, TspError> {
    let expected = encoding.chromosome_len(n);
    if chromosome.len() != expected {
        return Err(TspError::ChromosomeLengthMismatch {
            expected,
            actual: chromosome.len(),
        });
    }

    Ok(match encoding {
        Encoding::Cities => chromosome.iter().map(|&g| g as usize).collect(),
        Encoding::RandomKeys => argsort(chromosome),
        Encoding::Full => walk_arcs(chromosome, n),
    })
}

fn argsort(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    order
}

/// Follows `gene == 1.0` arcs starting from city 0. Always takes exactly
/// `n` steps; if a city has no selected outgoing arc the walk falls through
/// to the next index so it still terminates.
fn walk_arcs(x: &[f64], n: usize) -> Vec<usize> {
    let mut tour = Vec::with_capacity(n);
    let mut current = 0;
    for _ in 0..n {
        tour.push(current);
        let next = (0..n)
            .filter(|&j| j != current)
            .find(|&j| x[arc_index(current, j, n)] == 1.0);
        current = next.unwrap_or((current + 1) % n);
    }
    tour
}

/// Draws a random chromosome for the given encoding.
///
/// `Cities` yields a uniform random permutation, `RandomKeys` uniform keys
/// in `[0, 1)`, and `Full` the arc matrix of a random permutation — a
/// feasible single-cycle assignment.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use tsp_select::encoding::{decode, random_chromosome, Encoding};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let keys = random_chromosome(Encoding::RandomKeys, 5, &mut rng);
/// let tour = decode(Encoding::RandomKeys, &keys, 5).unwrap();
/// assert_eq!(tour.len(), 5);
/// ```
pub fn random_chromosome<R: Rng>(encoding: Encoding, n: usize, rng: &mut R) -> Vec<f64> {
    match encoding {
        Encoding::Cities => random_permutation(n, rng)
            .into_iter()
            .map(|city| city as f64)
            .collect(),
        Encoding::RandomKeys => (0..n).map(|_| rng.random::<f64>()).collect(),
        Encoding::Full => {
            let perm = random_permutation(n, rng);
            let mut x = vec![0.0; Encoding::Full.chromosome_len(n)];
            for k in 0..n {
                let from = perm[k];
                let to = perm[(k + 1) % n];
                if from != to {
                    x[arc_index(from, to, n)] = 1.0;
                }
            }
            x
        }
    }
}

// Fisher-Yates shuffle
fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }
    perm
}
