//! Chromosome encodings and their decoding into tours.
//!
//! A candidate solution reaches the problem as a flat `&[f64]` chromosome.
//! How that slice is laid out — and which feasibility constraints apply —
//! depends on the [`Encoding`]:
//!
//! - [`Full`](Encoding::Full) — explicit 0/1 arc-selection over all ordered
//!   city pairs (diagonal omitted)
//! - [`RandomKeys`](Encoding::RandomKeys) — continuous sort keys; the tour
//!   is the argsort of the keys
//! - [`Cities`](Encoding::Cities) — direct permutation of city indices

mod codec;

pub use codec::{arc_index, decode, random_chromosome};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chromosome layout used to represent a candidate tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// Explicit 0/1 arc-selection matrix over all ordered city pairs.
    Full,
    /// Continuous sort keys in `[0, 1)`; decoding sorts city indices by key.
    RandomKeys,
    /// Direct permutation of city indices.
    Cities,
}

impl Encoding {
    /// Chromosome length for an `n`-city instance.
    ///
    /// `Full` uses one gene per ordered city pair (diagonal omitted); the
    /// other encodings use one gene per city.
    pub fn chromosome_len(self, n: usize) -> usize {
        match self {
            Encoding::Full => n * n.saturating_sub(1),
            Encoding::RandomKeys | Encoding::Cities => n,
        }
    }

    /// Shape of the constraint vector for an `n`-city instance.
    pub fn constraint_dimensions(self, n: usize) -> ConstraintDims {
        match self {
            Encoding::Full => ConstraintDims {
                total: n * n.saturating_sub(1) + 2,
                inequality: n.saturating_sub(1) * n.saturating_sub(2),
            },
            Encoding::RandomKeys => ConstraintDims {
                total: 0,
                inequality: 0,
            },
            Encoding::Cities => ConstraintDims {
                total: 1,
                inequality: 0,
            },
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Full => "FULL",
            Encoding::RandomKeys => "RANDOMKEYS",
            Encoding::Cities => "CITIES",
        };
        f.write_str(name)
    }
}

/// Shape of the constraint vector produced for an encoding.
///
/// Equality constraints come first in the vector, inequality constraints
/// last, so `total - inequality` leading entries are equalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintDims {
    /// Total number of constraints.
    pub total: usize,
    /// Number of trailing inequality constraints.
    pub inequality: usize,
}

impl ConstraintDims {
    /// Number of leading equality constraints.
    pub fn equality(self) -> usize {
        self.total - self.inequality
    }
}
