//! # tsp-select
//!
//! City-selection travelling salesman problem (TSP-CS): given a weighted
//! graph of cities, a value per city, and a maximum path length, find the
//! best-value contiguous stretch of a Hamiltonian tour that fits within
//! the length budget.
//!
//! The crate covers the evaluation side of the problem — validation,
//! chromosome decoding, the optimal-subsequence search, and feasibility
//! constraints — and leaves the surrounding search algorithm to the
//! caller, which drives it through the [`problem::Problem`] interface.
//!
//! ## Modules
//!
//! - [`graph`] — Validated weight matrix, city values, and budget
//! - [`encoding`] — Chromosome encodings (Full, RandomKeys, Cities), decoding, generation
//! - [`evaluation`] — Optimal subsequence search over a decoded tour
//! - [`constraints`] — Per-encoding feasibility constraints (MTZ subtour elimination)
//! - [`problem`] — Problem facade and evaluation trait
//!
//! ## Example
//!
//! ```
//! use tsp_select::encoding::Encoding;
//! use tsp_select::problem::CitySelectTsp;
//!
//! let problem = CitySelectTsp::new(
//!     vec![
//!         vec![0.0, 2.0, 5.0],
//!         vec![2.0, 0.0, 3.0],
//!         vec![5.0, 3.0, 0.0],
//!     ],
//!     vec![1.0, 4.0, 2.0],
//!     4.0,
//!     Encoding::Cities,
//! )?;
//!
//! let fitness = problem.evaluate_fitness(&[0.0, 1.0, 2.0])?;
//! assert!(fitness < 0.0);
//! # Ok::<(), tsp_select::TspError>(())
//! ```

pub mod constraints;
pub mod encoding;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod problem;

pub use error::TspError;
