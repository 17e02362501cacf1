//! Validated problem data: weight matrix, city values, budget, encoding.

mod config;
mod matrix;

pub use config::GraphConfig;
pub use matrix::WeightMatrix;
