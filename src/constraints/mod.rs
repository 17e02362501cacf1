//! Per-encoding feasibility constraints, including MTZ subtour elimination.

mod builder;

pub use builder::build_constraints;
