pub mod diagnostics;
pub mod error;
pub mod history;
pub mod json;
pub mod plan;
pub mod problem;
pub mod reoptimize;
pub mod solution;
pub mod solver;
mod utils;

pub use error::{InstanceError, OptimizerError};
pub use solver::solve;

#[cfg(test)]
pub(crate) mod test_utils;
