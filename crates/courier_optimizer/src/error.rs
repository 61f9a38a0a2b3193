use thiserror::Error;

use crate::problem::node::NodeIdx;

/// Malformed input, detected before any search runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("Travel matrix is empty")]
    EmptyMatrix,

    #[error("Travel matrix is not square: row {row} has {actual} columns, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Time window of node {node} is inverted: {earliest} > {latest}")]
    InvertedTimeWindow {
        node: NodeIdx,
        earliest: i64,
        latest: i64,
    },

    #[error("At least one vehicle is required")]
    NoVehicles,

    #[error("Expected {expected} {what}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Negative travel time from node {from} to node {to}")]
    NegativeTravelTime { from: NodeIdx, to: NodeIdx },

    #[error("Negative service duration at node {node}")]
    NegativeServiceDuration { node: NodeIdx },

    #[error("Travel matrix provider failed: {0}")]
    MatrixProvider(String),
}

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Invalid instance: {0}")]
    InvalidInstance(#[from] InstanceError),

    #[error("No assignment could be constructed for this instance")]
    Infeasible,
}

impl From<courier_matrix_providers::error::MatrixProviderError> for OptimizerError {
    fn from(err: courier_matrix_providers::error::MatrixProviderError) -> Self {
        OptimizerError::InvalidInstance(InstanceError::MatrixProvider(err.to_string()))
    }
}
