//! Error taxonomy for the knapsack core (spec.md §7).
//!
//! `InfeasibleForcing` is recovered locally inside variable fixing and never
//! escapes to a `Result` returned by the orchestrator; it is still a variant
//! here so fixing routines can propagate it with `?` before catching it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("infeasible forcing: {0}")]
    InfeasibleForcing(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
