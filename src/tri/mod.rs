//! The tri-objective exact solver: an A*-style best-first branch-and-bound
//! built on top of the bi-objective phase-1.
//!
//! Ground truth: spec.md §4.9.

pub mod astar;
pub mod node;

pub use crate::views::order::OrderName;
use crate::error::Result;
use crate::instance::Instance;
use crate::solution::KnapsackSolution;

/// Computes every efficient solution of a tri-objective 0-1 knapsack
/// instance, branching on items in the given order.
pub fn solve_tri(instance: &Instance, order: OrderName) -> Result<Vec<KnapsackSolution>> {
    if instance.nb_objectives() != 3 {
        return Err(crate::error::KnapsackError::InvariantViolation(
            "solve_tri requires a three-objective instance".to_string(),
        ));
    }
    astar::run(instance, order)
}
