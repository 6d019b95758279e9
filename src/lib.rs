//! Multi-objective 0-1 knapsack: bi-objective two-phase Pareto solving and
//! tri-objective exact A* branch-and-bound over a shared layered DP DAG.

pub mod bi;
pub mod bound_set;
pub mod cardinality;
pub mod dag;
pub mod dp_plain;
pub mod error;
pub mod fixing;
pub mod instance;
pub mod io;
pub mod maxset;
pub mod nondominated;
pub mod phase1;
pub mod phase2;
pub mod ranking;
pub mod real;
pub mod relax;
pub mod solution;
pub mod tri;
pub mod triangle;
pub mod vector;
pub mod views;
pub mod weightset;

pub use bi::solve_bi;
pub use error::{KnapsackError, Result};
pub use instance::{Instance, Item};
pub use nondominated::{InsertOutcome, ParetoSet};
pub use real::Real;
pub use solution::{BinarySolution, KnapsackSolution, SolutionValue, Trit};
pub use tri::{solve_tri, OrderName};
pub use vector::CostVector;
