//! Variable fixing: each fixing produces a sub-instance on a keep-set of
//! free indices, a guaranteed profit vector, and maps solutions back.
//!
//! Ground truth: spec.md §4.4, grounded on
//! `bikp/reduction/mtr_variable_fixing.hpp` /
//! `simple_variable_fixing.hpp` (SPEC_FULL.md §3).

pub mod bound_set_fixing;
pub mod combined;
pub mod directional;
pub mod mtr;
pub mod simple;

pub use bound_set_fixing::BoundSetFixing;
pub use combined::CombinedFixing;
pub use directional::DirectionalFixing;
pub use mtr::MtrFixing;
pub use simple::SimpleFixing;

use crate::real::Real;
use crate::vector::CostVector;

/// The outcome of a fixing pass: the indices to keep free, the set of
/// indices forced to 1 ("set"), and the guaranteed profit vector
/// accumulated from the forced items.
#[derive(Debug, Clone)]
pub struct FixingResult {
    pub free: Vec<usize>,
    pub forced_set: Vec<usize>,
    pub guaranteed_profit: CostVector,
    pub residual_capacity: Real,
}
