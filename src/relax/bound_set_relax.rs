//! Bound-set relaxation: checks whether fixing a variable can still improve
//! on a lower-bound set. Ground truth: spec.md §4.3.

use crate::bound_set::BoundSet;
use crate::instance::Instance;
use crate::phase1;
use crate::vector::{dominance, Dominance};

pub struct BoundSetRelaxation;

impl BoundSetRelaxation {
    /// Solves the reduced bi-objective instance induced by `fixed_in`
    /// (item forced into the knapsack) via phase-1, producing an
    /// upper-bound set `U`, then returns whether `U` strictly dominates `L`
    /// at some point.
    pub fn improves(reduced: &Instance, lower_bound: &BoundSet) -> bool {
        let upper = match phase1::solve(reduced) {
            Ok(frontier) => frontier,
            Err(_) => return true,
        };
        if lower_bound.is_empty() {
            return !upper.is_empty();
        }
        upper.iter().any(|u| {
            lower_bound
                .iter()
                .any(|l| matches!(dominance(u, l), Dominance::Strict | Dominance::Weak) && u != l)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;
    use crate::real::Real;
    use crate::vector::CostVector;

    #[test]
    fn empty_lower_bound_is_improved_by_any_nonempty_frontier() {
        let items = vec![Item::new(0, CostVector::from_vec(vec![Real::new(3.0), Real::new(3.0)]), Real::new(2.0))];
        let inst = Instance::new(items, Real::new(4.0), 2).unwrap();
        let lb = BoundSet::new();
        assert!(BoundSetRelaxation::improves(&inst, &lb));
    }
}
