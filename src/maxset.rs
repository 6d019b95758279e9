//! Maximum and minimum complete sets of solutions.
//!
//! Ground truth: spec.md §4.1's "Multi-solution set", grounded on
//! `moo::pareto_set` extended with a parallel solution list, as in
//! `bikp::knapsack_solution` containers in the original source.

use crate::nondominated::{InsertOutcome, ParetoSet};
use crate::solution::KnapsackSolution;
use crate::vector::dominance;

/// A set keeping every feasible solution mapping to a non-dominated point.
/// Equality between two such sets is set equality on the binary solutions
/// they contain (spec.md §3).
#[derive(Debug, Clone, Default)]
pub struct MaximumSet {
    images: ParetoSet,
    /// Every accepted solution, including extra equivalents sharing an
    /// image already present in `images`.
    solutions: Vec<KnapsackSolution>,
    multi_solutions: bool,
}

impl MaximumSet {
    pub fn new(multi_solutions: bool) -> Self {
        MaximumSet {
            images: ParetoSet::new(),
            solutions: Vec::new(),
            multi_solutions,
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnapsackSolution> {
        self.solutions.iter()
    }

    /// Inserts `candidate`. If its image is rejected by the underlying
    /// `ParetoSet` but equals an existing image, and multi-solutions is
    /// enabled, `candidate` is appended as an equivalent. If accepted, every
    /// stored solution whose image was removed by the insert is dropped.
    pub fn insert(&mut self, candidate: KnapsackSolution) -> InsertOutcome {
        let cand_cost = candidate.value().cost.clone();
        let outcome = self.images.insert(candidate.clone());

        match outcome {
            InsertOutcome::Dominated => InsertOutcome::Dominated,
            InsertOutcome::Duplicate => {
                if self.multi_solutions {
                    self.solutions.push(candidate);
                }
                InsertOutcome::Duplicate
            }
            InsertOutcome::Added => {
                self.solutions
                    .retain(|s| !matches!(dominance(&cand_cost, &s.value().cost), crate::vector::Dominance::Strict | crate::vector::Dominance::Weak));
                self.solutions.push(candidate);
                InsertOutcome::Added
            }
        }
    }

    pub fn into_solutions(self) -> Vec<KnapsackSolution> {
        self.solutions
    }
}

/// A set of feasible solutions with at most one per non-dominated cost
/// point (spec.md §3).
#[derive(Debug, Clone, Default)]
pub struct MinimumSet {
    images: ParetoSet,
}

impl MinimumSet {
    pub fn new() -> Self {
        MinimumSet { images: ParetoSet::new() }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn insert(&mut self, candidate: KnapsackSolution) -> InsertOutcome {
        self.images.insert(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnapsackSolution> {
        self.images.iter()
    }

    pub fn into_vec(self) -> Vec<KnapsackSolution> {
        self.images.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{Instance, Item};
    use crate::real::Real;
    use crate::solution::{BinarySolution, Trit};
    use crate::vector::CostVector;

    fn inst() -> Instance {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(3.0), Real::new(1.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(3.0)]), Real::new(2.0)),
        ];
        Instance::new(items, Real::new(4.0), 2).unwrap()
    }

    fn sol_of(inst: &Instance, item: usize) -> KnapsackSolution {
        let mut bs = BinarySolution::new(inst.size());
        bs.set_status(item, Trit::Set);
        KnapsackSolution::from_binary(inst, bs)
    }

    #[test]
    fn multi_solutions_tracks_equivalents() {
        let inst = inst();
        let mut a = BinarySolution::new(inst.size());
        a.set_status(0, Trit::Set);
        a.set_status(1, Trit::Unset);
        let sol_a = KnapsackSolution::from_binary(&inst, a);

        let mut b = BinarySolution::new(inst.size());
        b.set_status(0, Trit::Set);
        b.set_status(1, Trit::Free);
        let sol_b = KnapsackSolution::from_binary(&inst, b);

        let mut set = MaximumSet::new(true);
        assert_eq!(set.insert(sol_a), InsertOutcome::Added);
        assert_eq!(set.insert(sol_b), InsertOutcome::Duplicate);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn single_solution_mode_drops_equivalents() {
        let inst = inst();
        let mut set = MaximumSet::new(false);
        set.insert(sol_of(&inst, 0));
        let mut b = BinarySolution::new(inst.size());
        b.set_status(0, Trit::Set);
        b.set_status(1, Trit::Free);
        assert_eq!(set.insert(KnapsackSolution::from_binary(&inst, b)), InsertOutcome::Duplicate);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn minimum_set_keeps_one_per_image() {
        let inst = inst();
        let mut set = MinimumSet::new();
        set.insert(sol_of(&inst, 0));
        set.insert(sol_of(&inst, 1));
        assert_eq!(set.len(), 2);
    }
}
