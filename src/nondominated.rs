//! Pareto sets: dominance-closed collections of solutions.
//!
//! Ground truth: `moo::pareto_set<T>` (the original keeps a lexicographically
//! sorted vector and deletes dominated entries on insert, the "textbook"
//! approach from Ehrgott; spec.md §4.2 keeps the same contract).

use crate::solution::KnapsackSolution;
use crate::vector::{dominance, Dominance};

/// Outcome of inserting a candidate into a `ParetoSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The candidate was dominated (weakly or strictly) by an existing member
    /// and was rejected.
    Dominated,
    /// The candidate was added; it may have displaced some existing members
    /// that it dominates.
    Added,
    /// A member with an equal image was already present; the candidate is
    /// tracked as an equivalent but does not change membership count.
    Duplicate,
}

/// A set of solutions, none of which dominates another, ordered
/// lexicographically by cost.
#[derive(Debug, Clone, Default)]
pub struct ParetoSet {
    members: Vec<KnapsackSolution>,
}

impl ParetoSet {
    pub fn new() -> Self {
        ParetoSet { members: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnapsackSolution> {
        self.members.iter()
    }

    pub fn into_vec(self) -> Vec<KnapsackSolution> {
        self.members
    }

    /// Attempts to insert `candidate`. Removes any existing member
    /// dominated by `candidate`; rejects `candidate` if any existing member
    /// dominates it or equals it.
    pub fn insert(&mut self, candidate: KnapsackSolution) -> InsertOutcome {
        let cand_cost = &candidate.value().cost;
        for existing in &self.members {
            match dominance(&existing.value().cost, cand_cost) {
                Dominance::Strict | Dominance::Weak => return InsertOutcome::Dominated,
                Dominance::Equal => return InsertOutcome::Duplicate,
                Dominance::None => {}
            }
        }
        self.members
            .retain(|existing| !matches!(dominance(cand_cost, &existing.value().cost), Dominance::Strict | Dominance::Weak));
        let pos = self
            .members
            .binary_search_by(|m| m.value().cost.cmp(cand_cost))
            .unwrap_or_else(|e| e);
        self.members.insert(pos, candidate);
        InsertOutcome::Added
    }

    /// Merges another set into this one, solution by solution.
    pub fn merge(&mut self, other: ParetoSet) {
        for sol in other.members {
            self.insert(sol);
        }
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
    fn mutually_nondominated_solutions_both_kept() {
        let inst = inst();
        let mut set = ParetoSet::new();
        assert_eq!(set.insert(sol_of(&inst, 0)), InsertOutcome::Added);
        assert_eq!(set.insert(sol_of(&inst, 1)), InsertOutcome::Added);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn dominated_candidate_rejected() {
        let inst = inst();
        let mut bs_both = BinarySolution::new(inst.size());
        bs_both.set_status(0, Trit::Set);
        bs_both.set_status(1, Trit::Set);
        let both = KnapsackSolution::from_binary(&inst, bs_both);

        let mut set = ParetoSet::new();
        assert_eq!(set.insert(both), InsertOutcome::Added);
        assert_eq!(set.insert(sol_of(&inst, 0)), InsertOutcome::Dominated);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicate_image_does_not_grow_set() {
        let inst = inst();
        let mut set = ParetoSet::new();
        assert_eq!(set.insert(sol_of(&inst, 0)), InsertOutcome::Added);
        assert_eq!(set.insert(sol_of(&inst, 0)), InsertOutcome::Duplicate);
        assert_eq!(set.len(), 1);
    }
}
