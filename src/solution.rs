//! Trit-valued binary solutions and cached-value knapsack solutions.
//!
//! Ground truth: `moo::binary_solution` / `moo::bin_status` and
//! `kp::solution_value` / `kp::knapsack_solution`. The trit replaces the
//! original's C++ enum with a small tagged variant, per spec.md §9's design
//! note.

use crate::instance::Instance;
use crate::real::Real;
use crate::vector::{lex_cmp, CostVector};
use serde::Serialize;
use std::cmp::Ordering;

/// Status of a single decision variable. Order is `Free < Unset < Set`
/// (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trit {
    Free,
    Unset,
    Set,
}

/// A length-n vector of trits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySolution {
    trits: Vec<Trit>,
}

impl BinarySolution {
    pub fn new(n: usize) -> Self {
        BinarySolution {
            trits: vec![Trit::Free; n],
        }
    }

    pub fn len(&self) -> usize {
        self.trits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trits.is_empty()
    }

    pub fn status_of(&self, i: usize) -> Trit {
        self.trits[i]
    }

    pub fn set_status(&mut self, i: usize, s: Trit) {
        self.trits[i] = s;
    }

    /// `true` iff no trit is `Free`.
    pub fn is_full(&self) -> bool {
        self.trits.iter().all(|&t| t != Trit::Free)
    }

    pub fn cardinality(&self) -> usize {
        self.trits.iter().filter(|&&t| t == Trit::Set).count()
    }

    pub fn is_feasible(&self, inst: &Instance) -> bool {
        self.weight(inst) <= inst.capacity()
    }

    pub fn weight(&self, inst: &Instance) -> Real {
        (0..self.trits.len())
            .filter(|&i| self.trits[i] == Trit::Set)
            .map(|i| inst.item(i).weight)
            .sum()
    }

    pub fn image(&self, inst: &Instance) -> CostVector {
        let mut acc = CostVector::zeros(inst.nb_objectives());
        for i in 0..self.trits.len() {
            if self.trits[i] == Trit::Set {
                acc = &acc + &inst.item(i).cost;
            }
        }
        acc
    }

    pub fn iter(&self) -> impl Iterator<Item = Trit> + '_ {
        self.trits.iter().copied()
    }
}

impl PartialOrd for BinarySolution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinarySolution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.trits.cmp(&other.trits)
    }
}

/// A cost vector plus the accumulated weight (spec.md §3); equality is
/// component-wise, order is cost-first then weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionValue {
    pub cost: CostVector,
    pub weight: Real,
}

impl SolutionValue {
    pub fn zero(p: usize) -> Self {
        SolutionValue {
            cost: CostVector::zeros(p),
            weight: Real::ZERO,
        }
    }
}

impl Eq for SolutionValue {}

impl PartialOrd for SolutionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SolutionValue {
    fn cmp(&self, other: &Self) -> Ordering {
        lex_cmp(&self.cost, &other.cost).then_with(|| self.weight.partial_cmp(&other.weight).unwrap())
    }
}

impl Serialize for CostVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let values: Vec<f64> = self.as_slice().iter().map(|r| r.value()).collect();
        values.serialize(serializer)
    }
}

impl Serialize for Real {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

/// A `BinarySolution` paired with an incrementally maintained `SolutionValue`
/// (spec.md §3: "value equals the sum over items whose trit is set").
#[derive(Debug, Clone, Serialize)]
pub struct KnapsackSolution {
    #[serde(skip)]
    binary: BinarySolution,
    value: SolutionValue,
}

impl KnapsackSolution {
    pub fn new(n: usize, p: usize) -> Self {
        KnapsackSolution {
            binary: BinarySolution::new(n),
            value: SolutionValue::zero(p),
        }
    }

    pub fn from_binary(inst: &Instance, binary: BinarySolution) -> Self {
        let weight = binary.weight(inst);
        let cost = binary.image(inst);
        KnapsackSolution {
            binary,
            value: SolutionValue { cost, weight },
        }
    }

    pub fn binary(&self) -> &BinarySolution {
        &self.binary
    }

    pub fn value(&self) -> &SolutionValue {
        &self.value
    }

    pub fn set(&mut self, inst: &Instance, i: usize) {
        debug_assert_ne!(self.binary.status_of(i), Trit::Set);
        self.binary.set_status(i, Trit::Set);
        self.value.cost = &self.value.cost + &inst.item(i).cost;
        self.value.weight += inst.item(i).weight;
    }

    pub fn unset(&mut self, inst: &Instance, i: usize) {
        if self.binary.status_of(i) == Trit::Set {
            self.value.cost = &self.value.cost - &inst.item(i).cost;
            self.value.weight -= inst.item(i).weight;
        }
        self.binary.set_status(i, Trit::Unset);
    }

    pub fn free(&mut self, inst: &Instance, i: usize) {
        if self.binary.status_of(i) == Trit::Set {
            self.value.cost = &self.value.cost - &inst.item(i).cost;
            self.value.weight -= inst.item(i).weight;
        }
        self.binary.set_status(i, Trit::Free);
    }

    pub fn status_of(&self, i: usize) -> Trit {
        self.binary.status_of(i)
    }
}

impl PartialEq for KnapsackSolution {
    fn eq(&self, other: &Self) -> bool {
        self.binary == other.binary
    }
}
impl Eq for KnapsackSolution {}

impl PartialOrd for KnapsackSolution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KnapsackSolution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.binary.cmp(&other.binary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    fn small_instance() -> Instance {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(3.0), Real::new(2.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(4.0), Real::new(3.0)]), Real::new(3.0)),
        ];
        Instance::new(items, Real::new(4.0), 2).unwrap()
    }

    #[test]
    fn cached_value_matches_sum_of_set_items() {
        let inst = small_instance();
        let mut sol = KnapsackSolution::new(inst.size(), inst.nb_objectives());
        sol.set(&inst, 0);
        assert_eq!(sol.value().weight, Real::new(2.0));
        assert_eq!(sol.value().cost, CostVector::from_vec(vec![Real::new(3.0), Real::new(2.0)]));
        sol.unset(&inst, 0);
        assert_eq!(sol.value().weight, Real::ZERO);
    }

    #[test]
    fn trit_order_is_free_unset_set() {
        assert!(Trit::Free < Trit::Unset);
        assert!(Trit::Unset < Trit::Set);
    }
}
