//! DAG vertices.
//!
//! Ground truth: spec.md §4.5's "DP vertex" entry, grounded on
//! `kp/vertex.hpp` (at most two parents, cached `profit`/`max_profit`,
//! `amalgate` on collision).

use crate::real::Real;
use crate::vector::CostVector;
use std::cmp::Ordering;
use std::rc::Rc;

/// Which edge a vertex was reached by: `Zero` means the item at this layer
/// was not chosen, `One` means it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Zero,
    One,
}

#[derive(Debug, Clone)]
pub struct Vertex {
    pub layer: usize,
    pub weight: Real,
    /// Best scalar path-profit reaching this vertex.
    pub profit: Real,
    /// Componentwise max over every path reaching this vertex, used by
    /// multi-objective regions to test hull feasibility.
    pub max_profit: CostVector,
    pub cardinality: usize,
    pub zero_parent: Option<Rc<Vertex>>,
    pub one_parent: Option<Rc<Vertex>>,
}

impl Vertex {
    pub fn source(p: usize) -> Self {
        Vertex {
            layer: 0,
            weight: Real::ZERO,
            profit: Real::ZERO,
            max_profit: CostVector::zeros(p),
            cardinality: 0,
            zero_parent: None,
            one_parent: None,
        }
    }

    pub fn via_zero(parent: &Rc<Vertex>) -> Self {
        Vertex {
            layer: parent.layer + 1,
            weight: parent.weight,
            profit: parent.profit,
            max_profit: parent.max_profit.clone(),
            cardinality: parent.cardinality,
            zero_parent: Some(Rc::clone(parent)),
            one_parent: None,
        }
    }

    pub fn via_one(parent: &Rc<Vertex>, item_weight: Real, item_profit: Real, item_cost: &CostVector) -> Self {
        Vertex {
            layer: parent.layer + 1,
            weight: parent.weight + item_weight,
            profit: parent.profit + item_profit,
            max_profit: &parent.max_profit + item_cost,
            cardinality: parent.cardinality + 1,
            zero_parent: None,
            one_parent: Some(Rc::clone(parent)),
        }
    }

    /// Merges two vertices that collided on `(layer, weight)`: keeps the
    /// better profit, the componentwise max, and the higher cardinality,
    /// unioning their parents (spec.md §4.5).
    pub fn amalgate(mut self, other: Vertex) -> Self {
        if other.profit > self.profit {
            self.profit = other.profit;
        }
        self.max_profit = self.max_profit.componentwise_max(&other.max_profit);
        self.cardinality = self.cardinality.max(other.cardinality);
        if self.zero_parent.is_none() {
            self.zero_parent = other.zero_parent;
        }
        if self.one_parent.is_none() {
            self.one_parent = other.one_parent;
        }
        self
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.layer == other.layer && self.weight == other.weight
    }
}
impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.layer.cmp(&other.layer).then_with(|| self.weight.partial_cmp(&other.weight).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amalgation_keeps_better_profit_and_merges_max() {
        let source = Rc::new(Vertex::source(1));
        let a = Vertex::via_one(&source, Real::new(1.0), Real::new(5.0), &CostVector::from_vec(vec![Real::new(5.0)]));
        let b = Vertex::via_zero(&source);
        let merged = a.amalgate(b);
        assert_eq!(merged.profit, Real::new(5.0));
        assert!(merged.zero_parent.is_some());
        assert!(merged.one_parent.is_some());
    }
}
