//! Weighted-sum view: for a weight vector λ>0, each item's scalar cost is
//! λ·cost. Ground truth: spec.md §4.2; grounded on the teacher's
//! `prepare_items` efficiency-ordering pattern in `minknap.rs`, generalised
//! from one objective to λ·cost.

use super::ProblemView;
use crate::instance::Instance;
use crate::real::Real;
use crate::vector::CostVector;

pub struct WeightedSumView<'a> {
    instance: &'a Instance,
    lambda: CostVector,
    /// Permutation of item indices, initially identity; kept sorted by
    /// decreasing efficiency once `sort_by_decreasing_efficiency` is called.
    order: Vec<usize>,
    capacity: Real,
}

impl<'a> WeightedSumView<'a> {
    pub fn new(instance: &'a Instance, lambda: CostVector) -> Self {
        let order = (0..instance.size()).collect();
        let capacity = instance.capacity();
        WeightedSumView {
            instance,
            lambda,
            order,
            capacity,
        }
    }

    pub fn with_capacity(instance: &'a Instance, lambda: CostVector, capacity: Real) -> Self {
        let mut v = Self::new(instance, lambda);
        v.capacity = capacity;
        v
    }

    fn raw_cost(&self, source_idx: usize) -> Real {
        self.instance.item(source_idx).cost.scalar_product(&self.lambda)
    }

    pub fn sort_by_decreasing_efficiency(&mut self) {
        let costs: Vec<Real> = (0..self.instance.size()).map(|i| self.raw_cost(i)).collect();
        let weights: Vec<Real> = (0..self.instance.size()).map(|i| self.instance.item(i).weight).collect();
        self.order.sort_by(|&a, &b| {
            let eff_a = if weights[a] == Real::ZERO { Real::infinity() } else { costs[a] / weights[a] };
            let eff_b = if weights[b] == Real::ZERO { Real::infinity() } else { costs[b] / weights[b] };
            eff_b.partial_cmp(&eff_a).unwrap()
        });
    }
}

impl<'a> ProblemView for WeightedSumView<'a> {
    fn size(&self) -> usize {
        self.order.len()
    }

    fn capacity(&self) -> Real {
        self.capacity
    }

    fn cost(&self, i: usize) -> Real {
        self.raw_cost(self.order[i])
    }

    fn weight(&self, i: usize) -> Real {
        self.instance.item(self.order[i]).weight
    }

    fn source_index(&self, i: usize) -> usize {
        self.order[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    fn inst() -> Instance {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(1.0), Real::new(5.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(5.0), Real::new(1.0)]), Real::new(2.0)),
        ];
        Instance::new(items, Real::new(3.0), 2).unwrap()
    }

    #[test]
    fn sorts_by_decreasing_efficiency_on_lambda() {
        let inst = inst();
        let mut view = WeightedSumView::new(&inst, CostVector::from_vec(vec![Real::new(1.0), Real::new(0.0)]));
        view.sort_by_decreasing_efficiency();
        assert_eq!(view.source_index(0), 1);
    }
}
