//! Sortable mono view: projects a multi-objective instance down to a single
//! scalar objective through a permutation. Ground truth: spec.md §4.2's
//! "Sortable mono view", grounded on the teacher's `prepare_items` in
//! `minknap.rs` (sort items by value/weight once, keep the permutation).

use super::ProblemView;
use crate::instance::Instance;
use crate::real::Real;

pub struct SortableView<'a> {
    instance: &'a Instance,
    objective: usize,
    order: Vec<usize>,
    capacity: Real,
}

impl<'a> SortableView<'a> {
    pub fn new(instance: &'a Instance, objective: usize) -> Self {
        let order = (0..instance.size()).collect();
        let capacity = instance.capacity();
        SortableView {
            instance,
            objective,
            order,
            capacity,
        }
    }

    pub fn sort_by_decreasing_efficiency(&mut self) {
        let obj = self.objective;
        let inst = self.instance;
        self.order.sort_by(|&a, &b| {
            inst.item(b)
                .efficiency(obj)
                .partial_cmp(&inst.item(a).efficiency(obj))
                .unwrap()
        });
    }
}

impl<'a> ProblemView for SortableView<'a> {
    fn size(&self) -> usize {
        self.order.len()
    }

    fn capacity(&self) -> Real {
        self.capacity
    }

    fn cost(&self, i: usize) -> Real {
        self.instance.item(self.order[i]).cost[self.objective]
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
    use crate::vector::CostVector;

    #[test]
    fn reorders_by_single_objective_efficiency() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(2.0), Real::new(0.0)]), Real::new(4.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(10.0), Real::new(0.0)]), Real::new(2.0)),
        ];
        let inst = Instance::new(items, Real::new(6.0), 2).unwrap();
        let mut view = SortableView::new(&inst, 0);
        view.sort_by_decreasing_efficiency();
        assert_eq!(view.source_index(0), 1);
    }
}
