//! Subset view: restricts an instance to a chosen index subset with a
//! possibly reduced capacity. Ground truth: spec.md §4.2, used by fixing
//! (§4.4) to materialise the reduced sub-instance on the keep-set of free
//! indices.

use super::ProblemView;
use crate::instance::Instance;
use crate::real::Real;

pub struct SubsetView<'a> {
    instance: &'a Instance,
    objective: usize,
    indices: Vec<usize>,
    capacity: Real,
}

impl<'a> SubsetView<'a> {
    pub fn new(instance: &'a Instance, objective: usize, indices: Vec<usize>, capacity: Real) -> Self {
        SubsetView {
            instance,
            objective,
            indices,
            capacity,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl<'a> ProblemView for SubsetView<'a> {
    fn size(&self) -> usize {
        self.indices.len()
    }

    fn capacity(&self) -> Real {
        self.capacity
    }

    fn cost(&self, i: usize) -> Real {
        self.instance.item(self.indices[i]).cost[self.objective]
    }

    fn weight(&self, i: usize) -> Real {
        self.instance.item(self.indices[i]).weight
    }

    fn source_index(&self, i: usize) -> usize {
        self.indices[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;
    use crate::vector::CostVector;

    #[test]
    fn restricts_to_chosen_indices() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(1.0), Real::new(0.0)]), Real::new(1.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(2.0), Real::new(0.0)]), Real::new(1.0)),
            Item::new(2, CostVector::from_vec(vec![Real::new(3.0), Real::new(0.0)]), Real::new(1.0)),
        ];
        let inst = Instance::new(items, Real::new(5.0), 2).unwrap();
        let view = SubsetView::new(&inst, 0, vec![0, 2], Real::new(2.0));
        assert_eq!(view.size(), 2);
        assert_eq!(view.source_index(1), 2);
        assert_eq!(view.cost(1), Real::new(3.0));
    }
}
