//! Composite relaxation for the bi-objective case: three mono relaxations
//! (λ-combination, z1, z2) sharing pre-sorted subset views so relaxations
//! starting at any index are O(n).
//!
//! Ground truth: spec.md §4.3.

use super::mt_linear::MtLinearRelaxation;
use crate::instance::Instance;
use crate::real::Real;
use crate::vector::CostVector;
use crate::views::subset::SubsetView;
use crate::views::weighted_sum::WeightedSumView;
use crate::views::ProblemView;

pub struct CompositeRelaxation<'a> {
    instance: &'a Instance,
    lambda_order: Vec<usize>,
    z1_order: Vec<usize>,
    z2_order: Vec<usize>,
}

impl<'a> CompositeRelaxation<'a> {
    pub fn new(instance: &'a Instance, lambda: CostVector) -> Self {
        let mut lambda_view = WeightedSumView::new(instance, lambda);
        lambda_view.sort_by_decreasing_efficiency();
        let lambda_order: Vec<usize> = (0..instance.size()).map(|i| lambda_view.source_index(i)).collect();

        let z1_order = Self::sorted_by_obj(instance, 0);
        let z2_order = Self::sorted_by_obj(instance, 1);

        CompositeRelaxation {
            instance,
            lambda_order,
            z1_order,
            z2_order,
        }
    }

    fn sorted_by_obj(instance: &Instance, obj: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..instance.size()).collect();
        order.sort_by(|&a, &b| {
            instance
                .item(b)
                .efficiency(obj)
                .partial_cmp(&instance.item(a).efficiency(obj))
                .unwrap()
        });
        order
    }

    fn subset_from(&self, order: &[usize], obj: usize, from: usize, capacity: Real) -> SubsetView<'_> {
        SubsetView::new(self.instance, obj, order[from..].to_vec(), capacity)
    }

    /// Relaxed value of the λ-combination starting from rank `from`.
    pub fn relax_lambda(&self, lambda: &CostVector, from: usize, capacity: Real, starting_profit: Real) -> Real {
        // λ-combination is not a single objective index, so we fall back to
        // scoring item-by-item in the precomputed λ order (still O(n) from
        // `from`, no resort).
        let mut acc_weight = Real::ZERO;
        let mut acc_profit = starting_profit;
        let mut i = from;
        while i < self.lambda_order.len() {
            let idx = self.lambda_order[i];
            let item = self.instance.item(idx);
            if acc_weight + item.weight > capacity {
                break;
            }
            acc_weight += item.weight;
            acc_profit += item.cost.scalar_product(lambda);
            i += 1;
        }
        if i == self.lambda_order.len() || acc_weight == capacity {
            return acc_profit;
        }
        let idx = self.lambda_order[i];
        let item = self.instance.item(idx);
        let remaining = capacity - acc_weight;
        if item.weight == Real::ZERO {
            return acc_profit + item.cost.scalar_product(lambda);
        }
        acc_profit + remaining * (item.cost.scalar_product(lambda) / item.weight)
    }

    pub fn relax_z1(&self, from: usize, capacity: Real, starting_profit: Real) -> Real {
        let view = self.subset_from(&self.z1_order, 0, from, capacity);
        MtLinearRelaxation::relax(&view, 0, capacity, starting_profit).value
    }

    pub fn relax_z2(&self, from: usize, capacity: Real, starting_profit: Real) -> Real {
        let view = self.subset_from(&self.z2_order, 1, from, capacity);
        MtLinearRelaxation::relax(&view, 0, capacity, starting_profit).value
    }

    /// `true` iff all three relaxations (λ-combined, z1, z2) exceed the
    /// respective components of `bound`, starting from rank `from` with
    /// accumulated profits `profit` (spec.md §4.3).
    pub fn interesting(&self, lambda: &CostVector, profit: &CostVector, from: usize, bound: &CostVector, capacity: Real) -> bool {
        let profit_lambda = profit.scalar_product(lambda);
        self.relax_lambda(lambda, from, capacity, profit_lambda) > bound[0]
            && self.relax_z1(from, capacity, profit[0]) > bound[1]
            && self.relax_z2(from, capacity, profit[1]) > bound[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    fn inst() -> Instance {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(10.0), Real::new(1.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(10.0)]), Real::new(2.0)),
        ];
        Instance::new(items, Real::new(4.0), 2).unwrap()
    }

    #[test]
    fn relax_z1_z2_track_their_own_objective() {
        let inst = inst();
        let comp = CompositeRelaxation::new(&inst, CostVector::from_vec(vec![Real::new(0.5), Real::new(0.5)]));
        let v1 = comp.relax_z1(0, inst.capacity(), Real::ZERO);
        let v2 = comp.relax_z2(0, inst.capacity(), Real::ZERO);
        assert_eq!(v1, Real::new(11.0));
        assert_eq!(v2, Real::new(11.0));
    }
}
