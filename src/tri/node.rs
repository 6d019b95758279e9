//! A* search node for the tri-objective solver.
//!
//! Ground truth: spec.md §4.9.

use crate::bound_set::BoundSet;
use crate::cardinality;
use crate::instance::Instance;
use crate::real::Real;
use crate::relax::mt_linear::MtLinearRelaxation;
use crate::solution::{BinarySolution, Trit};
use crate::vector::CostVector;
use crate::views::subset::SubsetView;
use crate::views::ProblemView;

#[derive(Debug, Clone)]
pub struct Node {
    pub binary: BinarySolution,
    pub residual_capacity: Real,
    pub accumulated: CostVector,
    /// Images of the supported solutions reachable from this node's free
    /// variables (a local phase-1 hull, spec.md §4.9).
    pub hull: Vec<CostVector>,
    pub utopian: CostVector,
    pub upper_bound: Real,
    /// Number of already-discovered global solutions this node's hull is
    /// known to be dominated by; refreshed whenever a new solution is
    /// added to the global set (spec.md §4.9, "the only cross-node
    /// coupling").
    pub dominated_count: usize,
}

impl Node {
    pub fn root(instance: &Instance) -> Self {
        let binary = BinarySolution::new(instance.size());
        let mut node = Node {
            binary,
            residual_capacity: instance.capacity(),
            accumulated: CostVector::zeros(instance.nb_objectives()),
            hull: Vec::new(),
            utopian: CostVector::zeros(instance.nb_objectives()),
            upper_bound: Real::infinity(),
            dominated_count: 0,
        };
        node.recompute(instance);
        node
    }

    fn free_indices(&self) -> Vec<usize> {
        (0..self.binary.len()).filter(|&i| self.binary.status_of(i) == Trit::Free).collect()
    }

    /// Recomputes the local hull, utopian point, and upper bound from the
    /// current trit vector (spec.md §4.9).
    pub fn recompute(&mut self, instance: &Instance) {
        let free = self.free_indices();

        // Utopian point: for each objective, a mono DP upper bound over
        // the free variables (approximated here by the Martello-Toth
        // linear relaxation, consistent with the upper-bound role spec.md
        // assigns the utopian estimate).
        let mut utopian = self.accumulated.clone();
        for obj in 0..instance.nb_objectives() {
            let subset = SubsetView::new(instance, obj, free.clone(), self.residual_capacity);
            let mut view_order: Vec<usize> = (0..subset.size()).collect();
            view_order.sort_by(|&a, &b| subset.efficiency(b).partial_cmp(&subset.efficiency(a)).unwrap());
            let reordered = SubsetView::new(instance, obj, view_order.iter().map(|&i| free[i]).collect(), self.residual_capacity);
            let relaxed = MtLinearRelaxation::relax(&reordered, 0, self.residual_capacity, Real::ZERO).value;
            utopian[obj] += relaxed;
        }
        self.utopian = utopian;

        // Local phase-1 hull: if there are at least two free variables,
        // solve a bi-objective sub-phase-1 on (obj0, obj1) restricted to
        // the free set; with fewer than 2 free objectives of interest this
        // degenerates to a single point.
        self.hull = if free.len() >= 2 && instance.nb_objectives() >= 2 {
            self.local_hull(instance, &free)
        } else {
            vec![self.accumulated.clone()]
        };

        // Upper bound toward the utopian via a weighted-sum linear
        // relaxation (equal weights, a reasonable default absent a
        // specified λ choice).
        let mut view_order: Vec<usize> = (0..free.len()).collect();
        view_order.sort_by(|&a, &b| {
            let ea: Real = (0..instance.nb_objectives()).map(|o| instance.item(free[a]).efficiency(o)).sum();
            let eb: Real = (0..instance.nb_objectives()).map(|o| instance.item(free[b]).efficiency(o)).sum();
            eb.partial_cmp(&ea).unwrap()
        });
        let sorted_free: Vec<usize> = view_order.into_iter().map(|i| free[i]).collect();
        let lambda_view = SubsetView::new(instance, 0, sorted_free, self.residual_capacity);
        self.upper_bound = self.accumulated.as_slice().iter().copied().sum::<Real>()
            + MtLinearRelaxation::relax(&lambda_view, 0, self.residual_capacity, Real::ZERO).value;
    }

    fn local_hull(&self, instance: &Instance, free: &[usize]) -> Vec<CostVector> {
        // Builds a restricted bi-objective sub-instance on the first two
        // objectives over the free items, runs phase-1, and shifts the
        // result by the pending accumulated profit.
        use crate::instance::Item;
        let sub_items: Vec<Item> = free
            .iter()
            .enumerate()
            .map(|(local_idx, &src)| Item::new(local_idx, instance.item(src).cost.clone(), instance.item(src).weight))
            .collect();
        let Ok(sub_instance) = Instance::new(sub_items, self.residual_capacity, instance.nb_objectives().min(2).max(2)) else {
            return vec![self.accumulated.clone()];
        };
        if sub_instance.nb_objectives() != 2 {
            return vec![self.accumulated.clone()];
        }
        match crate::phase1::solve(&sub_instance) {
            Ok(points) => points.into_iter().map(|p| &p + &self.accumulated).collect(),
            Err(_) => vec![self.accumulated.clone()],
        }
    }

    pub fn cardinality_cut(&self, instance: &Instance) -> bool {
        let free = self.free_indices();
        let set_count = self.binary.cardinality();
        let ub = cardinality::card_ub(instance, &free, self.residual_capacity);
        set_count + ub < cardinality::card_lb(instance)
    }

    /// `true` if this node should be closed because its utopian point is
    /// already dominated by an existing efficient solution.
    pub fn utopian_cut(&self, existing: &crate::nondominated::ParetoSet) -> bool {
        existing.iter().any(|s| {
            matches!(
                crate::vector::dominance(&s.value().cost, &self.utopian),
                crate::vector::Dominance::Strict | crate::vector::Dominance::Weak
            )
        })
    }

    pub fn bound_cut(&self, bound_set: &BoundSet, lambda: &CostVector) -> bool {
        let relax_at_utopian = self.upper_bound;
        bound_set
            .iter()
            .filter(|n| n.le_elementwise(&self.utopian))
            .all(|n| relax_at_utopian < lambda.scalar_product(n))
    }

    /// Closes the node when every relevant nadir violates every hull
    /// constraint: no point of the reachable hull elementwise-dominates
    /// the nadir (spec.md §4.9 step 5).
    pub fn hull_cut(&self, bound_set: &BoundSet) -> bool {
        bound_set
            .iter()
            .filter(|n| n.le_elementwise(&self.utopian))
            .all(|n| self.hull.iter().all(|h| !n.le_elementwise(h)))
    }

    pub fn is_full(&self) -> bool {
        self.binary.is_full()
    }
}
