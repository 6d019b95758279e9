//! Best-first branch-and-bound driving the tri-objective search.
//!
//! Ground truth: spec.md §4.9 step 6 and §5 ("a single sequential thread
//! drives the queue").

use super::node::Node;
use super::OrderName;
use crate::bound_set::BoundSet;
use crate::error::Result;
use crate::instance::Instance;
use crate::maxset::MaximumSet;
use crate::nondominated::{InsertOutcome, ParetoSet};
use crate::real::Real;
use crate::solution::{KnapsackSolution, Trit};
use crate::vector::{dominance, strictly_dominates, CostVector, Dominance};
use crate::views::order::OrderedView;
use crate::views::ProblemView;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct QueuedNode {
    node: Node,
}

impl QueuedNode {
    /// Node priority per spec.md §4.9 step 6: tightness-ratio closest to
    /// 0.5, fewer known-dominated hull points, more hull points, smaller
    /// residual capacity, higher cardinality.
    fn priority_key(&self) -> (Real, usize, std::cmp::Reverse<usize>, Real, usize) {
        let tightness_ratio = if self.node.upper_bound.value() == 0.0 {
            Real::ZERO
        } else {
            Real::new((self.node.residual_capacity.value() / self.node.upper_bound.value() - 0.5).abs())
        };
        (
            Real::new(-tightness_ratio.value()),
            self.node.dominated_count,
            std::cmp::Reverse(self.node.hull.len()),
            Real::new(-self.node.residual_capacity.value()),
            self.node.binary.cardinality(),
        )
    }
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueuedNode {}
impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.priority_key();
        let b = other.priority_key();
        a.0.partial_cmp(&b.0)
            .unwrap()
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.2.cmp(&b.2))
            .then_with(|| a.3.partial_cmp(&b.3).unwrap())
            .then_with(|| b.4.cmp(&a.4))
    }
}

/// Dominance diffusion (spec.md §4.9 step 1): forcing `idx` to 1 forces
/// every free item whose cost dominates it to 1 as well (dropping the
/// node if that overflows capacity), and unsets every free item that no
/// longer fits; forcing `idx` to 0 unsets every free item dominated by it.
fn diffuse(node: &mut Node, instance: &Instance, idx: usize, set_to_one: bool) -> bool {
    if set_to_one {
        for j in 0..instance.size() {
            if node.binary.status_of(j) == Trit::Free && strictly_dominates(&instance.item(j).cost, &instance.item(idx).cost) {
                if instance.item(j).weight > node.residual_capacity {
                    return false;
                }
                node.binary.set_status(j, Trit::Set);
                node.residual_capacity -= instance.item(j).weight;
                node.accumulated = &node.accumulated + &instance.item(j).cost;
            }
        }
        for j in 0..instance.size() {
            if node.binary.status_of(j) == Trit::Free && instance.item(j).weight > node.residual_capacity {
                node.binary.set_status(j, Trit::Unset);
            }
        }
    } else {
        for j in 0..instance.size() {
            if node.binary.status_of(j) == Trit::Free && strictly_dominates(&instance.item(idx).cost, &instance.item(j).cost) {
                node.binary.set_status(j, Trit::Unset);
            }
        }
    }
    true
}

fn branch_index(node: &Node, branch_order: &[usize]) -> Option<usize> {
    branch_order.iter().copied().find(|&i| node.binary.status_of(i) == Trit::Free)
}

fn dominated_count_of(node: &Node, efficient_images: &ParetoSet) -> usize {
    efficient_images
        .iter()
        .filter(|s| node.hull.iter().any(|h| matches!(dominance(&s.value().cost, h), Dominance::Strict | Dominance::Weak)))
        .count()
}

/// Runs the tri-objective A* search to completion, returning every
/// efficient solution found.
pub fn run(instance: &Instance, order: OrderName) -> Result<Vec<KnapsackSolution>> {
    let ordered_view = OrderedView::new(instance, 0, order);
    let branch_order: Vec<usize> = (0..ordered_view.size()).map(|i| ordered_view.source_index(i)).collect();

    let mut efficient = MaximumSet::new(true);
    let mut images = ParetoSet::new();
    let mut bound_set = BoundSet::new();

    let mut heap = BinaryHeap::new();
    heap.push(QueuedNode { node: Node::root(instance) });

    while let Some(QueuedNode { node }) = heap.pop() {
        if node.is_full() {
            let candidate = KnapsackSolution::from_binary(instance, node.binary.clone());
            if candidate.binary().is_feasible(instance) {
                let cost = candidate.value().cost.clone();
                if matches!(efficient.insert(candidate.clone()), InsertOutcome::Added) {
                    let left = images.iter().filter(|s| s.value().cost[0] < cost[0]).last().map(|s| s.value().cost.clone());
                    let right = images.iter().find(|s| s.value().cost[0] > cost[0]).map(|s| s.value().cost.clone());
                    bound_set.reduce(&cost, left.as_ref(), right.as_ref());
                    images.insert(candidate);
                }
            }
            continue;
        }

        if node.cardinality_cut(instance) {
            continue;
        }
        if node.utopian_cut(&images) {
            continue;
        }
        let lambda = CostVector::from_vec(vec![Real::new(1.0); instance.nb_objectives()]);
        if node.bound_cut(&bound_set, &lambda) {
            continue;
        }
        if node.hull_cut(&bound_set) {
            continue;
        }

        let Some(idx) = branch_index(&node, &branch_order) else { continue };

        let mut zero_child = node.clone();
        zero_child.binary.set_status(idx, Trit::Unset);
        if diffuse(&mut zero_child, instance, idx, false) {
            zero_child.recompute(instance);
            zero_child.dominated_count = dominated_count_of(&zero_child, &images);
            heap.push(QueuedNode { node: zero_child });
        }

        if instance.item(idx).weight <= node.residual_capacity {
            let mut one_child = node.clone();
            one_child.binary.set_status(idx, Trit::Set);
            one_child.residual_capacity -= instance.item(idx).weight;
            one_child.accumulated = &one_child.accumulated + &instance.item(idx).cost;
            if diffuse(&mut one_child, instance, idx, true) {
                one_child.recompute(instance);
                one_child.dominated_count = dominated_count_of(&one_child, &images);
                heap.push(QueuedNode { node: one_child });
            }
        }
    }

    Ok(efficient.into_solutions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    #[test]
    fn finds_nondominated_solutions_for_a_small_tri_objective_instance() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(5.0), Real::new(1.0), Real::new(1.0)]), Real::new(3.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(5.0), Real::new(1.0)]), Real::new(3.0)),
            Item::new(2, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0), Real::new(5.0)]), Real::new(3.0)),
        ];
        let inst = Instance::new(items, Real::new(6.0), 3).unwrap();
        let solutions = run(&inst, OrderName::Topological).unwrap();
        assert!(!solutions.is_empty());
        for s in &solutions {
            assert!(s.binary().weight(&inst) <= inst.capacity());
        }
    }
}
