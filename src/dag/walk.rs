//! Single-best and multi-best DP walks: extract binary solutions from a
//! built DAG by walking backward from the terminal layer.
//!
//! Ground truth: spec.md §4.6.

use super::builder::Layer;
use super::vertex::Vertex;
use crate::real::Real;
use std::rc::Rc;

/// Walks backward from `terminal`, choosing the parent whose profit
/// equals the current profit for "skip", or whose profit + item cost
/// equals the current profit for "keep", producing a single optimal binary
/// solution of length `n` (spec.md §4.6).
pub fn single_best(terminal: &Rc<Vertex>, item_costs: &[Real]) -> Vec<bool> {
    let n = item_costs.len();
    let mut decisions = vec![false; n];
    let mut current = Rc::clone(terminal);

    for layer in (1..=n).rev() {
        let took_one = match (&current.zero_parent, &current.one_parent) {
            (Some(_), Some(op)) => op.profit + item_costs[layer - 1] == current.profit,
            (None, Some(_)) => true,
            _ => false,
        };
        decisions[layer - 1] = took_one;
        current = if took_one {
            Rc::clone(current.one_parent.as_ref().unwrap())
        } else {
            Rc::clone(current.zero_parent.as_ref().unwrap())
        };
    }
    decisions
}

/// Recurses into both parents whenever both equalities hold, producing
/// every optimal binary solution reaching `terminal` exactly once
/// (spec.md §4.6).
pub fn multi_best(terminal: &Rc<Vertex>, layer: usize, item_costs: &[Real]) -> Vec<Vec<bool>> {
    if layer == 0 {
        return vec![Vec::new()];
    }
    let mut results = Vec::new();
    let item_cost = item_costs[layer - 1];

    if let Some(zp) = &terminal.zero_parent {
        if zp.profit == terminal.profit {
            for mut prefix in multi_best(zp, layer - 1, item_costs) {
                prefix.push(false);
                results.push(prefix);
            }
        }
    }
    if let Some(op) = &terminal.one_parent {
        if op.profit + item_cost == terminal.profit {
            for mut prefix in multi_best(op, layer - 1, item_costs) {
                prefix.push(true);
                results.push(prefix);
            }
        }
    }
    results
}

/// Picks every terminal vertex with the best profit in `layers`' last
/// layer.
pub fn best_terminals(layers: &[Layer]) -> Vec<Rc<Vertex>> {
    let Some(last) = layers.last() else { return Vec::new() };
    let Some(best) = last.iter().map(|v| v.profit).max_by(|a, b| a.partial_cmp(b).unwrap()) else {
        return Vec::new();
    };
    last.iter().filter(|v| v.profit == best).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::builder::DagBuilder;
    use crate::dag::region::BoundedRegion;
    use crate::instance::{Instance, Item};
    use crate::vector::CostVector;
    use crate::views::SortableView;

    #[test]
    fn single_best_reproduces_optimal_profit() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(10.0), Real::new(0.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(6.0), Real::new(0.0)]), Real::new(3.0)),
        ];
        let inst = Instance::new(items, Real::new(5.0), 2).unwrap();
        let mut view = SortableView::new(&inst, 0);
        view.sort_by_decreasing_efficiency();
        let region = BoundedRegion::half_line(Real::ZERO);
        let layers = DagBuilder::build(&view, &region);
        let terminal = best_terminals(&layers).into_iter().next().unwrap();
        let costs: Vec<Real> = (0..view.size()).map(|i| view.cost(i)).collect();
        let decisions = single_best(&terminal, &costs);
        let profit: Real = decisions.iter().zip(0..).filter(|(&d, _)| d).map(|(_, i)| view.cost(i)).sum();
        assert_eq!(profit, terminal.profit);
    }
}
