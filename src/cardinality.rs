//! Cardinality lower/upper bound helpers used by the A* cardinality cut.
//!
//! Ground truth: spec.md §4.9 step 2 ("cardinality cut"); `card_lb`/`card_ub`
//! are not otherwise named in spec.md beyond their role in that cut, so
//! their definitions here follow the natural reading: `card_lb` is the
//! fewest items any efficient solution must contain (every zero-weight,
//! positive-cost item is always worth taking), `card_ub` is the most items
//! that can fit a residual capacity among a set of free items.

use crate::instance::{Instance, Item};
use crate::real::Real;

/// The minimum number of items any efficient solution of `instance` must
/// contain: the zero-weight items with positive cost on some objective are
/// always worth including.
pub fn card_lb(instance: &Instance) -> usize {
    instance.trivial_card_lb()
}

/// The maximum number of `free` items (by index into `instance`) that can
/// fit within `residual_capacity`, found greedily by ascending weight
/// (an upper bound on cardinality, not a specific solution).
pub fn card_ub(instance: &Instance, free: &[usize], residual_capacity: Real) -> usize {
    let mut weights: Vec<Real> = free.iter().map(|&i| instance.item(i).weight).collect();
    weights.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mut remaining = residual_capacity;
    let mut count = 0;
    for w in weights {
        if w > remaining {
            break;
        }
        remaining -= w;
        count += 1;
    }
    count
}

/// `true` iff `item` is too heavy to ever fit the residual capacity.
pub fn too_heavy(item: &Item, residual_capacity: Real) -> bool {
    item.weight > residual_capacity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::CostVector;

    #[test]
    fn card_ub_counts_greedily_by_weight() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0)]), Real::new(1.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0)]), Real::new(2.0)),
            Item::new(2, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0)]), Real::new(5.0)),
        ];
        let inst = Instance::new(items, Real::new(10.0), 2).unwrap();
        assert_eq!(card_ub(&inst, &[0, 1, 2], Real::new(3.0)), 2);
    }
}
