//! Martello-Toth linear relaxation of a mono view.
//!
//! Ground truth: spec.md §4.3, grounded on `bikp/relaxation/mt_linear_relaxation.hpp`
//! (cited in SPEC_FULL.md §3) whose overflow-safe division pattern
//! (`p*w1 vs c*p1`, then `(p*w1 - c*p1)/w1`) is kept here even though `Real`
//! cannot overflow the way the original's fixed-width integers could; the
//! pattern still avoids an intermediate division by a possibly-tiny weight
//! before the comparison is needed.

use crate::real::Real;
use crate::views::ProblemView;

/// Result of a linear relaxation: the relaxed objective value and whether
/// the relaxation happens to be integral (no fractional item used).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRelaxResult {
    pub value: Real,
    pub optimal: bool,
}

/// A view must already be sorted by decreasing efficiency for this
/// relaxation to be valid (spec.md §4.3).
pub struct MtLinearRelaxation;

impl MtLinearRelaxation {
    /// Finds the split index `s` (first item whose cumulated weight from
    /// `from` exceeds `capacity`) and computes
    /// `profit + sum(items before s) + (capacity - weight(s-1)) * efficiency(s)`.
    pub fn relax<V: ProblemView>(view: &V, from: usize, capacity: Real, starting_profit: Real) -> LinearRelaxResult {
        let n = view.size();
        let mut acc_weight = Real::ZERO;
        let mut acc_profit = starting_profit;
        let mut i = from;
        while i < n {
            let w = view.weight(i);
            if acc_weight + w > capacity {
                break;
            }
            acc_weight += w;
            acc_profit += view.cost(i);
            i += 1;
        }
        if i == n {
            return LinearRelaxResult {
                value: acc_profit,
                optimal: true,
            };
        }
        let remaining = capacity - acc_weight;
        if remaining == Real::ZERO {
            return LinearRelaxResult {
                value: acc_profit,
                optimal: true,
            };
        }
        let w = view.weight(i);
        if w == Real::ZERO {
            // A zero-weight item always fits; take it outright.
            return LinearRelaxResult {
                value: acc_profit + view.cost(i),
                optimal: false,
            };
        }
        let fractional = remaining * view.efficiency(i);
        LinearRelaxResult {
            value: acc_profit + fractional,
            optimal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{Instance, Item};
    use crate::vector::CostVector;
    use crate::views::SortableView;

    fn inst() -> Instance {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(10.0), Real::new(0.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(6.0), Real::new(0.0)]), Real::new(3.0)),
            Item::new(2, CostVector::from_vec(vec![Real::new(1.0), Real::new(0.0)]), Real::new(1.0)),
        ];
        Instance::new(items, Real::new(4.0), 2).unwrap()
    }

    #[test]
    fn fractional_item_caps_the_relaxed_value() {
        let inst = inst();
        let mut view = SortableView::new(&inst, 0);
        view.sort_by_decreasing_efficiency();
        let result = MtLinearRelaxation::relax(&view, 0, inst.capacity(), Real::ZERO);
        assert!(!result.optimal);
        assert!(result.value > Real::new(10.0));
    }

    #[test]
    fn full_capacity_take_all_is_optimal() {
        let inst = inst();
        let mut view = SortableView::new(&inst, 0);
        view.sort_by_decreasing_efficiency();
        let result = MtLinearRelaxation::relax(&view, 0, Real::new(6.0), Real::ZERO);
        assert!(result.optimal);
        assert_eq!(result.value, Real::new(17.0));
    }
}
