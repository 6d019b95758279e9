//! Items and instances of the multi-objective 0-1 knapsack problem.
//!
//! Ground truth: `kp::variable` / `kp::knapsack_instance` in the original
//! source, generalised for `K24GG`-style validation used in the teacher's
//! `KnapsackInput::new` (validate-then-construct).

use crate::error::{KnapsackError, Result};
use crate::real::Real;
use crate::vector::CostVector;

/// A single item ("variable" in the original), immutable after construction.
#[derive(Debug, Clone)]
pub struct Item {
    /// Index of this item in the original instance.
    pub index: usize,
    pub cost: CostVector,
    pub weight: Real,
}

impl Item {
    pub fn new(index: usize, cost: CostVector, weight: Real) -> Self {
        Item { index, cost, weight }
    }

    /// `efficiency(j) = cost[j] / weight`. Zero-weight items have infinite
    /// efficiency on every objective with non-zero cost.
    pub fn efficiency(&self, obj: usize) -> Real {
        if self.weight == Real::ZERO {
            if self.cost[obj] == Real::ZERO {
                Real::ZERO
            } else {
                Real::infinity()
            }
        } else {
            self.cost[obj] / self.weight
        }
    }
}

/// An instance of the problem: an ordered sequence of items plus a capacity.
#[derive(Debug, Clone)]
pub struct Instance {
    items: Vec<Item>,
    capacity: Real,
    nb_objectives: usize,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: Real, nb_objectives: usize) -> Result<Self> {
        if !(2..=3).contains(&nb_objectives) {
            return Err(KnapsackError::MalformedInput(format!(
                "objective count must be 2 or 3, got {nb_objectives}"
            )));
        }
        if items.is_empty() {
            return Err(KnapsackError::MalformedInput(
                "instance must contain at least one item".to_string(),
            ));
        }
        for it in &items {
            if it.cost.len() != nb_objectives {
                return Err(KnapsackError::DimensionMismatch {
                    expected: nb_objectives,
                    got: it.cost.len(),
                });
            }
            if it.weight < Real::ZERO {
                return Err(KnapsackError::MalformedInput(format!(
                    "item {} has a negative weight",
                    it.index
                )));
            }
            if it.cost.as_slice().iter().any(|&c| c < Real::ZERO) {
                return Err(KnapsackError::MalformedInput(format!(
                    "item {} has a negative cost",
                    it.index
                )));
            }
        }
        if capacity < Real::ZERO {
            return Err(KnapsackError::MalformedInput(
                "capacity must be non-negative".to_string(),
            ));
        }
        Ok(Instance {
            items,
            capacity,
            nb_objectives,
        })
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> Real {
        self.capacity
    }

    pub fn nb_objectives(&self) -> usize {
        self.nb_objectives
    }

    pub fn item(&self, i: usize) -> &Item {
        &self.items[i]
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total_weight(&self) -> Real {
        self.items.iter().map(|it| it.weight).sum()
    }

    /// A lower bound on the cardinality of any efficient solution: the
    /// number of items that individually dominate on no objective but whose
    /// combined weight still fits, approximated here (per spec.md, `kp`'s
    /// `cardinality_lower_bound`) as 0 when any item has zero weight and
    /// positive cost (it is always worth taking), else 0 conservatively.
    pub fn trivial_card_lb(&self) -> usize {
        self.items
            .iter()
            .filter(|it| it.weight == Real::ZERO && it.cost.as_slice().iter().any(|&c| c > Real::ZERO))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(i: usize, c: &[f64], w: f64) -> Item {
        Item::new(i, CostVector::from_vec(c.iter().map(|&x| Real::new(x)).collect()), Real::new(w))
    }

    #[test]
    fn rejects_negative_weight() {
        let items = vec![item(0, &[1.0, 1.0], -1.0)];
        assert!(Instance::new(items, Real::new(1.0), 2).is_err());
    }

    #[test]
    fn rejects_bad_dimension() {
        let items = vec![item(0, &[1.0, 1.0, 1.0], 1.0)];
        assert!(Instance::new(items, Real::new(1.0), 2).is_err());
    }

    #[test]
    fn accepts_valid_instance() {
        let items = vec![item(0, &[1.0, 1.0], 1.0), item(1, &[2.0, 0.0], 1.0)];
        let inst = Instance::new(items, Real::new(2.0), 2).unwrap();
        assert_eq!(inst.size(), 2);
    }
}
