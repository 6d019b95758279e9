//! Ordered view: the tri-objective item orders of spec.md §4.2, each derived
//! from the per-objective efficiency ranks of the items. Ground truth:
//! `order_on_items.hpp` in the original source (cited in SPEC_FULL.md §3).
//! The chosen order is a performance decision, not a correctness one.

use super::ProblemView;
use crate::instance::Instance;
use crate::real::Real;
use serde::{Deserialize, Serialize};

/// The named orders of spec.md §4.2, plus an arbitrary non-negative integer
/// denoting decreasing efficiency on that objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderName {
    Topological,
    MaxRank,
    MinRank,
    SumRank,
    Frequency,
    Random,
    DominationRank,
    DominationCount,
    ByObjective(usize),
}

impl std::str::FromStr for OrderName {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "topological" => Ok(OrderName::Topological),
            "max-rank" | "max_rank" => Ok(OrderName::MaxRank),
            "min-rank" | "min_rank" => Ok(OrderName::MinRank),
            "sum-rank" | "sum_rank" => Ok(OrderName::SumRank),
            "frequency" => Ok(OrderName::Frequency),
            "random" => Ok(OrderName::Random),
            "domination-rank" | "domination_rank" => Ok(OrderName::DominationRank),
            "domination-count" | "domination_count" => Ok(OrderName::DominationCount),
            other => other
                .parse::<usize>()
                .map(OrderName::ByObjective)
                .map_err(|_| format!("unknown item order '{other}'")),
        }
    }
}

/// Per-objective efficiency ranks of every item (rank 0 = most efficient).
fn efficiency_ranks(instance: &Instance, obj: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..instance.size()).collect();
    order.sort_by(|&a, &b| {
        instance
            .item(b)
            .efficiency(obj)
            .partial_cmp(&instance.item(a).efficiency(obj))
            .unwrap()
    });
    let mut ranks = vec![0usize; instance.size()];
    for (rank, idx) in order.into_iter().enumerate() {
        ranks[idx] = rank;
    }
    ranks
}

fn all_ranks(instance: &Instance) -> Vec<Vec<usize>> {
    (0..instance.nb_objectives()).map(|j| efficiency_ranks(instance, j)).collect()
}

/// Number of items each item dominates / is dominated by, under the cost
/// vectors alone (ignoring weight).
fn domination_counts(instance: &Instance) -> (Vec<usize>, Vec<usize>) {
    let n = instance.size();
    let mut dominates = vec![0usize; n];
    let mut dominated_by = vec![0usize; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if crate::vector::strictly_dominates(&instance.item(i).cost, &instance.item(j).cost) {
                dominates[i] += 1;
                dominated_by[j] += 1;
            }
        }
    }
    (dominates, dominated_by)
}

fn build_order(instance: &Instance, name: OrderName) -> Vec<usize> {
    let n = instance.size();
    let mut order: Vec<usize> = (0..n).collect();
    match name {
        OrderName::Topological => {}
        OrderName::ByObjective(obj) => {
            let obj = obj.min(instance.nb_objectives().saturating_sub(1));
            order.sort_by(|&a, &b| {
                instance
                    .item(b)
                    .efficiency(obj)
                    .partial_cmp(&instance.item(a).efficiency(obj))
                    .unwrap()
            });
        }
        OrderName::MaxRank => {
            let ranks = all_ranks(instance);
            order.sort_by_key(|&i| ranks.iter().map(|r| r[i]).max().unwrap());
        }
        OrderName::MinRank => {
            let ranks = all_ranks(instance);
            order.sort_by_key(|&i| ranks.iter().map(|r| r[i]).min().unwrap());
        }
        OrderName::SumRank => {
            let ranks = all_ranks(instance);
            order.sort_by_key(|&i| ranks.iter().map(|r| r[i]).sum::<usize>());
        }
        OrderName::Frequency => {
            // Items efficient (top half by rank) on the most objectives come first.
            let ranks = all_ranks(instance);
            let half = n / 2;
            order.sort_by_key(|&i| std::cmp::Reverse(ranks.iter().filter(|r| r[i] < half).count()));
        }
        OrderName::Random => {
            // Deterministic pseudo-shuffle keyed on item index, since
            // `Math.random()`-style entropy sources are unavailable in the
            // core (spec.md §5: no non-deterministic inputs to the solver).
            order.sort_by_key(|&i| (i.wrapping_mul(2654435761)) % (n.max(1) as u32));
        }
        OrderName::DominationRank => {
            let (dominates, _) = domination_counts(instance);
            order.sort_by_key(|&i| std::cmp::Reverse(dominates[i]));
        }
        OrderName::DominationCount => {
            let (_, dominated_by) = domination_counts(instance);
            order.sort_by_key(|&i| dominated_by[i]);
        }
    }
    order
}

pub struct OrderedView<'a> {
    instance: &'a Instance,
    objective: usize,
    order: Vec<usize>,
}

impl<'a> OrderedView<'a> {
    pub fn new(instance: &'a Instance, objective: usize, name: OrderName) -> Self {
        let order = build_order(instance, name);
        OrderedView {
            instance,
            objective,
            order,
        }
    }
}

impl<'a> ProblemView for OrderedView<'a> {
    fn size(&self) -> usize {
        self.order.len()
    }

    fn capacity(&self) -> Real {
        self.instance.capacity()
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

    fn inst() -> Instance {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0), Real::new(1.0)]), Real::new(1.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(5.0), Real::new(5.0), Real::new(5.0)]), Real::new(1.0)),
        ];
        Instance::new(items, Real::new(2.0), 3).unwrap()
    }

    #[test]
    fn sum_rank_prefers_all_round_dominating_item() {
        let inst = inst();
        let view = OrderedView::new(&inst, 0, OrderName::SumRank);
        assert_eq!(view.source_index(0), 1);
    }

    #[test]
    fn parses_known_names_and_objective_index() {
        assert_eq!("max-rank".parse::<OrderName>().unwrap(), OrderName::MaxRank);
        assert_eq!("2".parse::<OrderName>().unwrap(), OrderName::ByObjective(2));
        assert!("nonsense".parse::<OrderName>().is_err());
    }
}
