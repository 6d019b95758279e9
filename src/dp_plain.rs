//! The plain capacity-indexed dynamic-programming enumerator: superseded by
//! the layered DAG (`dag`/`ranking`) for production solving, kept for
//! cross-checking small instances in tests.
//!
//! Ground truth: mirrors the teacher's `gen_table`/`gen_path` weight-indexed
//! table in `knapsack/dp.rs`, generalised from a single integer profit axis
//! to a discretised capacity axis so it works with `Real`-valued weights.

use crate::instance::Instance;
use crate::real::Real;
use crate::solution::{BinarySolution, KnapsackSolution, Trit};
use ndarray::Array2;

/// Discretises `capacity` into `buckets` integer steps and returns the
/// `Real` weight represented by bucket index `b`.
fn bucket_size(capacity: Real, buckets: usize) -> Real {
    if buckets == 0 {
        Real::ZERO
    } else {
        capacity / Real::new(buckets as f64)
    }
}

/// Solves the single-objective 0-1 knapsack on `obj` via a classic
/// weight-indexed DP table discretised into `buckets` capacity steps,
/// mirroring the teacher's `gen_table`/`gen_path` (spec.md's `dp_plain`
/// module, "kept for cross-checking small instances").
pub fn solve_mono_table(instance: &Instance, obj: usize, buckets: usize) -> KnapsackSolution {
    let n = instance.size();
    let step = bucket_size(instance.capacity(), buckets);
    let mut table = Array2::<Real>::from_elem((n + 1, buckets + 1), Real::ZERO);

    for i in 0..n {
        let item = instance.item(i);
        let item_buckets = if step == Real::ZERO {
            0
        } else {
            (item.weight / step).floor().value() as usize
        };
        for w in 0..=buckets {
            let without = table[[i, w]];
            let with = if w >= item_buckets {
                table[[i, w - item_buckets]] + item.cost[obj]
            } else {
                Real::ZERO
            };
            table[[i + 1, w]] = without.max(with);
        }
    }

    let mut binary = BinarySolution::new(n);
    let mut w = buckets;
    for i in (0..n).rev() {
        let item = instance.item(i);
        let item_buckets = if step == Real::ZERO {
            0
        } else {
            (item.weight / step).floor().value() as usize
        };
        let took = table[[i + 1, w]] != table[[i, w]];
        binary.set_status(i, if took { Trit::Set } else { Trit::Unset });
        if took {
            w -= item_buckets;
        }
    }

    KnapsackSolution::from_binary(instance, binary)
}

/// Enumerates every feasible item subset by brute force, reducing to the
/// non-dominated frontier. Exponential in item count; intended only for
/// cross-checking the phase-1/phase-2/A* solvers on small test instances.
pub fn enumerate_pareto_front(instance: &Instance) -> Vec<KnapsackSolution> {
    let n = instance.size();
    assert!(n <= 24, "brute-force enumeration is only for small test instances");

    let mut front = crate::nondominated::ParetoSet::new();
    for mask in 0u32..(1u32 << n) {
        let mut binary = BinarySolution::new(n);
        for i in 0..n {
            binary.set_status(i, if mask & (1 << i) != 0 { Trit::Set } else { Trit::Unset });
        }
        if !binary.is_feasible(instance) {
            continue;
        }
        front.insert(KnapsackSolution::from_binary(instance, binary));
    }
    front.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;
    use crate::vector::CostVector;

    fn inst() -> Instance {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(10.0), Real::new(1.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(6.0), Real::new(1.0)]), Real::new(3.0)),
            Item::new(2, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0)]), Real::new(1.0)),
        ];
        Instance::new(items, Real::new(4.0), 2).unwrap()
    }

    #[test]
    fn mono_table_matches_brute_force_optimum() {
        let inst = inst();
        let table_solution = solve_mono_table(&inst, 0, 400);
        let front = enumerate_pareto_front(&inst);
        let best_brute = front.iter().map(|s| s.value().cost[0]).max_by(|a, b| a.partial_cmp(b).unwrap()).unwrap();
        assert_eq!(table_solution.value().cost[0], best_brute);
    }

    #[test]
    fn brute_force_front_is_nondominated() {
        let inst = inst();
        let front = enumerate_pareto_front(&inst);
        for a in &front {
            for b in &front {
                if a.binary() == b.binary() {
                    continue;
                }
                assert!(!matches!(
                    crate::vector::dominance(&a.value().cost, &b.value().cost),
                    crate::vector::Dominance::Strict
                ));
            }
        }
    }
}
