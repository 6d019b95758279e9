//! End-to-end scenarios against `solve_bi`/`solve_tri`, grounded on the
//! worked examples and global correctness properties in spec.md.

use knapsack::dp_plain::enumerate_pareto_front;
use knapsack::vector::{dominance, Dominance};
use knapsack::{solve_bi, solve_tri, Instance, Item, OrderName, Real};

fn item(i: usize, cost: &[f64], weight: f64) -> Item {
    Item::new(i, knapsack::CostVector::from_vec(cost.iter().map(|&c| Real::new(c)).collect()), Real::new(weight))
}

fn mutually_nondominated(solutions: &[knapsack::KnapsackSolution]) {
    for a in solutions {
        for b in solutions {
            if a.binary() == b.binary() {
                continue;
            }
            assert!(
                !matches!(dominance(&a.value().cost, &b.value().cost), Dominance::Strict),
                "found a solution strictly dominated by another in the returned set"
            );
        }
    }
}

fn has_image(solutions: &[knapsack::KnapsackSolution], cost: &[f64]) -> bool {
    let target: Vec<f64> = cost.to_vec();
    solutions.iter().any(|s| {
        let got: Vec<f64> = s.value().cost.as_slice().iter().map(|r| r.value()).collect();
        got == target
    })
}

#[test]
fn scenario_one_small_bi_objective_instance() {
    let items = vec![item(0, &[3.0, 2.0], 2.0), item(1, &[4.0, 3.0], 3.0), item(2, &[2.0, 4.0], 1.0)];
    let inst = Instance::new(items, Real::new(4.0), 2).unwrap();

    let solutions = solve_bi(&inst).unwrap();
    mutually_nondominated(&solutions);

    let brute = enumerate_pareto_front(&inst);
    for s in &brute {
        assert!(has_image(&solutions, &s.value().cost.as_slice().iter().map(|r| r.value()).collect::<Vec<_>>()));
    }
}

#[test]
fn scenario_two_extremes_plus_nonsupported_middle_solution() {
    let items = vec![
        item(0, &[6.0, 1.0], 2.0),
        item(1, &[5.0, 2.0], 2.0),
        item(2, &[4.0, 3.0], 2.0),
        item(3, &[3.0, 4.0], 2.0),
    ];
    let inst = Instance::new(items, Real::new(4.0), 2).unwrap();

    let solutions = solve_bi(&inst).unwrap();
    mutually_nondominated(&solutions);

    // x = 1001 -> items 0 and 3 -> cost (9, 5), a non-supported solution.
    assert!(has_image(&solutions, &[9.0, 5.0]));
}

#[test]
fn scenario_three_equivalent_solutions_both_kept() {
    let items = vec![item(0, &[1.0, 1.0], 1.0), item(1, &[1.0, 1.0], 1.0)];
    let inst = Instance::new(items, Real::new(1.0), 2).unwrap();

    let solutions = solve_bi(&inst).unwrap();
    let equal_image_count = solutions
        .iter()
        .filter(|s| s.value().cost.as_slice().iter().map(|r| r.value()).collect::<Vec<_>>() == vec![1.0, 1.0])
        .count();
    assert_eq!(equal_image_count, 2, "both equivalent single-item solutions must be kept");
}

#[test]
fn scenario_four_single_item_too_heavy_yields_empty_solution() {
    let items = vec![item(0, &[5.0, 3.0], 2.0)];
    let inst = Instance::new(items, Real::new(1.0), 2).unwrap();

    let solutions = solve_bi(&inst).unwrap();
    assert_eq!(solutions.len(), 1);
    let only = &solutions[0];
    assert_eq!(only.value().cost.as_slice().iter().map(|r| r.value()).collect::<Vec<_>>(), vec![0.0, 0.0]);
    assert_eq!(only.value().weight, Real::ZERO);
}

#[test]
fn scenario_five_tri_objective_mutual_nondomination() {
    let items = vec![item(0, &[3.0, 2.0, 1.0], 1.0), item(1, &[1.0, 3.0, 2.0], 1.0), item(2, &[2.0, 1.0, 3.0], 1.0)];
    let inst = Instance::new(items, Real::new(2.0), 3).unwrap();

    let solutions = solve_tri(&inst, OrderName::Topological).unwrap();
    assert!(!solutions.is_empty());
    mutually_nondominated(&solutions);

    for s in &solutions {
        assert!(s.value().weight <= inst.capacity());
    }
}

#[test]
fn scenario_six_random_bi_instance_matches_brute_force() {
    let n = 14;
    let items: Vec<Item> = (0..n)
        .map(|i| {
            let a = ((i * 37 + 5) % 23) as f64 + 1.0;
            let b = ((i * 59 + 11) % 19) as f64 + 1.0;
            let w = ((i * 13 + 3) % 11) as f64 + 1.0;
            item(i, &[a, b], w)
        })
        .collect();
    let inst = Instance::new(items, Real::new((n as f64) * 5.0), 2).unwrap();

    let solved = solve_bi(&inst).unwrap();
    let brute = enumerate_pareto_front(&inst);

    for s in &brute {
        let cost: Vec<f64> = s.value().cost.as_slice().iter().map(|r| r.value()).collect();
        assert!(has_image(&solved, &cost), "brute-force non-dominated image {cost:?} missing from solver output");
    }
    mutually_nondominated(&solved);
}

#[test]
fn all_zero_costs_yields_a_single_trivial_solution() {
    let items = vec![item(0, &[0.0, 0.0], 1.0), item(1, &[0.0, 0.0], 1.0)];
    let inst = Instance::new(items, Real::new(5.0), 2).unwrap();

    let solutions = solve_bi(&inst).unwrap();
    assert!(solutions.iter().all(|s| s.value().cost.as_slice().iter().all(|c| *c == Real::ZERO)));
}

#[test]
fn all_items_too_heavy_yields_empty_solution_only() {
    let items = vec![item(0, &[4.0, 5.0], 10.0), item(1, &[3.0, 6.0], 12.0)];
    let inst = Instance::new(items, Real::new(2.0), 2).unwrap();

    let solutions = solve_bi(&inst).unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].binary().cardinality(), 0);
}
