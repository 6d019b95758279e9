//! Bi-objective phase-1: dichotomic scalarisation enumerating supported
//! efficient solutions.
//!
//! Ground truth: spec.md §4.8 "Phase-1".

use crate::dag::builder::DagBuilder;
use crate::dag::region::BoundedRegion;
use crate::dag::walk;
use crate::error::Result;
use crate::instance::Instance;
use crate::real::Real;
use crate::solution::{BinarySolution, KnapsackSolution, Trit};
use crate::vector::CostVector;
use crate::views::sortable::SortableView;
use crate::views::ProblemView;

/// Solves the mono DP for objective `obj` and returns the best solution
/// (one optimum; ties broken by the DAG's own amalgamation).
fn solve_mono(instance: &Instance, obj: usize) -> KnapsackSolution {
    let mut view = SortableView::new(instance, obj);
    view.sort_by_decreasing_efficiency();
    let region = BoundedRegion::half_line(Real::neg_infinity());
    let layers = DagBuilder::build(&view, &region);
    let terminal = walk::best_terminals(&layers).into_iter().next();

    let mut binary = BinarySolution::new(instance.size());
    if let Some(terminal) = terminal {
        let costs: Vec<Real> = (0..view.size()).map(|i| view.cost(i)).collect();
        let decisions = walk::single_best(&terminal, &costs);
        for (i, taken) in decisions.into_iter().enumerate() {
            let src = view.source_index(i);
            binary.set_status(src, if taken { Trit::Set } else { Trit::Unset });
        }
    }
    for i in 0..instance.size() {
        if binary.status_of(i) == Trit::Free {
            binary.set_status(i, Trit::Unset);
        }
    }
    KnapsackSolution::from_binary(instance, binary)
}

/// Solves the mono DP on the scalarised instance `lambda·cost`, returning
/// every optimum (the multi-best walk), restricted to the open triangle
/// between `left` and `right` when provided.
fn solve_weighted(instance: &Instance, lambda: &CostVector) -> Vec<KnapsackSolution> {
    use crate::views::weighted_sum::WeightedSumView;

    let mut view = WeightedSumView::new(instance, lambda.clone());
    view.sort_by_decreasing_efficiency();
    let region = BoundedRegion::half_line(Real::neg_infinity());
    let layers = DagBuilder::build(&view, &region);

    let mut out = Vec::new();
    let costs: Vec<Real> = (0..view.size()).map(|i| view.cost(i)).collect();
    for terminal in walk::best_terminals(&layers) {
        for decisions in walk::multi_best(&terminal, view.size(), &costs) {
            let mut binary = BinarySolution::new(instance.size());
            for (i, taken) in decisions.into_iter().enumerate() {
                let src = view.source_index(i);
                binary.set_status(src, if taken { Trit::Set } else { Trit::Unset });
            }
            for i in 0..instance.size() {
                if binary.status_of(i) == Trit::Free {
                    binary.set_status(i, Trit::Unset);
                }
            }
            out.push(KnapsackSolution::from_binary(instance, binary));
        }
    }
    out
}

/// Recursively bisects the interval between two supported solutions,
/// collecting every extreme and non-extreme supported solution found
/// (spec.md §4.8).
fn bisect(instance: &Instance, left: &KnapsackSolution, right: &KnapsackSolution, out: &mut Vec<KnapsackSolution>) {
    let lz = &left.value().cost;
    let rz = &right.value().cost;
    if lz[0] >= rz[0] {
        return;
    }
    // λ perpendicular to the (left, right) segment, coefficients paired
    // with objective 0 and objective 1 respectively, so that both
    // endpoints score equally under `lambda.scalar_product`.
    let coeff0 = lz[1] - rz[1];
    let coeff1 = rz[0] - lz[0];
    if coeff0 <= Real::ZERO && coeff1 <= Real::ZERO {
        return;
    }
    let lambda = CostVector::from_vec(vec![coeff0, coeff1]);

    let candidates = solve_weighted(instance, &lambda);
    // Keep only candidates that improve on both bracketing points.
    let bracket_value = lz.scalar_product(&lambda);
    let mut best: Vec<KnapsackSolution> = candidates
        .into_iter()
        .filter(|c| c.value().cost.scalar_product(&lambda) > bracket_value)
        .collect();
    best.sort_by(|a, b| a.value().cost[0].partial_cmp(&b.value().cost[0]).unwrap());
    best.dedup_by(|a, b| a.value().cost == b.value().cost);

    if best.is_empty() {
        return;
    }
    // If the only extracted optimum is exactly the bracketing pair, stop.
    if best.len() == 1 && (best[0].value().cost == *lz || best[0].value().cost == *rz) {
        return;
    }

    let first = best.first().unwrap().clone();
    let last = best.last().unwrap().clone();
    bisect(instance, left, &first, out);
    for mid in &best {
        out.push(mid.clone());
    }
    bisect(instance, &last, right, out);
}

/// Runs phase-1 in full: computes the two lexicographic extrema and
/// recursively bisects between them, returning every supported efficient
/// solution (extreme and non-extreme), sorted by increasing `z1`.
pub fn solve_full(instance: &Instance) -> Result<Vec<KnapsackSolution>> {
    if instance.nb_objectives() != 2 {
        return Err(crate::error::KnapsackError::InvariantViolation(
            "phase-1 is defined for bi-objective instances only".to_string(),
        ));
    }
    let x1 = solve_mono(instance, 0);
    let x2 = solve_mono(instance, 1);

    let mut out = vec![x1.clone(), x2.clone()];
    bisect(instance, &x2, &x1, &mut out);
    out.sort_by(|a, b| a.value().cost[0].partial_cmp(&b.value().cost[0]).unwrap());
    out.dedup_by(|a, b| a.value().cost == b.value().cost);

    let points: Vec<CostVector> = out.iter().map(|s| s.value().cost.clone()).collect();
    let facets = crate::weightset::from_supported(&points);
    log::debug!("phase-1 weight-set polytope has {} facets", facets.len());

    Ok(out)
}

/// Convenience wrapper returning only the cost-space images of the
/// supported frontier (used by `relax::BoundSetRelaxation`).
pub fn solve(instance: &Instance) -> Result<Vec<CostVector>> {
    Ok(solve_full(instance)?.into_iter().map(|s| s.value().cost.clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    #[test]
    fn solves_a_tiny_bi_objective_instance() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(3.0), Real::new(1.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(3.0)]), Real::new(2.0)),
        ];
        let inst = Instance::new(items, Real::new(4.0), 2).unwrap();
        let frontier = solve_full(&inst).unwrap();
        assert!(!frontier.is_empty());
    }
}
