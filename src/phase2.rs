//! Bi-objective phase-2: the triangle scheduling loop driving the ranking
//! engine over each triangle in turn.
//!
//! Ground truth: spec.md §4.8 "Phase-2".

use crate::dag::builder::DagBuilder;
use crate::dag::region::BoundedRegion;
use crate::fixing::simple::SimpleFixing;
use crate::instance::Instance;
use crate::ranking;
use crate::real::Real;
use crate::solution::{BinarySolution, KnapsackSolution, Trit};
use crate::triangle::TriangleSet;
use crate::vector::CostVector;
use crate::views::weighted_sum::WeightedSumView;
use crate::views::ProblemView;

/// Runs phase-2 over the triangles bracketed by `supported` (already
/// sorted by increasing `z1`), returning every non-supported efficient
/// solution found strictly inside some triangle.
pub fn run(instance: &Instance, supported: &[KnapsackSolution]) -> Vec<KnapsackSolution> {
    let extreme_points: Vec<CostVector> = supported.iter().map(|s| s.value().cost.clone()).collect();
    let mut triangles = TriangleSet::from_extreme_points(&extreme_points);

    while let Some(idx) = triangles.next_unlocked_index() {
        let lambda = triangles.get(idx).lambda();

        // The two endpoints of the triangle are tied at the hull's own
        // λ-scalarised value; interior (non-supported) points necessarily
        // score strictly below it, so ranking must be allowed to descend
        // well under that value. Every feasible solution's λ-scalarised
        // value is non-negative (costs and λ's coefficients both are), so
        // the instance's trivial lower bound of zero is a safe floor that
        // still bounds the ranking engine's enumeration.
        let lower_bound = Real::ZERO;

        let fixing = match SimpleFixing::fix(instance, 0, Real::neg_infinity()) {
            Ok(f) => f,
            Err(_) => {
                triangles.get_mut(idx).lock();
                continue;
            }
        };
        let _ = fixing;

        let mut view = WeightedSumView::new(instance, lambda.clone());
        view.sort_by_decreasing_efficiency();
        let mut region = BoundedRegion::triangle_front(lambda.clone(), lower_bound);
        let layers = DagBuilder::build(&view, &region);

        let solutions = ranking::rank(&layers, &mut region, view.size());

        for decisions in solutions {
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
            let candidate = KnapsackSolution::from_binary(instance, binary);
            // Route rather than push directly: a point discovered while
            // ranking this triangle can legitimately belong to a
            // neighbouring, not-yet-explored triangle (spec.md §4.8).
            triangles.route(candidate);
        }

        triangles.get_mut(idx).lock();
    }

    let mut discovered = Vec::new();
    for triangle in triangles.iter() {
        discovered.extend(triangle.front().iter().cloned());
    }
    discovered
}
