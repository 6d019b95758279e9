//! The bi-objective entry point: phase-1 then phase-2, unioned and sorted.
//!
//! Ground truth: spec.md §4.8 ("Global output: the union of phase-1
//! supported and phase-2 non-supported solutions") and §6 ("the final
//! bi-objective output is sorted by the caller, by lexicographic solution
//! value, before being returned").

use crate::error::Result;
use crate::instance::Instance;
use crate::phase1;
use crate::phase2;
use crate::solution::KnapsackSolution;

/// Computes every efficient (Pareto-optimal) solution of a bi-objective
/// 0-1 knapsack instance.
pub fn solve_bi(instance: &Instance) -> Result<Vec<KnapsackSolution>> {
    if instance.nb_objectives() != 2 {
        return Err(crate::error::KnapsackError::InvariantViolation(
            "solve_bi requires a two-objective instance".to_string(),
        ));
    }
    log::debug!("phase-1: computing supported solutions for {} items", instance.size());
    let supported = phase1::solve_full(instance)?;
    log::debug!("phase-1 found {} supported solutions", supported.len());

    log::debug!("phase-2: ranking non-supported solutions per triangle");
    let non_supported = phase2::run(instance, &supported);
    log::debug!("phase-2 found {} non-supported solutions", non_supported.len());

    let mut all: Vec<KnapsackSolution> = supported.into_iter().chain(non_supported).collect();
    all.sort_by(|a, b| a.value().cmp(b.value()));
    all.dedup_by(|a, b| a.binary() == b.binary());
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;
    use crate::real::Real;
    use crate::vector::CostVector;

    #[test]
    fn solves_a_small_instance_and_returns_nondominated_solutions() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(3.0), Real::new(1.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(3.0)]), Real::new(2.0)),
            Item::new(2, CostVector::from_vec(vec![Real::new(2.0), Real::new(2.0)]), Real::new(2.0)),
        ];
        let inst = Instance::new(items, Real::new(4.0), 2).unwrap();
        let solutions = solve_bi(&inst).unwrap();
        assert!(!solutions.is_empty());
        for s in &solutions {
            assert!(s.binary().weight(&inst) <= inst.capacity());
        }
    }

    #[test]
    fn rejects_tri_objective_instance() {
        let items = vec![Item::new(0, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0), Real::new(1.0)]), Real::new(1.0))];
        let inst = Instance::new(items, Real::new(1.0), 3).unwrap();
        assert!(solve_bi(&inst).is_err());
    }
}
