//! Search regions passed to the DAG builder: a half-line for a single
//! scalar objective, a triangle-front for the bi-objective ranking engine,
//! or a bounded region for the tri-objective A* cuts.
//!
//! Ground truth: spec.md §4.5 ("a region (half-line for a single scalar,
//! triangle-front for bi-objective, bounded region for tri-objective)").

use crate::real::Real;
use crate::vector::CostVector;

#[derive(Debug, Clone)]
pub enum BoundedRegion {
    /// A single scalar threshold: vertices below it are pruned.
    HalfLine { min_profit: Real },
    /// A triangle in the bi-objective plane, tracked by its current
    /// tightened lower bound on λ·y (see `triangle::Triangle`).
    TriangleFront { lambda: CostVector, min_profit: Real },
    /// A componentwise lower bound in p-space (tri-objective A* nodes).
    Bounded { lower: CostVector },
}

impl BoundedRegion {
    pub fn half_line(min_profit: Real) -> Self {
        BoundedRegion::HalfLine { min_profit }
    }

    pub fn triangle_front(lambda: CostVector, min_profit: Real) -> Self {
        BoundedRegion::TriangleFront { lambda, min_profit }
    }

    pub fn bounded(lower: CostVector) -> Self {
        BoundedRegion::Bounded { lower }
    }

    /// Scalar threshold a vertex's profit must reach to survive pruning.
    pub fn min_profit(&self) -> Real {
        match self {
            BoundedRegion::HalfLine { min_profit } => *min_profit,
            BoundedRegion::TriangleFront { min_profit, .. } => *min_profit,
            BoundedRegion::Bounded { lower } => lower.as_slice().iter().copied().sum(),
        }
    }

    /// `true` iff a vertex whose componentwise-max upper envelope is
    /// `max_profit` can still reach this region.
    pub fn is_feasible(&self, max_profit: &CostVector) -> bool {
        match self {
            BoundedRegion::HalfLine { .. } => true,
            BoundedRegion::TriangleFront { lambda, min_profit } => max_profit.scalar_product(lambda) >= *min_profit,
            BoundedRegion::Bounded { lower } => lower.le_elementwise(max_profit),
        }
    }

    pub fn tighten(&mut self, new_min_profit: Real) {
        match self {
            BoundedRegion::HalfLine { min_profit } => *min_profit = new_min_profit,
            BoundedRegion::TriangleFront { min_profit, .. } => *min_profit = new_min_profit,
            BoundedRegion::Bounded { .. } => {}
        }
    }
}
