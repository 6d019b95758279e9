//! Phase-1 weight-set polytope: for a supported extreme point y, the set of
//! λ that scalarise to y. A line segment in the bi-objective case.
//!
//! Ground truth: spec.md §3's "Weight set (phase-1)" entry.

use crate::real::Real;
use crate::vector::CostVector;

/// The λ-interval `[lambda_low, lambda_high]` (expressed as the ratio
/// λ1/(λ1+λ2) that scalarises to this extreme point), plus the neighbouring
/// extreme points that bound it.
#[derive(Debug, Clone)]
pub struct WeightSet {
    pub point: CostVector,
    pub lambda_low: Real,
    pub lambda_high: Real,
    pub left_neighbor: Option<usize>,
    pub right_neighbor: Option<usize>,
}

impl WeightSet {
    pub fn new(point: CostVector, lambda_low: Real, lambda_high: Real) -> Self {
        WeightSet {
            point,
            lambda_low,
            lambda_high,
            left_neighbor: None,
            right_neighbor: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lambda_low > self.lambda_high
    }

    /// Refines this weight set's interval against a newly discovered point
    /// whose scalarised value is better over `[new_low, new_high]`;
    /// insertions only ever shrink the interval (spec.md §3 invariant).
    pub fn refine(&mut self, new_low: Real, new_high: Real) {
        self.lambda_low = self.lambda_low.max(new_low);
        self.lambda_high = self.lambda_high.min(new_high);
    }
}

/// λ-ratio `coeff0 / (coeff0 + coeff1)` of the scalarisation that ties
/// `left` and `right` under `Triangle::lambda`'s convention (coefficients
/// paired with objective 0 and objective 1 respectively).
fn ratio(left: &CostVector, right: &CostVector) -> Real {
    let coeff0 = left[1] - right[1];
    let coeff1 = right[0] - left[0];
    let sum = coeff0 + coeff1;
    if sum == Real::ZERO {
        Real::ZERO
    } else {
        coeff0 / sum
    }
}

/// Builds the weight-set polytope for a list of supported points already
/// sorted by increasing first-objective value: each point's λ-interval is
/// bounded by the scalarisation ratio of the triangle on either side, and
/// `left_neighbor`/`right_neighbor` index into the same slice's ordering.
pub fn from_supported(points: &[CostVector]) -> Vec<WeightSet> {
    let n = points.len();
    let mut sets = Vec::with_capacity(n);
    for i in 0..n {
        let lambda_low = if i + 1 < n { ratio(&points[i], &points[i + 1]) } else { Real::ZERO };
        let lambda_high = if i > 0 { ratio(&points[i - 1], &points[i]) } else { Real::new(1.0) };
        let mut ws = WeightSet::new(points[i].clone(), lambda_low, lambda_high);
        ws.left_neighbor = if i > 0 { Some(i - 1) } else { None };
        ws.right_neighbor = if i + 1 < n { Some(i + 1) } else { None };
        sets.push(ws);
    }
    sets
}
