//! Directional fixing: for every pair of consecutive supported points, run
//! a combined fixing with the triangle's λ; a variable is fixed globally
//! only when fixed to the same value in every triangle (spec.md §4.4).
//!
//! Open question resolved (SPEC_FULL.md §6): preserve the described
//! behaviour exactly — a variable must agree on the *same* forced value
//! (both "to 1" or both "free-or-excluded") across every triangle to be
//! fixed globally; any disagreement leaves it free.

use super::combined::CombinedFixing;
use crate::error::Result;
use crate::instance::Instance;
use crate::real::Real;
use crate::triangle::Triangle;
use std::collections::BTreeSet;

pub struct DirectionalFixing;

impl DirectionalFixing {
    pub fn fix(instance: &Instance, triangles: &[Triangle]) -> Result<Vec<usize>> {
        let mut forced_in_every_triangle: Option<BTreeSet<usize>> = None;

        for tri in triangles {
            let lambda = tri.lambda();
            let result = CombinedFixing::fix(instance, &lambda, Real::ZERO, Real::ZERO, tri.lower_bound())?;
            let forced: BTreeSet<usize> = result.forced_set.into_iter().collect();
            forced_in_every_triangle = Some(match forced_in_every_triangle {
                None => forced,
                Some(prev) => prev.intersection(&forced).copied().collect(),
            });
        }

        Ok(forced_in_every_triangle.unwrap_or_default().into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;
    use crate::vector::CostVector;

    #[test]
    fn empty_triangle_list_fixes_nothing() {
        let items = vec![Item::new(0, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0)]), Real::new(1.0))];
        let inst = Instance::new(items, Real::new(2.0), 2).unwrap();
        let fixed = DirectionalFixing::fix(&inst, &[]).unwrap();
        assert!(fixed.is_empty());
    }
}
