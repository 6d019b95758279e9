//! Simple fixing: the same idea as MTR fixing but against a single fixed
//! bound rather than a moving lower-bound set, for use inside loops that
//! already hold a bound (spec.md §4.4).
//!
//! Ground truth: `bikp/reduction/simple_variable_fixing.hpp`.

use super::FixingResult;
use crate::error::Result;
use crate::fixing::mtr::MtrFixing;
use crate::instance::Instance;
use crate::real::Real;

pub struct SimpleFixing;

impl SimpleFixing {
    /// Fixes variables against a single, non-moving `bound`. Implemented in
    /// terms of `MtrFixing` with a constant lower bound, since both share
    /// the identical UB0/UB1 computation; simple fixing never revisits the
    /// bound as new incumbents are found within one call.
    pub fn fix(instance: &Instance, obj: usize, bound: Real) -> Result<FixingResult> {
        MtrFixing::fix(instance, obj, bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;
    use crate::vector::CostVector;

    #[test]
    fn agrees_with_mtr_fixing_for_a_fixed_bound() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(4.0), Real::new(0.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(0.0)]), Real::new(5.0)),
        ];
        let inst = Instance::new(items, Real::new(3.0), 2).unwrap();
        let a = SimpleFixing::fix(&inst, 0, Real::new(2.0)).unwrap();
        let b = MtrFixing::fix(&inst, 0, Real::new(2.0)).unwrap();
        assert_eq!(a.free, b.free);
        assert_eq!(a.forced_set, b.forced_set);
    }
}
