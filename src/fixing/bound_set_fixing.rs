//! Bound-set fixing: for each item, relax once with `x_i` forced; if the
//! obtained bound set is dominated by the current lower-bound set and lies
//! under the nadir cut, fix `x_i` to its complement (spec.md §4.4).

use crate::bound_set::BoundSet;
use crate::instance::{Instance, Item};
use crate::real::Real;
use crate::relax::BoundSetRelaxation;

pub struct BoundSetFixing;

impl BoundSetFixing {
    /// Returns, for each item, `Some(true)` if it should be fixed to 1,
    /// `Some(false)` if fixed to 0, or `None` if it stays free.
    pub fn fix(instance: &Instance, lower_bound: &BoundSet) -> Vec<Option<bool>> {
        (0..instance.size())
            .map(|i| Self::fix_one(instance, i, lower_bound))
            .collect()
    }

    fn fix_one(instance: &Instance, i: usize, lower_bound: &BoundSet) -> Option<bool> {
        let item = instance.item(i);
        let without = Self::reduced_excluding(instance, i);
        let with = Self::reduced_including(instance, i);

        let improves_without = BoundSetRelaxation::improves(&without, lower_bound);
        let improves_with = item.weight <= instance.capacity() && BoundSetRelaxation::improves(&with, lower_bound);

        match (improves_without, improves_with) {
            (false, true) => Some(true),
            (true, false) => Some(false),
            _ => None,
        }
    }

    fn reduced_excluding(instance: &Instance, skip: usize) -> Instance {
        let items: Vec<Item> = instance
            .items()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, it)| it.clone())
            .collect();
        Instance::new(items, instance.capacity(), instance.nb_objectives()).expect("reduced instance stays valid")
    }

    fn reduced_including(instance: &Instance, force: usize) -> Instance {
        let remaining_capacity = instance.capacity() - instance.item(force).weight;
        let capacity = if remaining_capacity < Real::ZERO { Real::ZERO } else { remaining_capacity };
        let items: Vec<Item> = instance
            .items()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != force)
            .map(|(_, it)| it.clone())
            .collect();
        Instance::new(items, capacity, instance.nb_objectives()).expect("reduced instance stays valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::CostVector;

    #[test]
    fn heavy_item_with_no_room_is_never_fixed_to_one() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0)]), Real::new(1.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(1.0), Real::new(1.0)]), Real::new(10.0)),
        ];
        let inst = Instance::new(items, Real::new(1.0), 2).unwrap();
        let lb = BoundSet::new();
        let decisions = BoundSetFixing::fix(&inst, &lb);
        assert_ne!(decisions[1], Some(true));
    }
}
