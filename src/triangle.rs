//! Triangle and triangle set: the phase-2 region scheduler.
//!
//! Ground truth: spec.md §3's "Triangle"/"Triangle set" entries, grounded on
//! the phase-2 orchestration described in §4.8.

use crate::nondominated::ParetoSet;
use crate::real::Real;
use crate::vector::CostVector;

/// Defined by two consecutive supported extreme points; derived
/// scalarisation coefficients, paired with objective 0 and objective 1
/// respectively, are λ0 = z_left.p2 - z_right.p2 and λ1 = z_right.p1 -
/// z_left.p1 — chosen so both endpoints score equally under
/// `lambda().scalar_product`.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub z_left: CostVector,
    pub z_right: CostVector,
    coeff0: Real,
    coeff1: Real,
    locked: bool,
    front: ParetoSet,
    upper_bound: Real,
    lower_bound: Real,
}

impl Triangle {
    pub fn new(z_left: CostVector, z_right: CostVector) -> Self {
        let coeff0 = z_left[1] - z_right[1];
        let coeff1 = z_right[0] - z_left[0];
        let upper_bound = z_left.scalar_product(&CostVector::from_vec(vec![coeff0, coeff1]));
        Triangle {
            z_left,
            z_right,
            coeff0,
            coeff1,
            locked: false,
            front: ParetoSet::new(),
            upper_bound,
            lower_bound: Real::neg_infinity(),
        }
    }

    /// Sort key: area of the triangle under the two extreme points and the
    /// axes, used to pre-sort triangles ascending (spec.md §4.8 — "sort
    /// triangles by area ascending, empirically strongest for the ranking
    /// engine").
    pub fn area(&self) -> Real {
        let base = self.z_right[0] - self.z_left[0];
        let height = self.z_left[1] - self.z_right[1];
        base * height * Real::new(0.5)
    }

    pub fn lambda(&self) -> CostVector {
        CostVector::from_vec(vec![self.coeff0, self.coeff1])
    }

    pub fn lower_bound(&self) -> Real {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> Real {
        self.upper_bound
    }

    pub fn strip_width(&self) -> Real {
        self.upper_bound - self.lower_bound
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Routes `point` into this triangle's front if it lies strictly
    /// inside it (spec.md §3: "New points are routed to the triangle
    /// containing them").
    pub fn try_insert(&mut self, solution: crate::solution::KnapsackSolution) -> bool {
        if self.locked {
            return false;
        }
        let image = &solution.value().cost;
        if image[0] <= self.z_left[0] || image[0] >= self.z_right[0] {
            return false;
        }
        matches!(self.front.insert(solution), crate::nondominated::InsertOutcome::Added)
    }

    pub fn front(&self) -> &ParetoSet {
        &self.front
    }
}

/// Maps each triangle (keyed on z_left.p1) to its state; scheduling picks
/// the triangle with the smallest current strip width.
#[derive(Debug, Default)]
pub struct TriangleSet {
    triangles: Vec<Triangle>,
}

impl TriangleSet {
    pub fn new() -> Self {
        TriangleSet { triangles: Vec::new() }
    }

    pub fn from_extreme_points(points: &[CostVector]) -> Self {
        let mut triangles = Vec::new();
        for w in points.windows(2) {
            triangles.push(Triangle::new(w[0].clone(), w[1].clone()));
        }
        triangles.sort_by(|a, b| a.area().partial_cmp(&b.area()).unwrap());
        TriangleSet { triangles }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Picks the unlocked triangle with the smallest (upper - lower) strip.
    pub fn next_to_explore(&mut self) -> Option<&mut Triangle> {
        let idx = self.next_unlocked_index()?;
        Some(&mut self.triangles[idx])
    }

    /// Index of the unlocked triangle with the smallest (upper - lower)
    /// strip, without holding a borrow of `self` — lets a caller read the
    /// chosen triangle's fields and later mutate a *different* triangle
    /// (via `route`) in the same iteration.
    pub fn next_unlocked_index(&self) -> Option<usize> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_locked())
            .min_by(|(_, a), (_, b)| a.strip_width().partial_cmp(&b.strip_width()).unwrap())
            .map(|(i, _)| i)
    }

    pub fn get(&self, idx: usize) -> &Triangle {
        &self.triangles[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut Triangle {
        &mut self.triangles[idx]
    }

    pub fn route(&mut self, solution: crate::solution::KnapsackSolution) -> bool {
        let image0 = solution.value().cost[0];
        for t in self.triangles.iter_mut() {
            if image0 > t.z_left[0] && image0 < t.z_right[0] {
                return t.try_insert(solution);
            }
        }
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }

    pub fn into_vec(self) -> Vec<Triangle> {
        self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real::Real;

    fn v(xs: &[f64]) -> CostVector {
        CostVector::from_vec(xs.iter().map(|&x| Real::new(x)).collect())
    }

    #[test]
    fn triangle_area_and_lambda() {
        let tri = Triangle::new(v(&[1.0, 5.0]), v(&[4.0, 2.0]));
        assert_eq!(tri.area(), Real::new(4.5));
        let lambda = tri.lambda();
        assert_eq!(lambda[0], Real::new(3.0));
        assert_eq!(lambda[1], Real::new(3.0));
    }

    #[test]
    fn smallest_strip_is_scheduled_first() {
        let mut set = TriangleSet::from_extreme_points(&[v(&[1.0, 10.0]), v(&[5.0, 5.0]), v(&[10.0, 1.0])]);
        let chosen = set.next_to_explore().unwrap();
        assert!(!chosen.is_locked());
    }
}
