//! Cost vectors and dominance comparison.
//!
//! Ground truth: `moo::vector<T>` and `moo::dominance` in the original
//! source. A `CostVector` is a fixed-length vector in objective space;
//! dominance is always in the maximisation direction (spec.md §4.1).

use crate::error::{KnapsackError, Result};
use crate::real::Real;
use std::cmp::Ordering;
use std::ops::{Add, Index, IndexMut, Sub};

#[derive(Debug, Clone, PartialEq)]
pub struct CostVector {
    data: Vec<Real>,
}

impl CostVector {
    pub fn zeros(p: usize) -> Self {
        CostVector {
            data: vec![Real::ZERO; p],
        }
    }

    pub fn from_vec(data: Vec<Real>) -> Self {
        CostVector { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }

    fn check_dim(&self, that: &CostVector) -> Result<()> {
        if self.len() != that.len() {
            Err(KnapsackError::DimensionMismatch {
                expected: self.len(),
                got: that.len(),
            })
        } else {
            Ok(())
        }
    }

    pub fn scalar_product(&self, lambda: &CostVector) -> Real {
        debug_assert_eq!(self.len(), lambda.len());
        self.data
            .iter()
            .zip(lambda.data.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    pub fn checked_add(&self, other: &CostVector) -> Result<CostVector> {
        self.check_dim(other)?;
        Ok(CostVector::from_vec(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        ))
    }

    pub fn checked_sub(&self, other: &CostVector) -> Result<CostVector> {
        self.check_dim(other)?;
        Ok(CostVector::from_vec(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        ))
    }

    /// Componentwise max, as used to maintain `vertex.max_profit`.
    pub fn componentwise_max(&self, other: &CostVector) -> CostVector {
        debug_assert_eq!(self.len(), other.len());
        CostVector::from_vec(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a.max(b))
                .collect(),
        )
    }

    pub fn componentwise_min(&self, other: &CostVector) -> CostVector {
        debug_assert_eq!(self.len(), other.len());
        CostVector::from_vec(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a.min(b))
                .collect(),
        )
    }

    pub fn le_elementwise(&self, other: &CostVector) -> bool {
        self.data.iter().zip(other.data.iter()).all(|(&a, &b)| a <= b)
    }
}

impl Index<usize> for CostVector {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.data[i]
    }
}

impl IndexMut<usize> for CostVector {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.data[i]
    }
}

impl Add for &CostVector {
    type Output = CostVector;
    fn add(self, rhs: &CostVector) -> CostVector {
        self.checked_add(rhs).expect("cost vectors of equal length")
    }
}

impl Sub for &CostVector {
    type Output = CostVector;
    fn sub(self, rhs: &CostVector) -> CostVector {
        self.checked_sub(rhs).expect("cost vectors of equal length")
    }
}

/// The four-valued result of comparing two vectors in the maximisation
/// direction, mirroring `moo::dominance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Neither vector dominates the other.
    None,
    /// `a` is strictly better than `b` on every coordinate.
    Strict,
    /// `a` is at least as good as `b` on every coordinate, better on at least
    /// one.
    Weak,
    /// `a` equals `b`.
    Equal,
}

/// Compares `a` to `b` under maximisation on every objective.
pub fn dominance(a: &CostVector, b: &CostVector) -> Dominance {
    debug_assert_eq!(a.len(), b.len());
    let mut any_greater = false;
    let mut any_less = false;
    let mut any_equal_only = false;
    for i in 0..a.len() {
        match a[i].partial_cmp(&b[i]).unwrap() {
            Ordering::Greater => any_greater = true,
            Ordering::Less => any_less = true,
            Ordering::Equal => any_equal_only = true,
        }
    }
    let _ = any_equal_only;
    if any_greater && !any_less {
        if a.data.iter().zip(b.data.iter()).all(|(&x, &y)| x > y) {
            Dominance::Strict
        } else {
            Dominance::Weak
        }
    } else if !any_greater && !any_less {
        Dominance::Equal
    } else {
        Dominance::None
    }
}

/// `a` dominates `b` (strictly or weakly, but not equal).
pub fn strictly_dominates(a: &CostVector, b: &CostVector) -> bool {
    matches!(dominance(a, b), Dominance::Strict | Dominance::Weak)
}

/// Lexicographic ordering on cost vectors (spec.md §3: "Solution value...
/// lexicographic order is cost-first").
pub fn lex_cmp(a: &CostVector, b: &CostVector) -> Ordering {
    for i in 0..a.len() {
        match a[i].partial_cmp(&b[i]).unwrap() {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

impl Eq for CostVector {}

impl PartialOrd for CostVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(lex_cmp(self, other))
    }
}

impl Ord for CostVector {
    fn cmp(&self, other: &Self) -> Ordering {
        lex_cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(xs: &[f64]) -> CostVector {
        CostVector::from_vec(xs.iter().map(|&x| Real::new(x)).collect())
    }

    #[test]
    fn dominance_cases() {
        assert_eq!(dominance(&v(&[3.0, 4.0]), &v(&[1.0, 1.0])), Dominance::Strict);
        assert_eq!(dominance(&v(&[3.0, 4.0]), &v(&[3.0, 1.0])), Dominance::Weak);
        assert_eq!(dominance(&v(&[3.0, 4.0]), &v(&[3.0, 4.0])), Dominance::Equal);
        assert_eq!(dominance(&v(&[3.0, 1.0]), &v(&[1.0, 3.0])), Dominance::None);
    }

    #[test]
    fn lexicographic_order() {
        assert!(lex_cmp(&v(&[1.0, 5.0]), &v(&[2.0, 0.0])) == Ordering::Less);
        assert!(lex_cmp(&v(&[2.0, 0.0]), &v(&[2.0, 1.0])) == Ordering::Less);
    }
}
