//! `WorldVec`: the integer quantity vector every domain value is built on.
//!
//! One component per declared type. Comparison is component-wise and is
//! only a partial order, so `WorldVec` deliberately does **not** implement
//! `PartialOrd`; use [`WorldVec::covers`] instead.
//!
//! Arithmetic panics on length mismatch. Lengths are validated once when a
//! [`Domain`](crate::world::domain::Domain) is built, after which every
//! vector in it shares the type list's length.

use std::fmt;
use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

/// Fixed-length integer vector, one component per type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WorldVec(Vec<i64>);

impl WorldVec {
    /// The all-zero vector of the given length.
    #[must_use]
    pub fn zero(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// The `i`-th unit vector of the given length.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[must_use]
    pub fn unit(len: usize, i: usize) -> Self {
        assert!(i < len, "unit index {i} out of range for length {len}");
        let mut v = vec![0; len];
        v[i] = 1;
        Self(v)
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component slice.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// `true` iff `self[i] >= other[i]` for every component.
    ///
    /// Vacuously true for two empty vectors.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        debug_assert_eq!(self.len(), other.len());
        self.0.iter().zip(&other.0).all(|(a, b)| a >= b)
    }

    /// Indices of strictly positive components, ascending.
    pub fn positive_components(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, x)| **x > 0)
            .map(|(i, _)| i)
    }

    /// `true` iff no component is strictly positive.
    #[must_use]
    pub fn is_trivially_met(&self) -> bool {
        self.0.iter().all(|&x| x <= 0)
    }

    /// Largest component, or `None` for an empty vector.
    #[must_use]
    pub fn max_component(&self) -> Option<i64> {
        self.0.iter().copied().max()
    }

    /// Multiply every component by `k`, saturating at the `i64` bounds.
    #[must_use]
    pub fn scaled(&self, k: i64) -> Self {
        Self(self.0.iter().map(|x| x.saturating_mul(k)).collect())
    }

    /// Componentwise sum, saturating at the `i64` bounds.
    pub fn saturating_add_assign(&mut self, rhs: &WorldVec) {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        for (a, b) in self.0.iter_mut().zip(&rhs.0) {
            *a = a.saturating_add(*b);
        }
    }

    /// `self - rhs`, or `None` if any component overflows.
    #[must_use]
    pub fn checked_sub(&self, rhs: &WorldVec) -> Option<WorldVec> {
        if self.len() != rhs.len() {
            return None;
        }
        self.0
            .iter()
            .zip(&rhs.0)
            .map(|(a, b)| a.checked_sub(*b))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Little-endian byte encoding, used for fingerprinting.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() * 8);
        for x in &self.0 {
            out.extend_from_slice(&x.to_le_bytes());
        }
        out
    }
}

impl From<Vec<i64>> for WorldVec {
    fn from(v: Vec<i64>) -> Self {
        Self(v)
    }
}

impl<const N: usize> From<[i64; N]> for WorldVec {
    fn from(v: [i64; N]) -> Self {
        Self(v.to_vec())
    }
}

impl Index<usize> for WorldVec {
    type Output = i64;

    fn index(&self, i: usize) -> &i64 {
        &self.0[i]
    }
}

impl AddAssign<&WorldVec> for WorldVec {
    fn add_assign(&mut self, rhs: &WorldVec) {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        for (a, b) in self.0.iter_mut().zip(&rhs.0) {
            *a += b;
        }
    }
}

impl SubAssign<&WorldVec> for WorldVec {
    fn sub_assign(&mut self, rhs: &WorldVec) {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        for (a, b) in self.0.iter_mut().zip(&rhs.0) {
            *a -= b;
        }
    }
}

impl Add<&WorldVec> for &WorldVec {
    type Output = WorldVec;

    fn add(self, rhs: &WorldVec) -> WorldVec {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub<&WorldVec> for &WorldVec {
    type Output = WorldVec;

    fn sub(self, rhs: &WorldVec) -> WorldVec {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

/// Renders as a parenthesized tuple: `(1, 0, 2)`.
impl fmt::Display for WorldVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_is_componentwise() {
        let a = WorldVec::from([2, 1, 0]);
        assert!(a.covers(&WorldVec::from([2, 0, 0])));
        assert!(a.covers(&a));
        assert!(!a.covers(&WorldVec::from([0, 0, 1])));
        // incomparable pair: neither covers the other
        let b = WorldVec::from([0, 2, 0]);
        assert!(!a.covers(&b));
        assert!(!b.covers(&a));
    }

    #[test]
    fn large_values_saturate_instead_of_overflowing() {
        let v = WorldVec::from([4_000_000_000, -4_000_000_000, 0]);
        let scaled = v.scaled(4_000_000_000);
        assert_eq!(scaled.as_slice(), &[i64::MAX, i64::MIN, 0]);
        let mut acc = WorldVec::from([i64::MAX - 1, 0, 5]);
        acc.saturating_add_assign(&WorldVec::from([10, 1, 5]));
        assert_eq!(acc.as_slice(), &[i64::MAX, 1, 10]);
        assert_eq!(WorldVec::from([i64::MIN]).checked_sub(&WorldVec::from([1])), None);
        assert_eq!(
            WorldVec::from([3, 1]).checked_sub(&WorldVec::from([1, 1])),
            Some(WorldVec::from([2, 0]))
        );
    }

    #[test]
    fn unit_and_positive_components() {
        let u = WorldVec::unit(3, 1);
        assert_eq!(u.as_slice(), &[0, 1, 0]);
        let v = WorldVec::from([3, 0, -2, 1]);
        assert_eq!(v.positive_components().collect::<Vec<_>>(), vec![0, 3]);
        assert!(!v.is_trivially_met());
        assert!(WorldVec::from([0, -1]).is_trivially_met());
    }

    #[test]
    fn add_sub_round_trip() {
        let a = WorldVec::from([4, 5, 6]);
        let b = WorldVec::from([1, 7, 0]);
        let shifted = &a - &b;
        assert_eq!(shifted.as_slice(), &[3, -2, 6]);
        assert_eq!(&shifted + &b, a);
    }

    #[test]
    fn scaled_and_max() {
        let v = WorldVec::from([1, 3, 2]);
        assert_eq!(v.scaled(4).as_slice(), &[4, 12, 8]);
        assert_eq!(v.max_component(), Some(3));
        assert_eq!(WorldVec::zero(0).max_component(), None);
    }

    #[test]
    fn display_is_tuple_form() {
        assert_eq!(WorldVec::from([1, 0, 2]).to_string(), "(1, 0, 2)");
        assert_eq!(WorldVec::zero(0).to_string(), "()");
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn length_mismatch_panics() {
        let mut a = WorldVec::zero(2);
        a += &WorldVec::zero(3);
    }
}
