// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::PolynomialError,
    polynomial::{Coefficient, Polynomial},
};
use num_traits::{CheckedAdd, CheckedSub, Zero};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

fn add_assign_terms(lhs: &mut Polynomial, rhs: &Polynomial) -> Result<(), PolynomialError> {
    for (power, coefficient) in rhs.terms() {
        let entry = lhs.terms.entry(power).or_insert(0);
        *entry = entry
            .checked_add(coefficient)
            .ok_or_else(|| PolynomialError::overflow("addition"))?;
    }
    // leading terms may have cancelled
    lhs.normalize();
    Ok(())
}

fn sub_assign_terms(lhs: &mut Polynomial, rhs: &Polynomial) -> Result<(), PolynomialError> {
    for (power, coefficient) in rhs.terms() {
        let entry = lhs.terms.entry(power).or_insert(0);
        *entry = entry
            .checked_sub(coefficient)
            .ok_or_else(|| PolynomialError::overflow("subtraction"))?;
    }
    lhs.normalize();
    Ok(())
}

fn add_assign_single(lhs: &mut Polynomial, rhs: Coefficient) -> Result<(), PolynomialError> {
    let entry = lhs.terms.entry(0).or_insert(0);
    *entry = entry
        .checked_add(rhs)
        .ok_or_else(|| PolynomialError::overflow("addition"))?;
    lhs.normalize();
    Ok(())
}

impl Polynomial {
    pub fn try_add(&self, rhs: &Polynomial) -> Result<Polynomial, PolynomialError> {
        let mut retval = self.clone();
        add_assign_terms(&mut retval, rhs)?;
        Ok(retval)
    }
    pub fn try_sub(&self, rhs: &Polynomial) -> Result<Polynomial, PolynomialError> {
        let mut retval = self.clone();
        sub_assign_terms(&mut retval, rhs)?;
        Ok(retval)
    }
    pub fn try_neg(&self) -> Result<Polynomial, PolynomialError> {
        Polynomial::zero().try_sub(self)
    }
    pub fn try_add_constant(&self, rhs: Coefficient) -> Result<Polynomial, PolynomialError> {
        let mut retval = self.clone();
        add_assign_single(&mut retval, rhs)?;
        Ok(retval)
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self += &rhs;
    }
}

impl<'a> AddAssign<&'a Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        add_assign_terms(self, rhs).expect("polynomial addition overflowed");
    }
}

impl AddAssign<Coefficient> for Polynomial {
    fn add_assign(&mut self, rhs: Coefficient) {
        add_assign_single(self, rhs).expect("polynomial addition overflowed");
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: Polynomial) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a> Add<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: &Polynomial) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a> Add<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, mut rhs: Polynomial) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<'a> Add for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl Add<Coefficient> for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: Coefficient) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a> Add<Coefficient> for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Coefficient) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl Add<Polynomial> for Coefficient {
    type Output = Polynomial;
    fn add(self, mut rhs: Polynomial) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<'a> Add<&'a Polynomial> for Coefficient {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Self::Output {
        rhs + self
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        *self -= &rhs;
    }
}

impl<'a> SubAssign<&'a Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        sub_assign_terms(self, rhs).expect("polynomial subtraction overflowed");
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(mut self, rhs: Polynomial) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a> Sub<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn sub(mut self, rhs: &Polynomial) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a> Sub<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Self::Output {
        self - &rhs
    }
}

impl<'a> Sub for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval -= rhs;
        retval
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Self::Output {
        self.try_neg().expect("polynomial negation overflowed")
    }
}

impl CheckedSub for Polynomial {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.try_sub(rhs).ok()
    }
}

impl CheckedAdd for Polynomial {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.try_add(rhs).ok()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }
    fn set_zero(&mut self) {
        *self = Polynomial::zero();
    }
    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::test_op_helper;

    fn poly(terms: &[(usize, i64)]) -> Polynomial {
        Polynomial::from_terms(terms.iter().copied())
    }

    #[test]
    fn test_add() {
        let test = |l: Polynomial, r: Polynomial, expected: &Polynomial| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(
            poly(&[(0, 1), (1, 2), (2, 3), (3, 4)]),
            poly(&[(0, 5), (1, 6), (2, 7), (3, 8)]),
            &poly(&[(0, 6), (1, 8), (2, 10), (3, 12)]),
        );
        test(
            poly(&[(0, 1), (1, 2)]),
            poly(&[(0, 5), (1, 6), (2, 7), (3, 8)]),
            &poly(&[(0, 6), (1, 8), (2, 7), (3, 8)]),
        );
        test(
            poly(&[(0, 1), (1, 2), (2, 3), (3, 4)]),
            poly(&[(0, 5), (1, 6)]),
            &poly(&[(0, 6), (1, 8), (2, 3), (3, 4)]),
        );
        test(
            poly(&[(0, 1), (1, 2), (2, 3), (3, 4)]),
            poly(&[(0, 5), (1, 6), (2, 7), (3, -4)]),
            &poly(&[(0, 6), (1, 8), (2, 10)]),
        );
        test(
            poly(&[(10, 3), (0, 1)]),
            poly(&[(10, -3), (0, -1)]),
            &Polynomial::zero(),
        );
        test(Polynomial::zero(), poly(&[(4, 9)]), &poly(&[(4, 9)]));
    }

    #[test]
    fn test_add_cancelled_leading_term_updates_degree() {
        let sum = poly(&[(5, 2), (3, 1)]) + poly(&[(5, -2), (1, 1)]);
        assert_eq!(sum.degree(), 3);
        assert_eq!(sum.canonical_form(), [(3, 1), (1, 1)]);
    }

    #[test]
    fn test_add_constant() {
        let p = poly(&[(2, 1), (0, 3)]);
        assert_eq!((&p + 4).canonical_form(), [(2, 1), (0, 7)]);
        assert_eq!((4 + &p).canonical_form(), [(2, 1), (0, 7)]);
        assert_eq!((p.clone() + -3).canonical_form(), [(2, 1)]);
        assert_eq!((-3 + p.clone()).canonical_form(), [(2, 1)]);
        assert_eq!(p.try_add_constant(0).unwrap(), p);
        assert_eq!((Polynomial::zero() + 0).canonical_form(), [(0, 0)]);
        assert_eq!((Polynomial::zero() + 5).canonical_form(), [(0, 5)]);
        let mut q = poly(&[(1, 1)]);
        q += 2;
        assert_eq!(q.canonical_form(), [(1, 1), (0, 2)]);
    }

    #[test]
    fn test_add_overflow() {
        let p = poly(&[(1, i64::MAX)]);
        match p.try_add(&poly(&[(1, 1)])) {
            Err(PolynomialError::Overflow { .. }) => {}
            result => panic!("unexpected result: {:?}", result),
        }
        assert!(p.checked_add(&poly(&[(1, 1)])).is_none());
        assert!(p.checked_add(&poly(&[(1, -1)])).is_some());
        assert!(poly(&[(0, i64::MIN)]).try_add_constant(-1).is_err());
    }

    #[test]
    #[should_panic(expected = "polynomial addition overflowed")]
    fn test_add_overflow_panics() {
        let _ = poly(&[(0, i64::MAX)]) + 1;
    }

    #[test]
    fn test_sub() {
        let test = |l: Polynomial, r: Polynomial, expected: &Polynomial| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test(
            poly(&[(0, 1), (1, 2), (2, 3)]),
            poly(&[(0, 5), (2, 3), (4, 1)]),
            &poly(&[(0, -4), (1, 2), (4, -1)]),
        );
        test(poly(&[(3, 7), (0, 1)]), poly(&[(3, 7), (0, 1)]), &Polynomial::zero());
    }

    #[test]
    fn test_neg() {
        let p = poly(&[(2, 3), (0, -1)]);
        assert_eq!((-&p).canonical_form(), [(2, -3), (0, 1)]);
        assert_eq!(-(-p.clone()), p);
        assert_eq!(-Polynomial::zero(), Polynomial::zero());
        assert!(poly(&[(0, i64::MIN)]).try_neg().is_err());
        assert!(poly(&[(0, 1)]).checked_sub(&poly(&[(0, i64::MIN)])).is_none());
    }

    #[test]
    fn test_zero_trait() {
        let mut p = poly(&[(3, 1)]);
        assert!(!Zero::is_zero(&p));
        p.set_zero();
        assert!(Zero::is_zero(&p));
        assert_eq!(<Polynomial as Zero>::zero().canonical_form(), [(0, 0)]);
    }
}
