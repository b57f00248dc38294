// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::PolynomialError,
    polynomial::{Coefficient, Polynomial},
};
use num_integer::Integer;
use num_traits::CheckedRem;
use std::ops::{Rem, RemAssign};
use tracing::trace;

/// Long division that cancels the remainder's leading term with a multiple
/// of the divisor, only while the leading coefficients divide exactly.
///
/// The first inexact step ends the loop and the partially reduced remainder
/// is returned as is, so its degree can still be at least the divisor's.
fn element_remainder(
    mut remainder: Polynomial,
    divisor: &Polynomial,
) -> Result<Polynomial, PolynomialError> {
    let divisor_degree = divisor.degree();
    let divisor_leading: Coefficient = divisor.leading_coefficient();
    debug_assert_ne!(divisor_leading, 0);
    while !remainder.terms.is_empty() && remainder.degree >= divisor_degree {
        let remainder_degree = remainder.degree;
        let remainder_leading = remainder.coefficient(remainder_degree);
        if remainder_leading == 0 {
            remainder.terms.remove(&remainder_degree);
            remainder.recompute_degree();
            continue;
        }
        if remainder_leading == Coefficient::MIN && divisor_leading == -1 {
            return Err(PolynomialError::overflow("remainder"));
        }
        let (quotient_coefficient, inexact) = remainder_leading.div_rem(&divisor_leading);
        if inexact != 0 {
            trace!(
                remainder_degree,
                remainder_leading,
                divisor_leading,
                "leading coefficients don't divide exactly, stopping"
            );
            break;
        }
        let quotient_power = remainder_degree - divisor_degree;
        for (power, coefficient) in divisor.terms() {
            let power = power + quotient_power;
            let value = coefficient
                .checked_mul(quotient_coefficient)
                .and_then(|product| remainder.coefficient(power).checked_sub(product))
                .ok_or_else(|| PolynomialError::overflow("remainder"))?;
            if value == 0 {
                remainder.terms.remove(&power);
            } else {
                remainder.terms.insert(power, value);
            }
        }
        remainder.recompute_degree();
    }
    remainder.normalize();
    Ok(remainder)
}

impl Polynomial {
    /// Remainder of integer-exact long division by `divisor`.
    ///
    /// Returns `self` unchanged when `divisor` is zero or has a greater degree.
    pub fn try_rem(&self, divisor: &Polynomial) -> Result<Polynomial, PolynomialError> {
        if divisor.is_zero() || divisor.degree() > self.degree() {
            return Ok(self.clone());
        }
        element_remainder(self.clone(), divisor)
    }
    /// Like [`Polynomial::try_rem`], but a zero `divisor` is an error.
    pub fn checked_rem_strict(&self, divisor: &Polynomial) -> Result<Polynomial, PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        self.try_rem(divisor)
    }
}

impl<'a> Rem for &'a Polynomial {
    type Output = Polynomial;
    fn rem(self, rhs: &Polynomial) -> Polynomial {
        self.try_rem(rhs).expect("polynomial remainder overflowed")
    }
}

impl<'a> Rem<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn rem(self, rhs: Polynomial) -> Polynomial {
        self % &rhs
    }
}

impl<'a> Rem<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn rem(self, rhs: &Polynomial) -> Polynomial {
        if rhs.is_zero() || rhs.degree() > self.degree() {
            return self;
        }
        element_remainder(self, rhs).expect("polynomial remainder overflowed")
    }
}

impl Rem for Polynomial {
    type Output = Polynomial;
    fn rem(self, rhs: Polynomial) -> Polynomial {
        self % &rhs
    }
}

impl RemAssign for Polynomial {
    fn rem_assign(&mut self, rhs: Polynomial) {
        *self = &*self % rhs;
    }
}

impl<'a> RemAssign<&'a Polynomial> for Polynomial {
    fn rem_assign(&mut self, rhs: &Polynomial) {
        *self = &*self % rhs;
    }
}

impl CheckedRem for Polynomial {
    /// `None` for a zero divisor or on overflow
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.checked_rem_strict(rhs).ok()
    }
}
