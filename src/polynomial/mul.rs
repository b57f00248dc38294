// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    config::{MulConfig, Strategy},
    error::PolynomialError,
    polynomial::{convolution, fft, Coefficient, Polynomial},
};
use num_integer::Integer;
use num_traits::{CheckedMul, One, Pow, Zero};
use std::{
    collections::BTreeMap,
    ops::{Mul, MulAssign},
};
use tracing::debug;

/// largest coefficient bound, scaled by transform depth, that `Auto` sends through the FFT
///
/// Round-off grows with the coefficient norms and with the number of
/// butterfly levels, so this sits well below the 53-bit `f64` mantissa.
const EXACT_TRANSFORM_BOUND: u128 = 1 << 45;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Path {
    Direct,
    Transform,
}

/// `max|lhs| * max|rhs| * min(terms)` bounds every coefficient of the product;
/// it's weighted by `log2` of the transform length before the comparison
fn transform_is_exact(lhs: &Polynomial, rhs: &Polynomial) -> bool {
    let overlap = lhs.term_count().min(rhs.term_count()) as u128;
    let levels = fft::transform_len(lhs.degree(), rhs.degree())
        .trailing_zeros()
        .max(1);
    u128::from(lhs.max_abs_coefficient())
        .checked_mul(u128::from(rhs.max_abs_coefficient()))
        .and_then(|bound| bound.checked_mul(overlap))
        .and_then(|bound| bound.checked_mul(u128::from(levels)))
        .map_or(false, |bound| bound <= EXACT_TRANSFORM_BOUND)
}

fn select_path(lhs: &Polynomial, rhs: &Polynomial, config: &MulConfig) -> Path {
    match config.strategy {
        Strategy::Direct => Path::Direct,
        Strategy::Transform => Path::Transform,
        Strategy::Auto => {
            let sparse = lhs.is_sparse_with(config.sparse_threshold, config.min_dense_terms)
                || rhs.is_sparse_with(config.sparse_threshold, config.min_dense_terms);
            if sparse {
                Path::Direct
            } else if config.exactness_guard && !transform_is_exact(lhs, rhs) {
                debug!("coefficients too large for an exact FFT, using direct convolution");
                Path::Direct
            } else {
                Path::Transform
            }
        }
    }
}

fn mul_single(lhs: &Polynomial, rhs: Coefficient) -> Result<Polynomial, PolynomialError> {
    if rhs.is_zero() {
        return Ok(Polynomial::zero());
    }
    let mut terms = BTreeMap::new();
    for (power, coefficient) in lhs.terms() {
        let product = coefficient
            .checked_mul(rhs)
            .ok_or_else(|| PolynomialError::overflow("multiplication"))?;
        terms.insert(power, product);
    }
    Ok(Polynomial::from_map(terms))
}

impl Polynomial {
    /// Multiplies with the strategy and parallelism given by `config`.
    ///
    /// Under [`Strategy::Auto`] the product is computed by direct convolution
    /// when either operand is sparse and through the FFT when both are dense.
    /// With [`MulConfig::exactness_guard`] set, a transform whose results
    /// stray too far from integers is redone by direct convolution.
    pub fn mul_with(
        &self,
        rhs: &Polynomial,
        config: &MulConfig,
    ) -> Result<Polynomial, PolynomialError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Polynomial::zero());
        }
        let path = select_path(self, rhs, config);
        debug!(
            ?path,
            lhs_degree = self.degree(),
            rhs_degree = rhs.degree(),
            lhs_terms = self.term_count(),
            rhs_terms = rhs.term_count(),
            "selected multiplication path"
        );
        match path {
            Path::Direct => convolution::multiply(self, rhs, config),
            Path::Transform if config.exactness_guard => {
                match fft::multiply_guarded(self, rhs)? {
                    Some(product) => Ok(product),
                    None => convolution::multiply(self, rhs, config),
                }
            }
            Path::Transform => fft::multiply(self, rhs),
        }
    }
    pub fn try_mul(&self, rhs: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.mul_with(rhs, &MulConfig::default())
    }
    pub fn try_mul_constant(&self, rhs: Coefficient) -> Result<Polynomial, PolynomialError> {
        mul_single(self, rhs)
    }
}

impl<'a> Mul for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.try_mul(rhs)
            .expect("polynomial multiplication overflowed")
    }
}

impl<'a> Mul<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self * &rhs
    }
}

impl<'a> Mul<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        &self * rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self = &*self * rhs;
    }
}

impl<'a> MulAssign<&'a Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = &*self * rhs;
    }
}

impl<'a> Mul<Coefficient> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Coefficient) -> Polynomial {
        mul_single(self, rhs).expect("polynomial multiplication overflowed")
    }
}

impl Mul<Coefficient> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Coefficient) -> Polynomial {
        &self * rhs
    }
}

impl Mul<Polynomial> for Coefficient {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &rhs * self
    }
}

impl<'a> Mul<&'a Polynomial> for Coefficient {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        rhs * self
    }
}

impl MulAssign<Coefficient> for Polynomial {
    fn mul_assign(&mut self, rhs: Coefficient) {
        *self = &*self * rhs;
    }
}

impl CheckedMul for Polynomial {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.try_mul(rhs).ok()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::from(1)
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.degree() == 0 && self.coefficient(0) == 1
    }
}

impl Polynomial {
    pub fn checked_pow<E: Integer + Clone>(&self, mut exponent: E) -> Option<Self> {
        if exponent < Zero::zero() {
            return None;
        }
        if exponent.is_zero() {
            return Some(One::one());
        }
        let mut base = self.clone();
        if exponent.is_one() {
            return Some(base);
        }
        let mut retval: Option<Self> = None;
        loop {
            if exponent.is_odd() {
                retval = Some(match retval.take() {
                    None => base.clone(),
                    Some(retval) => retval.try_mul(&base).ok()?,
                });
            }
            let two = E::one() + E::one();
            exponent = exponent / two;
            if exponent.is_zero() {
                break;
            }
            base = base.try_mul(&base).ok()?;
        }
        retval
    }
}

impl<E: Integer + Clone> Pow<E> for &'_ Polynomial {
    type Output = Polynomial;
    fn pow(self, exponent: E) -> Polynomial {
        self.checked_pow(exponent).expect("checked_pow failed")
    }
}

impl<E: Integer + Clone> Pow<E> for Polynomial {
    type Output = Polynomial;
    fn pow(self, exponent: E) -> Polynomial {
        self.checked_pow(exponent).expect("checked_pow failed")
    }
}
