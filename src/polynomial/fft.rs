// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::PolynomialError,
    polynomial::{Coefficient, Polynomial, Power},
};
use num_complex::Complex64;
use std::{collections::BTreeMap, f64::consts::PI};
use tracing::debug;

/// smallest power of two that holds every coefficient of the product without wraparound
pub(crate) fn transform_len(lhs_degree: Power, rhs_degree: Power) -> usize {
    (lhs_degree + rhs_degree + 1).next_power_of_two()
}

fn to_complex(poly: &Polynomial, len: usize) -> Vec<Complex64> {
    let mut retval = vec![Complex64::new(0.0, 0.0); len];
    for (power, coefficient) in poly.terms() {
        retval[power] = Complex64::new(coefficient as f64, 0.0);
    }
    retval
}

/// In-place recursive radix-2 transform; `values.len()` must be a power of two.
///
/// The inverse halves every element at each level of the recursion, which
/// divides by `values.len()` overall.
pub(crate) fn fft(values: &mut [Complex64], invert: bool) {
    let len = values.len();
    if len <= 1 {
        return;
    }
    debug_assert!(len.is_power_of_two());
    let half = len / 2;
    let mut even: Vec<Complex64> = values.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex64> = values.iter().skip(1).step_by(2).copied().collect();
    fft(&mut even, invert);
    fft(&mut odd, invert);
    let direction = if invert { -1.0 } else { 1.0 };
    for index in 0..half {
        let angle = direction * 2.0 * PI * index as f64 / len as f64;
        let twiddled = Complex64::cis(angle) * odd[index];
        values[index] = even[index] + twiddled;
        values[index + half] = even[index] - twiddled;
    }
    if invert {
        for value in values.iter_mut() {
            *value /= 2.0;
        }
    }
}

fn round_coefficient(value: f64) -> Result<Coefficient, PolynomialError> {
    let rounded = value.round();
    // `i64::MAX as f64` rounds up to 2^63, which is already out of range
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as Coefficient)
    } else {
        Err(PolynomialError::overflow("transform rounding"))
    }
}

/// largest distance from an integer a guarded transform result may show before it's distrusted
pub(crate) const MAX_ROUNDING_RESIDUAL: f64 = 0.25;

/// Returns the rounded product and the largest distance between a
/// transformed coefficient and its rounded value.
fn transform_product(
    lhs: &Polynomial,
    rhs: &Polynomial,
) -> Result<(Polynomial, f64), PolynomialError> {
    let product_degree = lhs.degree() + rhs.degree();
    let len = transform_len(lhs.degree(), rhs.degree());
    debug!(len, product_degree, "multiplying through FFT");
    let mut lhs_values = to_complex(lhs, len);
    let mut rhs_values = to_complex(rhs, len);
    rayon::join(
        || fft(&mut lhs_values, false),
        || fft(&mut rhs_values, false),
    );
    for (l, r) in lhs_values.iter_mut().zip(&rhs_values) {
        *l *= *r;
    }
    fft(&mut lhs_values, true);
    let mut terms = BTreeMap::new();
    let mut residual = 0.0f64;
    for (power, value) in lhs_values[..=product_degree].iter().enumerate() {
        residual = residual.max((value.re - value.re.round()).abs());
        let coefficient = round_coefficient(value.re)?;
        if coefficient != 0 {
            terms.insert(power, coefficient);
        }
    }
    Ok((Polynomial::from_map(terms), residual))
}

/// Multiplies through the FFT, rounding every coefficient to the nearest integer.
///
/// Results are exact only while every coefficient of the product, and the
/// round-off the transform accumulates, stay well inside the 53-bit `f64`
/// mantissa.
pub(crate) fn multiply(lhs: &Polynomial, rhs: &Polynomial) -> Result<Polynomial, PolynomialError> {
    transform_product(lhs, rhs).map(|(product, _)| product)
}

/// Like [`multiply`], but `None` when some transformed coefficient lands
/// further than [`MAX_ROUNDING_RESIDUAL`] from an integer.
pub(crate) fn multiply_guarded(
    lhs: &Polynomial,
    rhs: &Polynomial,
) -> Result<Option<Polynomial>, PolynomialError> {
    let (product, residual) = transform_product(lhs, rhs)?;
    if residual > MAX_ROUNDING_RESIDUAL {
        debug!(residual, "FFT round-off too large to trust");
        return Ok(None);
    }
    Ok(Some(product))
}
