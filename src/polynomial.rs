// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::config::DEFAULT_MIN_DENSE_TERMS;
use crate::error::PolynomialError;
use crate::traits::PolynomialEval;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;

mod add_sub;
mod convolution;
mod div_rem;
mod fft;
mod mul;

pub type Power = usize;
pub type Coefficient = i64;

/// A single-variable polynomial with integer coefficients, stored sparsely.
///
/// the term with key `n` is `self.coefficient(n) * pow(x, n)`
///
/// # Invariants
///
/// * every stored coefficient is nonzero, except for the zero polynomial,
///   which is stored as exactly one entry `0 -> 0`
/// * `self.degree()` is the greatest stored power (0 for the zero polynomial)
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial {
    terms: BTreeMap<Power, Coefficient>,
    degree: Power,
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl Polynomial {
    pub fn zero() -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(0, 0);
        Polynomial { terms, degree: 0 }
    }
    /// sums coefficients of repeated powers, then drops terms that came out zero
    pub fn try_from_terms<I: IntoIterator<Item = (Power, Coefficient)>>(
        terms: I,
    ) -> Result<Self, PolynomialError> {
        let mut map = BTreeMap::new();
        for (power, coefficient) in terms {
            let entry = map.entry(power).or_insert(0 as Coefficient);
            *entry = entry
                .checked_add(coefficient)
                .ok_or_else(|| PolynomialError::overflow("construction"))?;
        }
        Ok(Polynomial::from_map(map))
    }
    pub fn from_terms<I: IntoIterator<Item = (Power, Coefficient)>>(terms: I) -> Self {
        Self::try_from_terms(terms).expect("coefficient overflow while building polynomial")
    }
    pub(crate) fn from_map(terms: BTreeMap<Power, Coefficient>) -> Self {
        let mut retval = Polynomial { terms, degree: 0 };
        retval.normalize();
        retval
    }
    /// rescans for the greatest power with a nonzero coefficient
    pub(crate) fn recompute_degree(&mut self) {
        self.degree = self
            .terms
            .iter()
            .rev()
            .find(|(_, coefficient)| **coefficient != 0)
            .map(|(power, _)| *power)
            .unwrap_or(0);
    }
    /// drops zero terms, restores the zero representation and the cached degree
    pub(crate) fn normalize(&mut self) {
        self.terms.retain(|_, coefficient| *coefficient != 0);
        if self.terms.is_empty() {
            self.terms.insert(0, 0);
        }
        self.recompute_degree();
    }
    pub fn degree(&self) -> Power {
        self.degree
    }
    pub fn find_degree_of(&self) -> Power {
        self.degree
    }
    pub fn is_zero(&self) -> bool {
        self.degree == 0 && self.coefficient(0) == 0
    }
    /// number of stored terms; 1 for the zero polynomial
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
    pub fn coefficient(&self, power: Power) -> Coefficient {
        self.terms.get(&power).copied().unwrap_or(0)
    }
    pub fn leading_coefficient(&self) -> Coefficient {
        self.coefficient(self.degree)
    }
    /// stored terms in ascending power order
    pub fn terms(&self) -> Terms<'_> {
        Terms(self.terms.iter())
    }
    /// terms in descending power order with zero terms left out,
    /// except that the zero polynomial is `[(0, 0)]`
    pub fn canonical_form(&self) -> Vec<(Power, Coefficient)> {
        let retval: Vec<_> = self
            .terms
            .iter()
            .rev()
            .filter(|(_, coefficient)| **coefficient != 0)
            .map(|(&power, &coefficient)| (power, coefficient))
            .collect();
        if retval.is_empty() {
            vec![(0, 0)]
        } else {
            retval
        }
    }
    pub fn is_sparse(&self, threshold: f64) -> bool {
        self.is_sparse_with(threshold, DEFAULT_MIN_DENSE_TERMS)
    }
    pub(crate) fn is_sparse_with(&self, threshold: f64, min_dense_terms: usize) -> bool {
        if self.degree == 0 || self.term_count() < min_dense_terms {
            return true;
        }
        let density = self.term_count() as f64 / (self.degree as f64 + 1.0);
        density < threshold
    }
    pub(crate) fn max_abs_coefficient(&self) -> u64 {
        self.terms
            .values()
            .map(|coefficient| coefficient.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
pub struct Terms<'a>(btree_map::Iter<'a, Power, Coefficient>);

impl Iterator for Terms<'_> {
    type Item = (Power, Coefficient);
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(&power, &coefficient)| (power, coefficient))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Terms<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0
            .next_back()
            .map(|(&power, &coefficient)| (power, coefficient))
    }
}

impl ExactSizeIterator for Terms<'_> {}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = (Power, Coefficient);
    type IntoIter = Terms<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.terms()
    }
}

impl FromIterator<(Power, Coefficient)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (Power, Coefficient)>>(iter: I) -> Self {
        Polynomial::from_terms(iter)
    }
}

impl From<Vec<(Power, Coefficient)>> for Polynomial {
    fn from(terms: Vec<(Power, Coefficient)>) -> Self {
        Polynomial::from_terms(terms)
    }
}

impl From<Coefficient> for Polynomial {
    fn from(constant: Coefficient) -> Self {
        Polynomial::from_terms(Some((0, constant)))
    }
}

fn checked_power(base: i128, exponent: Power) -> Option<i128> {
    match u32::try_from(exponent) {
        Ok(exponent) => base.checked_pow(exponent),
        Err(_) => match base {
            0 | 1 => Some(base),
            -1 if exponent % 2 == 0 => Some(1),
            -1 => Some(-1),
            _ => None,
        },
    }
}

impl Polynomial {
    /// Evaluates at `x` by Horner steps over the stored terms.
    ///
    /// `None` if any step leaves the `i128` range.
    pub fn checked_eval(&self, x: i128) -> Option<i128> {
        let mut retval = 0i128;
        let mut previous_power = self.degree;
        for (power, coefficient) in self.terms().rev() {
            retval = retval
                .checked_mul(checked_power(x, previous_power - power)?)?
                .checked_add(i128::from(coefficient))?;
            previous_power = power;
        }
        retval.checked_mul(checked_power(x, previous_power)?)
    }
}

/// Panics if evaluation overflows `i128`; see [`Polynomial::checked_eval`].
impl PolynomialEval<i128> for &'_ Polynomial {
    fn eval(self, x: &i128) -> i128 {
        self.checked_eval(*x)
            .expect("polynomial evaluation overflowed")
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (index, (power, coefficient)) in self.canonical_form().into_iter().enumerate() {
            if index != 0 {
                write!(f, " + ")?;
            }
            match power {
                0 => write!(f, "{}", coefficient)?,
                1 => write!(f, "{}*x", coefficient)?,
                _ => write!(f, "{}*x^{}", coefficient, power)?,
            }
        }
        Ok(())
    }
}
