// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    config::MulConfig,
    error::PolynomialError,
    polynomial::{Coefficient, Polynomial, Power},
};
use rayon::prelude::*;
use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
};
use tracing::debug;

/// Partial sums are `i128` so the order term pairs and worker results are
/// combined in can't cause a spurious overflow; only final coefficients
/// have to fit in [`Coefficient`].
type Accumulator = BTreeMap<Power, i128>;

fn accumulate<I: IntoIterator<Item = (Power, Coefficient)>>(
    lhs_terms: I,
    rhs: &Polynomial,
    accumulator: &mut Accumulator,
) -> Result<(), PolynomialError> {
    for (l_power, l_coefficient) in lhs_terms {
        for (r_power, r_coefficient) in rhs.terms() {
            let power = l_power
                .checked_add(r_power)
                .ok_or_else(|| PolynomialError::overflow("multiplication exponent"))?;
            let product = i128::from(l_coefficient) * i128::from(r_coefficient);
            let entry = accumulator.entry(power).or_insert(0);
            *entry = entry
                .checked_add(product)
                .ok_or_else(|| PolynomialError::overflow("multiplication"))?;
        }
    }
    Ok(())
}

fn merge(shared: &mut Accumulator, local: Accumulator) -> Result<(), PolynomialError> {
    for (power, coefficient) in local {
        let entry = shared.entry(power).or_insert(0);
        *entry = entry
            .checked_add(coefficient)
            .ok_or_else(|| PolynomialError::overflow("multiplication"))?;
    }
    Ok(())
}

fn into_polynomial(accumulator: Accumulator) -> Result<Polynomial, PolynomialError> {
    let mut terms = BTreeMap::new();
    for (power, coefficient) in accumulator {
        if coefficient != 0 {
            let coefficient = Coefficient::try_from(coefficient)
                .map_err(|_| PolynomialError::overflow("multiplication"))?;
            terms.insert(power, coefficient);
        }
    }
    Ok(Polynomial::from_map(terms))
}

pub(crate) fn multiply_serial(
    lhs: &Polynomial,
    rhs: &Polynomial,
) -> Result<Polynomial, PolynomialError> {
    let mut accumulator = Accumulator::new();
    accumulate(lhs.terms(), rhs, &mut accumulator)?;
    into_polynomial(accumulator)
}

/// Splits `lhs` into one contiguous chunk per worker. Each worker multiplies
/// its chunk against all of `rhs` into a private map, then takes the lock
/// once to merge.
pub(crate) fn multiply_parallel(
    lhs: &Polynomial,
    rhs: &Polynomial,
    workers: usize,
) -> Result<Polynomial, PolynomialError> {
    let lhs_terms: Vec<(Power, Coefficient)> = lhs.terms().collect();
    let workers = workers.max(1).min(lhs_terms.len().max(1));
    let chunk_len = (lhs_terms.len() + workers - 1) / workers;
    debug!(
        workers,
        chunk_len,
        lhs_terms = lhs_terms.len(),
        rhs_terms = rhs.term_count(),
        "partitioning direct convolution"
    );
    let shared = Mutex::new(Accumulator::new());
    lhs_terms
        .par_chunks(chunk_len.max(1))
        .try_for_each(|chunk| -> Result<(), PolynomialError> {
            let mut local = Accumulator::new();
            accumulate(chunk.iter().copied(), rhs, &mut local)?;
            let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
            merge(&mut shared, local)
        })?;
    into_polynomial(shared.into_inner().unwrap_or_else(PoisonError::into_inner))
}

pub(crate) fn multiply(
    lhs: &Polynomial,
    rhs: &Polynomial,
    config: &MulConfig,
) -> Result<Polynomial, PolynomialError> {
    let workers = config.worker_count();
    let products = lhs.term_count().saturating_mul(rhs.term_count());
    if workers > 1 && lhs.term_count() > 1 && products >= config.parallel_min_products {
        multiply_parallel(lhs, rhs, workers)
    } else {
        multiply_serial(lhs, rhs)
    }
}
