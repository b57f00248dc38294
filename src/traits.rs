// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

/// Evaluates a polynomial at a point, widening into `T`.
///
/// Implemented for `&Polynomial` at `i128`, wide enough that products of
/// `i64` polynomials can be checked against the product of their values.
pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}
