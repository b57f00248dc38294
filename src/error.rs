// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// A coefficient left the `i64` range
    #[error("coefficient overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Division by the zero polynomial, only reported by the strict remainder
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// A term line that doesn't match `<coefficient> x^<power>`
    #[error("invalid term on line {line}: {message}")]
    InvalidTerm { line: usize, message: String },

    /// Input ended before the `;` closing the last polynomial
    #[error("polynomial with {terms} term(s) is missing its `;` terminator")]
    UnterminatedPolynomial { terms: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PolynomialError {
    pub(crate) fn overflow(operation: &'static str) -> Self {
        PolynomialError::Overflow { operation }
    }
}
