// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Single-variable polynomials with `i64` coefficients.
//!
//! Products are computed by direct term-pair convolution, split across
//! worker threads, or by a complex FFT when both operands are dense; see
//! [`MulConfig`]. The remainder operator performs long division that only
//! takes steps whose leading-coefficient division is exact.

pub mod config;
pub mod error;
pub mod polynomial;
pub mod prelude;
pub mod text;
pub mod traits;

mod util;

#[cfg(test)]
mod proptests;

pub use config::{MulConfig, Strategy};
pub use error::PolynomialError;
pub use polynomial::{Coefficient, Polynomial, Power};
