// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    config::{MulConfig, Strategy},
    error::PolynomialError,
    polynomial::{Coefficient, Polynomial, Power},
    traits::PolynomialEval as _,
};
pub use num_traits::{
    CheckedAdd as _, CheckedMul as _, CheckedRem as _, CheckedSub as _, One as _, Pow as _,
    Zero as _,
};
