// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::PolynomialError,
    polynomial::{Coefficient, Polynomial, Power},
};
use std::io::{BufRead, Write};

pub const TERMINATOR: &str = ";";

fn invalid_term(line: usize, message: String) -> PolynomialError {
    PolynomialError::InvalidTerm { line, message }
}

/// Parses one term line; `line_number` is only used in errors.
pub fn parse_term(text: &str, line_number: usize) -> Result<(Power, Coefficient), PolynomialError> {
    let text = text.trim();
    let split = text
        .find("x^")
        .ok_or_else(|| invalid_term(line_number, format!("missing `x^` in {:?}", text)))?;
    let coefficient = text[..split].trim();
    let power = text[split + 2..].trim();
    let coefficient = coefficient.parse::<Coefficient>().map_err(|err| {
        invalid_term(
            line_number,
            format!("bad coefficient {:?}: {}", coefficient, err),
        )
    })?;
    let power = power
        .parse::<Power>()
        .map_err(|err| invalid_term(line_number, format!("bad power {:?}: {}", power, err)))?;
    Ok((power, coefficient))
}

/// Reads every `;`-terminated polynomial. Blank lines are skipped.
///
/// Each term is one line `<coefficient> x^<power>` and a line holding only
/// `;` closes the current polynomial:
///
/// ```text
/// 1 x^2
/// -4 x^0
/// ;
/// ```
pub fn read_polynomials<R: BufRead>(reader: R) -> Result<Vec<Polynomial>, PolynomialError> {
    let mut retval = Vec::new();
    let mut terms = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == TERMINATOR {
            retval.push(Polynomial::try_from_terms(terms.drain(..))?);
            continue;
        }
        terms.push(parse_term(line, index + 1)?);
    }
    if !terms.is_empty() {
        return Err(PolynomialError::UnterminatedPolynomial { terms: terms.len() });
    }
    Ok(retval)
}

/// Writes `poly` in canonical form followed by the terminator line.
pub fn write_polynomial<W: Write>(mut writer: W, poly: &Polynomial) -> Result<(), PolynomialError> {
    for (power, coefficient) in poly.canonical_form() {
        writeln!(writer, "{} x^{}", coefficient, power)?;
    }
    writeln!(writer, "{}", TERMINATOR)?;
    Ok(())
}

pub fn to_text(poly: &Polynomial) -> String {
    let mut retval = Vec::new();
    write_polynomial(&mut retval, poly).expect("writing to a Vec can't fail");
    String::from_utf8(retval).expect("output is ASCII")
}
