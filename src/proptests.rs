// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    config::{MulConfig, Strategy as MulStrategy},
    polynomial::{Coefficient, Polynomial, Power},
    text,
    traits::PolynomialEval,
    util::tests::naive_product,
};
use proptest::prelude::*;
use std::io::Cursor;

fn small_coeff() -> impl Strategy<Value = Coefficient> {
    -1000i64..=1000
}

fn term() -> impl Strategy<Value = (Power, Coefficient)> {
    (0usize..64, small_coeff())
}

fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(term(), 0..12).prop_map(Polynomial::from_terms)
}

fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

/// every power up to the degree present
fn dense_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(small_coeff(), 1..160).prop_map(|coefficients| {
        Polynomial::from_terms(coefficients.into_iter().enumerate())
    })
}

/// powers below 20, so values and long-division remainders stay far from overflow
fn short_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec((0usize..20, small_coeff()), 0..8).prop_map(Polynomial::from_terms)
}

/// leading coefficient 1, the rest in `-3..=3`
fn monic_poly() -> impl Strategy<Value = Polynomial> {
    (proptest::collection::vec((0usize..8, -3i64..=3), 0..6), 1usize..9).prop_map(
        |(terms, degree)| {
            Polynomial::from_terms(
                terms
                    .into_iter()
                    .filter(|(power, _)| *power < degree)
                    .chain(Some((degree, 1))),
            )
        },
    )
}

fn forced(strategy: MulStrategy) -> MulConfig {
    MulConfig::default()
        .with_strategy(strategy)
        .with_parallel_min_products(0)
}

proptest! {
    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!((&a + &b).canonical_form(), (&b + &a).canonical_form());
    }

    #[test]
    fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(((&a + &b) + &c).canonical_form(), (&a + &(&b + &c)).canonical_form());
    }

    #[test]
    fn poly_add_identity(a in small_poly()) {
        prop_assert_eq!((&a + &Polynomial::zero()).canonical_form(), a.canonical_form());
        prop_assert_eq!((&Polynomial::zero() + &a).canonical_form(), a.canonical_form());
    }

    #[test]
    fn poly_add_constant_matches_single_term(a in small_poly(), k in small_coeff()) {
        prop_assert_eq!(&a + k, &a + &Polynomial::from_terms(Some((0, k))));
        prop_assert_eq!(k + &a, &a + k);
    }

    #[test]
    fn poly_mul_zero(a in small_poly()) {
        prop_assert_eq!((&a * &Polynomial::zero()).canonical_form(), vec![(0, 0)]);
        prop_assert_eq!((&Polynomial::zero() * &a).canonical_form(), vec![(0, 0)]);
        prop_assert_eq!((&a * 0).canonical_form(), vec![(0, 0)]);
    }

    #[test]
    fn poly_zero_canonical_form_is_single_entry(a in small_poly()) {
        let zero = &a - &a;
        prop_assert_eq!(zero.canonical_form(), vec![(0, 0)]);
        prop_assert_eq!(zero.term_count(), 1);
        prop_assert_eq!(zero.degree(), 0);
    }

    #[test]
    fn poly_canonical_form_is_descending_without_zeros(a in nonzero_poly()) {
        let form = a.canonical_form();
        prop_assert!(form.windows(2).all(|pair| pair[0].0 > pair[1].0));
        prop_assert!(form.iter().all(|(_, coefficient)| *coefficient != 0));
        prop_assert_eq!(form[0].0, a.degree());
    }

    #[test]
    fn poly_mul_paths_agree(a in dense_poly(), b in dense_poly()) {
        let direct = a.mul_with(&b, &forced(MulStrategy::Direct)).unwrap();
        let transform = a.mul_with(&b, &forced(MulStrategy::Transform)).unwrap();
        let serial = a.mul_with(&b, &forced(MulStrategy::Direct).with_workers(1)).unwrap();
        prop_assert_eq!(direct.canonical_form(), transform.canonical_form());
        prop_assert_eq!(&direct, &serial);
        prop_assert_eq!(direct.canonical_form(), naive_product(&a, &b));
    }

    #[test]
    fn poly_mul_sparse_paths_agree(a in small_poly(), b in small_poly()) {
        let direct = a.mul_with(&b, &forced(MulStrategy::Direct)).unwrap();
        let transform = a.mul_with(&b, &forced(MulStrategy::Transform)).unwrap();
        prop_assert_eq!(direct, transform);
    }

    #[test]
    fn poly_mul_degree_additive(a in nonzero_poly(), b in nonzero_poly()) {
        prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
    }

    #[test]
    fn poly_mul_evaluates_as_product(a in short_poly(), b in short_poly(), x in -3i128..=3) {
        prop_assert_eq!((&(&a * &b)).eval(&x), (&a).eval(&x) * (&b).eval(&x));
    }

    #[test]
    fn poly_rem_of_exact_product_is_zero(d in monic_poly(), q in small_poly()) {
        let product = &d * &q;
        prop_assert_eq!((&product % &d).canonical_form(), vec![(0, 0)]);
    }

    #[test]
    fn poly_rem_by_monic_is_reduced(a in short_poly(), d in monic_poly()) {
        let remainder = &a % &d;
        prop_assert!(remainder.is_zero() || remainder.degree() < d.degree());
        // a - remainder is a multiple of d
        prop_assert!((&(&a - &remainder) % &d).is_zero());
    }

    #[test]
    fn poly_rem_by_zero_is_identity(a in small_poly()) {
        prop_assert_eq!(&a % &Polynomial::zero(), a);
    }

    #[test]
    fn poly_text_round_trip(a in small_poly()) {
        let parsed = text::read_polynomials(Cursor::new(text::to_text(&a))).unwrap();
        prop_assert_eq!(parsed, vec![a]);
    }
}
