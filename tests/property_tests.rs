// tests/property_tests.rs
//
// Property-based tests: algebraic laws that must hold across random
// elements and polynomials. Run with: cargo test --test property_tests

use proptest::collection::vec;
use proptest::prelude::*;

use polyhunter::gf::{make_gf, Gf, GfNum};
use polyhunter::poly::{gcd, GfPoly};

fn gf7() -> Gf {
    make_gf(7).unwrap()
}

fn arb_elem() -> impl Strategy<Value = GfNum> {
    (0u64..7).prop_map(|v| GfNum::new(&gf7(), v))
}

fn arb_nonzero_elem() -> impl Strategy<Value = GfNum> {
    (1u64..7).prop_map(|v| GfNum::new(&gf7(), v))
}

fn arb_poly() -> impl Strategy<Value = GfPoly> {
    vec(0u64..7, 0..8).prop_map(|coeffs| GfPoly::new(&gf7(), &coeffs))
}

fn arb_nonzero_poly() -> impl Strategy<Value = GfPoly> {
    arb_poly().prop_filter("nonzero", |p| !p.is_zero())
}

// ===== Element laws =====

proptest! {
    #[test]
    fn element_addition_commutes(a in arb_elem(), b in arb_elem()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn element_addition_associates(a in arb_elem(), b in arb_elem(), c in arb_elem()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn element_multiplication_commutes(a in arb_elem(), b in arb_elem()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn element_multiplication_associates(a in arb_elem(), b in arb_elem(), c in arb_elem()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn element_distributive(a in arb_elem(), b in arb_elem(), c in arb_elem()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn element_self_subtraction_vanishes(a in arb_elem()) {
        prop_assert!((&a - &a).is_zero());
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn element_inverse_cancels(a in arb_nonzero_elem()) {
        prop_assert_eq!(&a * &a.mul_inv().unwrap(), 1u64);
        prop_assert_eq!(a.mul_inv().unwrap().mul_inv().unwrap(), a);
    }

    #[test]
    fn element_division_undoes_multiplication(a in arb_elem(), b in arb_nonzero_elem()) {
        prop_assert_eq!(&(&a * &b) / &b, a);
    }
}

// ===== Polynomial laws =====

proptest! {
    #[test]
    fn poly_results_stay_reduced(a in arb_poly(), b in arb_poly()) {
        for poly in [&a + &b, &a - &b, &a * &b] {
            prop_assert!(poly.is_zero() || !poly[poly.size() - 1].is_zero());
        }
    }

    #[test]
    fn poly_addition_commutes(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn poly_multiplication_commutes(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn poly_distributive(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn poly_division_identity(a in arb_poly(), b in arb_nonzero_poly()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a);
        if !r.is_zero() {
            prop_assert!(r.degree() < b.degree());
        }
    }

    #[test]
    fn poly_shift_roundtrip(a in arb_poly(), n in 0usize..5) {
        prop_assert_eq!(&(&a << n) >> n, a);
    }

    #[test]
    fn poly_gcd_divides_both(a in arb_nonzero_poly(), b in arb_nonzero_poly()) {
        let g = gcd(&a, &b).unwrap();
        prop_assert!((&a % &g).is_zero());
        prop_assert!((&b % &g).is_zero());
    }

    #[test]
    fn poly_gcd_symmetric_up_to_scalar(a in arb_nonzero_poly(), b in arb_nonzero_poly()) {
        let left = gcd(&a, &b).unwrap();
        let right = gcd(&b, &a).unwrap();
        // Both are greatest common divisors, so they divide each other.
        prop_assert!((&left % &right).is_zero());
        prop_assert!((&right % &left).is_zero());
    }

    #[test]
    fn poly_scalar_mul_matches_repeated_add(a in arb_poly()) {
        prop_assert_eq!(a.clone() * 2, &a + &a);
    }
}
