// src/checks/irreducibility.rs

use crate::gf::GfNum;
use crate::integer_math::rabin_exponents;
use crate::matrix::GfMatrix;
use crate::poly::{derivative, gcd, integer_power, x_pow_mod, GfPoly};

/// Degenerate cases shared by every irreducibility test. `None` means the
/// full algorithm must decide.
fn trivial_verdict(poly: &GfPoly) -> Option<bool> {
    let n = match poly.degree() {
        None => return Some(false),
        Some(n) => n,
    };
    if n == 0 {
        // A nonzero constant has no nonconstant factorization but is a unit.
        return Some(false);
    }
    if n > 1 && poly[0].is_zero() {
        // x divides the polynomial.
        return Some(false);
    }
    if n == 1 {
        return Some(true);
    }
    None
}

/// Whether `poly` and `t` share a nonconstant factor. `t` must be nonzero.
fn shares_factor(poly: &GfPoly, t: &GfPoly) -> bool {
    match gcd(poly, t) {
        Ok(g) => g.degree().map_or(false, |d| d > 0),
        Err(_) => false,
    }
}

/// Berlekamp rank test.
///
/// A zero derivative marks a p-th power; a nonconstant gcd with the
/// derivative marks a repeated factor. Past those, the polynomial of degree
/// n is irreducible iff the Berlekamp matrix — row i holding the
/// coefficients of x^{ip} mod f, minus the identity — has rank n − 1.
pub fn is_irreducible_berlekamp(poly: &GfPoly) -> bool {
    if let Some(verdict) = trivial_verdict(poly) {
        return verdict;
    }
    let n = match poly.degree() {
        None => return false,
        Some(n) => n,
    };

    let der = derivative(poly);
    if der.is_zero() {
        return false;
    }
    if shares_factor(poly, &der) {
        return false;
    }
    berlekamp_matrix_rank(poly, n) == n - 1
}

fn berlekamp_matrix_rank(poly: &GfPoly, n: usize) -> usize {
    let field = poly.field();
    let p = poly.base() as u128;
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let reduced = x_pow_mod(i as u128 * p, poly);
        let mut row = vec![GfNum::zero(field); n];
        for j in 0..reduced.size() {
            row[j] = reduced[j].clone();
        }
        row[i] -= 1;
        rows.push(row);
    }
    GfMatrix::from_rows(rows).rank()
}

/// Rabin test.
///
/// For every maximal proper divisor exponent nᵢ = n/qᵢ (qᵢ the distinct
/// primes of n), x^{p^nᵢ} − x must be nonzero mod f and coprime with f;
/// finally x^{p^n} − x must vanish mod f.
pub fn is_irreducible_rabin(poly: &GfPoly) -> bool {
    if let Some(verdict) = trivial_verdict(poly) {
        return verdict;
    }
    let n = match poly.degree() {
        None => return false,
        Some(n) => n,
    };

    let p = poly.base() as u128;
    let x = GfPoly::new(poly.field(), &[0, 1]);
    for ni in rabin_exponents(n as u64) {
        let t = &x_pow_mod(integer_power(p, ni), poly) - &x;
        if t.is_zero() || shares_factor(poly, &t) {
            return false;
        }
    }
    let t = &x_pow_mod(integer_power(p, n as u64), poly) - &x;
    t.is_zero()
}

/// Ben-Or test.
///
/// For every i up to ⌊n/2⌋, x^{p^i} − x must be nonzero mod f and coprime
/// with f.
pub fn is_irreducible_benor(poly: &GfPoly) -> bool {
    if let Some(verdict) = trivial_verdict(poly) {
        return verdict;
    }
    let n = match poly.degree() {
        None => return false,
        Some(n) => n,
    };

    let p = poly.base() as u128;
    let x = GfPoly::new(poly.field(), &[0, 1]);
    for i in 1..=n / 2 {
        let t = &x_pow_mod(integer_power(p, i as u64), poly) - &x;
        if t.is_zero() || shares_factor(poly, &t) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf::make_gf;

    const METHODS: [(&str, fn(&GfPoly) -> bool); 3] = [
        ("berlekamp", is_irreducible_berlekamp),
        ("rabin", is_irreducible_rabin),
        ("benor", is_irreducible_benor),
    ];

    #[test]
    fn test_degenerate_cases() {
        let gf5 = make_gf(5).unwrap();
        for (name, method) in METHODS {
            assert!(!method(&GfPoly::zero(&gf5)), "{}: zero", name);
            assert!(!method(&GfPoly::constant(&gf5, 3)), "{}: constant", name);
            // x^2 + x: divisible by x.
            assert!(!method(&GfPoly::new(&gf5, &[0, 1, 1])), "{}: x | f", name);
            // Any degree-1 polynomial is irreducible.
            assert!(method(&GfPoly::new(&gf5, &[0, 1])), "{}: x", name);
            assert!(method(&GfPoly::new(&gf5, &[3, 2])), "{}: 2x + 3", name);
        }
    }

    #[test]
    fn test_known_irreducible_over_gf2() {
        let gf2 = make_gf(2).unwrap();
        for coeffs in [
            &[1u64, 1, 1][..],      // x^2 + x + 1
            &[1, 1, 0, 1][..],      // x^3 + x + 1
            &[1, 1, 0, 0, 1][..],   // x^4 + x + 1
            &[1, 0, 1, 0, 0, 1][..], // x^5 + x^2 + 1
        ] {
            let poly = GfPoly::new(&gf2, coeffs);
            for (name, method) in METHODS {
                assert!(method(&poly), "{}: {:?}", name, coeffs);
            }
        }
    }

    #[test]
    fn test_known_reducible_over_gf2() {
        let gf2 = make_gf(2).unwrap();
        for coeffs in [
            &[1u64, 0, 1][..],       // (x + 1)^2
            &[1, 1, 1, 1][..],       // (x + 1)^3
            &[1, 0, 0, 0, 1][..],    // (x + 1)^4
            &[1, 0, 0, 0, 1, 1][..], // (x^2 + x + 1)(x^3 + x + 1)
        ] {
            let poly = GfPoly::new(&gf2, coeffs);
            for (name, method) in METHODS {
                assert!(!method(&poly), "{}: {:?}", name, coeffs);
            }
        }
    }

    #[test]
    fn test_known_cases_over_gf3() {
        let gf3 = make_gf(3).unwrap();
        // x^2 + 1 has no root mod 3: irreducible.
        let poly = GfPoly::new(&gf3, &[1, 0, 1]);
        for (name, method) in METHODS {
            assert!(method(&poly), "{}", name);
        }
        // x^2 + 2 = (x + 1)(x + 2) mod 3.
        let poly = GfPoly::new(&gf3, &[2, 0, 1]);
        for (name, method) in METHODS {
            assert!(!method(&poly), "{}", name);
        }
    }

    #[test]
    fn test_pth_power_is_rejected() {
        let gf3 = make_gf(3).unwrap();
        // (x^2 + 1)^3 = x^6 + 1 over GF(3): derivative vanishes.
        let poly = GfPoly::new(&gf3, &[1, 0, 0, 0, 0, 0, 1]);
        for (name, method) in METHODS {
            assert!(!method(&poly), "{}", name);
        }
    }

    #[test]
    fn test_nonmonic_irreducible() {
        let gf3 = make_gf(3).unwrap();
        // 2x^2 + x + 1: scaling does not affect irreducibility.
        let poly = GfPoly::new(&gf3, &[1, 1, 2]);
        for (name, method) in METHODS {
            assert!(method(&poly), "{}", name);
        }
    }
}
