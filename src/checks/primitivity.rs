// src/checks/primitivity.rs

use crate::integer_math::distinct_prime_divisors;
use crate::poly::{integer_power, x_pow_mod, GfPoly};

/// Primitivity test by definition.
///
/// A polynomial of degree n is primitive when x generates the
/// multiplicative group of GF(p)[x]/(f). Scaling by a nonzero constant
/// leaves that quotient untouched, so the polynomial is first normalized to
/// monic. With mp = (−1)ⁿ·f[0], three conditions are checked in order:
///
/// 1. for p > 2, mp^{(p−1)/q} ≠ 1 for every distinct prime divisor q of
///    p − 1 (mp generates the multiplicative group of GF(p));
/// 2. xʳ mod f equals the constant mp, where r = (pⁿ − 1)/(p − 1);
/// 3. x^{r/q} mod f is nonconstant for every distinct prime divisor q of r
///    other than r itself.
pub fn is_primitive_definition(poly: &GfPoly) -> bool {
    let n = match poly.degree() {
        None => return false,
        Some(n) => n,
    };
    if n == 0 || (n > 1 && poly[0].is_zero()) {
        return false;
    }
    if n == 1 && poly[0].is_zero() {
        // k·x: x itself generates every GF(p).
        return true;
    }

    let field = poly.field();
    let p = poly.base();
    let poly = poly.clone() / poly[n].clone();

    // The one monic degree-1 polynomial over GF(2) with nonzero constant:
    // its root 1 generates nothing.
    if p == 2 && poly == GfPoly::new(field, &[1, 1]) {
        return false;
    }

    let mp = if n % 2 == 1 {
        -&poly[0]
    } else {
        poly[0].clone()
    };

    if p > 2 {
        let group_order = (p - 1) as u128;
        for q in distinct_prime_divisors(group_order) {
            if mp.pow(group_order / q) == 1 {
                return false;
            }
        }
    }

    let r = (integer_power(p as u128, n as u64) - 1) / (p as u128 - 1);
    let residue = x_pow_mod(r, &poly);
    if !(residue - mp).is_zero() {
        return false;
    }

    for q in distinct_prime_divisors(r) {
        if q == r {
            continue;
        }
        let t = x_pow_mod(r / q, &poly);
        if t.degree().map_or(true, |d| d == 0) {
            return false;
        }
    }
    true
}
