// src/poly/algorithms.rs

use log::debug;

use crate::error::GfError;
use crate::gf::GfNum;
use crate::poly::gf_poly::GfPoly;

/// Greatest common divisor of two polynomials, by the extended Euclidean
/// algorithm with the usual cofactor triples.
///
/// Fails with [`GfError::ZeroInput`] when either argument is zero. The
/// result is not normalized to monic.
pub fn gcd(m: &GfPoly, n: &GfPoly) -> Result<GfPoly, GfError> {
    debug_assert_eq!(m.base(), n.base(), "polynomials of different fields");
    if m.is_zero() || n.is_zero() {
        return Err(GfError::ZeroInput);
    }
    let (mut m, mut n) = (m.clone(), n.clone());
    if m.size() < n.size() {
        std::mem::swap(&mut m, &mut n);
    }
    let field = m.field().clone();
    let one = GfPoly::constant(&field, 1);
    let zero = GfPoly::zero(&field);

    let (mut u0, mut u1, mut u2) = (m, one.clone(), zero.clone());
    let (mut v0, mut v1, mut v2) = (n, zero, one);
    while !v0.is_zero() {
        let q = &u0 / &v0;
        let w0 = &u0 - &(&q * &v0);
        let w1 = &u1 - &(&q * &v1);
        let w2 = &u2 - &(&q * &v2);
        u0 = v0;
        u1 = v1;
        u2 = v2;
        v0 = w0;
        v1 = w1;
        v2 = w2;
    }
    Ok(u0)
}

/// The formal derivative: d/dx Σ aᵢ xⁱ = Σ (i · aᵢ) xⁱ⁻¹, coefficients
/// reduced mod p.
///
/// A zero derivative of a nonconstant polynomial means every exponent with
/// a nonzero coefficient is a multiple of p, i.e. the polynomial is a p-th
/// power.
pub fn derivative(poly: &GfPoly) -> GfPoly {
    let field = poly.field();
    let degree = match poly.degree() {
        None | Some(0) => return GfPoly::zero(field),
        Some(d) => d,
    };
    let mut coeffs = Vec::with_capacity(degree);
    for i in 1..=degree {
        coeffs.push(GfNum::new(field, i as u64) * &poly[i]);
    }
    GfPoly::from_coeffs(field, coeffs)
}

/// `t^n` by right-to-left exponentiation.
pub fn integer_power(t: u128, n: u64) -> u128 {
    match n {
        0 => 1,
        1 => t,
        2 => t * t,
        3 => t * t * t,
        _ => {
            let mut result = integer_power(t, n / 2);
            result *= result;
            if n & 1 == 1 {
                result *= t;
            }
            result
        }
    }
}

/// `x^pow mod f`, without ever materializing `x^pow`.
///
/// Maintains a running residue, initially 1, and alternates shifting it up
/// to degree deg(f) (charged against the remaining budget) with reduction
/// mod f. The first time the residue lands exactly on x^{deg f} the
/// remaining budget is recorded; a second landing reveals the period of the
/// reduction schedule and the budget collapses modulo that period. Some
/// polynomials never revisit the sentinel, in which case the shortcut
/// simply does not fire.
pub fn x_pow_mod(mut pow: u128, f: &GfPoly) -> GfPoly {
    let field = f.field();
    let n = match f.degree() {
        None | Some(0) => return GfPoly::zero(field),
        Some(n) => n,
    };
    let xn = GfPoly::constant(field, 1) << n;
    let mut res = GfPoly::constant(field, 1);
    let mut d: u128 = 0;

    loop {
        let m = match res.degree() {
            // Residue collapsed to zero; every further shift stays zero.
            None => return GfPoly::zero(field),
            Some(m) => m,
        };
        if pow + (m as u128) < n as u128 {
            break;
        }
        let shift = n - m;
        pow -= shift as u128;
        res <<= shift;
        if res == xn {
            if d == 0 {
                d = pow;
            } else {
                d -= pow;
                debug!("x_pow_mod cycle of length {}, budget {} collapses", d, pow);
                pow %= d;
            }
        }
        res %= f;
    }
    res << pow as usize
}
