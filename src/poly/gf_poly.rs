// src/poly/gf_poly.rs

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr, Sub, SubAssign};

use crate::error::GfError;
use crate::gf::{Gf, GfNum};

/// A dense univariate polynomial over GF(p).
///
/// `coeffs[i]` is the coefficient of x^i. The stored sequence is always in
/// reduced form: either empty (the zero polynomial, whose degree is
/// undefined) or ending in a nonzero coefficient. Every mutating operation
/// restores this invariant before returning.
#[derive(Clone)]
pub struct GfPoly {
    field: Gf,
    coeffs: Vec<GfNum>,
}

impl GfPoly {
    /// The zero polynomial.
    pub fn zero(field: &Gf) -> Self {
        GfPoly {
            field: field.clone(),
            coeffs: Vec::new(),
        }
    }

    /// A polynomial from integer coefficients, each reduced mod p.
    pub fn new(field: &Gf, values: &[u64]) -> Self {
        let coeffs = values.iter().map(|&v| GfNum::new(field, v)).collect();
        GfPoly::from_coeffs(field, coeffs)
    }

    /// A constant polynomial (zero when the value reduces to zero).
    pub fn constant(field: &Gf, value: u64) -> Self {
        GfPoly::new(field, &[value])
    }

    /// A degree-zero polynomial from an element (zero polynomial when the
    /// element is zero).
    pub fn from_num(value: GfNum) -> Self {
        let field = value.field().clone();
        GfPoly::from_coeffs(&field, vec![value])
    }

    /// A random polynomial of exactly the given degree: monic, with the
    /// constant term forced nonzero.
    pub fn random(field: &Gf, degree: usize) -> Self {
        let mut coeffs = Vec::with_capacity(degree + 1);
        for _ in 0..degree {
            coeffs.push(GfNum::random(field));
        }
        coeffs.push(GfNum::new(field, 1));
        while coeffs[0].is_zero() {
            coeffs[0] = GfNum::random(field);
        }
        GfPoly::from_coeffs(field, coeffs)
    }

    pub(crate) fn from_coeffs(field: &Gf, coeffs: Vec<GfNum>) -> Self {
        let mut poly = GfPoly {
            field: field.clone(),
            coeffs,
        };
        poly.normalize();
        poly
    }

    pub fn field(&self) -> &Gf {
        &self.field
    }

    pub fn base(&self) -> u64 {
        self.field.base()
    }

    /// Number of stored coefficients; 0 for the zero polynomial.
    pub fn size(&self) -> usize {
        self.coeffs.len()
    }

    /// The degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        match self.coeffs.len() {
            0 => None,
            n => Some(n - 1),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn set_zero(&mut self) {
        self.coeffs.clear();
    }

    /// The coefficients as integers, lowest degree first.
    pub fn value(&self) -> Vec<u64> {
        self.coeffs.iter().map(|c| c.value()).collect()
    }

    /// Drops trailing zero coefficients, restoring reduced form.
    fn normalize(&mut self) {
        while self.coeffs.last().map_or(false, |c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Quotient and remainder of polynomial long division.
    ///
    /// Fails with [`GfError::DivisionByZero`] when the divisor is zero. When
    /// the dividend is shorter than the divisor, the quotient is zero and
    /// the remainder is the dividend.
    pub fn div_rem(&self, divisor: &GfPoly) -> Result<(GfPoly, GfPoly), GfError> {
        debug_assert_eq!(self.base(), divisor.base(), "polynomials of different fields");
        if divisor.is_zero() {
            return Err(GfError::DivisionByZero);
        }
        if self.size() < divisor.size() {
            return Ok((GfPoly::zero(&self.field), self.clone()));
        }

        let m = self.size() - 1;
        let n = divisor.size() - 1;
        let mut u = self.coeffs.clone();
        let mut q = vec![GfNum::zero(&self.field); m - n + 1];
        for k in (0..=m - n).rev() {
            // Leading coefficient of the divisor is nonzero by reduced form.
            q[k] = &u[n + k] / &divisor.coeffs[n];
            for j in (k..n + k).rev() {
                u[j] -= &(&q[k] * &divisor.coeffs[j - k]);
            }
        }
        u.truncate(n);
        Ok((
            GfPoly::from_coeffs(&self.field, q),
            GfPoly::from_coeffs(&self.field, u),
        ))
    }

    /// Exact division by x^n.
    ///
    /// Fails with [`GfError::NotDivisible`] when any coefficient below x^n
    /// is nonzero.
    pub fn checked_shr(&self, n: usize) -> Result<GfPoly, GfError> {
        for (index, c) in self.coeffs.iter().take(n).enumerate() {
            if !c.is_zero() {
                return Err(GfError::NotDivisible { index });
            }
        }
        let coeffs = self.coeffs.iter().skip(n).cloned().collect();
        Ok(GfPoly::from_coeffs(&self.field, coeffs))
    }

    /// Reads a polynomial in the `{ c0, c1, ..., cn }` shape; values are
    /// comma- or whitespace-separated non-negative decimal integers.
    pub fn parse(field: &Gf, text: &str) -> Result<GfPoly, GfError> {
        let mut chars = text.chars().peekable();
        while chars.peek().map_or(false, |c| c.is_whitespace()) {
            chars.next();
        }
        if chars.next() != Some('{') {
            return Err(GfError::Parse("expected '{'".into()));
        }

        let mut values = Vec::new();
        let mut digits = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            match c {
                '0'..='9' => digits.push(c),
                ',' | ' ' | '\t' | '\r' | '\n' => {
                    if !digits.is_empty() {
                        values.push(flush_digits(&mut digits)?);
                    }
                }
                '}' => {
                    if !digits.is_empty() {
                        values.push(flush_digits(&mut digits)?);
                    }
                    closed = true;
                    break;
                }
                other => {
                    return Err(GfError::Parse(format!("unexpected character '{}'", other)));
                }
            }
        }
        if !closed {
            return Err(GfError::Parse("missing '}'".into()));
        }
        Ok(GfPoly::new(field, &values))
    }
}

fn flush_digits(digits: &mut String) -> Result<u64, GfError> {
    let parsed = digits
        .parse::<u64>()
        .map_err(|_| GfError::Parse(format!("coefficient '{}' out of range", digits)));
    digits.clear();
    parsed
}

impl fmt::Display for GfPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, " }}")
    }
}

impl fmt::Debug for GfPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GfPoly(mod {}) {}", self.base(), self)
    }
}

impl Index<usize> for GfPoly {
    type Output = GfNum;

    // Read-only: writing through an index could break the reduced form or
    // smuggle in an element of another field.
    fn index(&self, i: usize) -> &GfNum {
        &self.coeffs[i]
    }
}

impl PartialEq for GfPoly {
    fn eq(&self, other: &Self) -> bool {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        self.coeffs == other.coeffs
    }
}

impl Eq for GfPoly {}

impl Neg for &GfPoly {
    type Output = GfPoly;

    fn neg(self) -> GfPoly {
        let coeffs = self.coeffs.iter().map(|c| -c).collect();
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Neg for GfPoly {
    type Output = GfPoly;

    fn neg(self) -> GfPoly {
        -&self
    }
}

impl Add for &GfPoly {
    type Output = GfPoly;

    fn add(self, other: &GfPoly) -> GfPoly {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        let (longer, shorter) = if self.size() >= other.size() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = longer.coeffs.clone();
        for (i, c) in shorter.coeffs.iter().enumerate() {
            coeffs[i] += c;
        }
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Sub for &GfPoly {
    type Output = GfPoly;

    fn sub(self, other: &GfPoly) -> GfPoly {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        let mut coeffs = self.coeffs.clone();
        if coeffs.len() < other.size() {
            coeffs.resize(other.size(), GfNum::zero(&self.field));
        }
        for (i, c) in other.coeffs.iter().enumerate() {
            coeffs[i] -= c;
        }
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Mul for &GfPoly {
    type Output = GfPoly;

    fn mul(self, other: &GfPoly) -> GfPoly {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        // Either operand being zero must short-circuit: the product size
        // size(a) + size(b) - 1 is meaningless for an empty operand.
        if self.is_zero() || other.is_zero() {
            return GfPoly::zero(&self.field);
        }
        let mut prod = vec![GfNum::zero(&self.field); self.size() + other.size() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                prod[i + j] += &(a * b);
            }
        }
        GfPoly::from_coeffs(&self.field, prod)
    }
}

impl Div for &GfPoly {
    type Output = GfPoly;

    /// # Panics
    ///
    /// Panics when the divisor is zero; use [`GfPoly::div_rem`] to surface
    /// the error instead.
    fn div(self, other: &GfPoly) -> GfPoly {
        match self.div_rem(other) {
            Ok((q, _)) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Rem for &GfPoly {
    type Output = GfPoly;

    /// # Panics
    ///
    /// Panics when the divisor is zero; use [`GfPoly::div_rem`] to surface
    /// the error instead.
    fn rem(self, other: &GfPoly) -> GfPoly {
        match self.div_rem(other) {
            Ok((_, r)) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! gfpoly_owned_binop {
    ($($trait:ident, $method:ident;)*) => {$(
        impl $trait for GfPoly {
            type Output = GfPoly;

            fn $method(self, other: GfPoly) -> GfPoly {
                (&self).$method(&other)
            }
        }

        impl $trait<&GfPoly> for GfPoly {
            type Output = GfPoly;

            fn $method(self, other: &GfPoly) -> GfPoly {
                (&self).$method(other)
            }
        }
    )*};
}

gfpoly_owned_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
    Rem, rem;
}

impl AddAssign<&GfPoly> for GfPoly {
    fn add_assign(&mut self, other: &GfPoly) {
        *self = &*self + other;
    }
}

impl SubAssign<&GfPoly> for GfPoly {
    fn sub_assign(&mut self, other: &GfPoly) {
        *self = &*self - other;
    }
}

impl MulAssign<&GfPoly> for GfPoly {
    fn mul_assign(&mut self, other: &GfPoly) {
        *self = &*self * other;
    }
}

impl RemAssign<&GfPoly> for GfPoly {
    fn rem_assign(&mut self, other: &GfPoly) {
        *self = &*self % other;
    }
}

// Scalar operations. Addition and subtraction act on the constant term,
// multiplication and division on every coefficient; the remainder after
// dividing by a nonzero scalar is always zero.

impl Add<GfNum> for GfPoly {
    type Output = GfPoly;

    fn add(self, other: GfNum) -> GfPoly {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        let mut coeffs = self.coeffs;
        if coeffs.is_empty() {
            coeffs.push(GfNum::zero(&self.field));
        }
        coeffs[0] += &other;
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Sub<GfNum> for GfPoly {
    type Output = GfPoly;

    fn sub(self, other: GfNum) -> GfPoly {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        let mut coeffs = self.coeffs;
        if coeffs.is_empty() {
            coeffs.push(GfNum::zero(&self.field));
        }
        coeffs[0] -= &other;
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Mul<GfNum> for GfPoly {
    type Output = GfPoly;

    fn mul(self, other: GfNum) -> GfPoly {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        let coeffs = self.coeffs.iter().map(|c| c * &other).collect();
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Div<GfNum> for GfPoly {
    type Output = GfPoly;

    /// # Panics
    ///
    /// Panics when the scalar is zero.
    fn div(self, other: GfNum) -> GfPoly {
        debug_assert_eq!(self.base(), other.base(), "polynomials of different fields");
        let coeffs = self.coeffs.iter().map(|c| c / &other).collect();
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Rem<GfNum> for GfPoly {
    type Output = GfPoly;

    fn rem(self, _other: GfNum) -> GfPoly {
        GfPoly::zero(&self.field)
    }
}

impl Add<u64> for GfPoly {
    type Output = GfPoly;

    fn add(self, other: u64) -> GfPoly {
        let other = GfNum::new(&self.field, other);
        self + other
    }
}

impl Sub<u64> for GfPoly {
    type Output = GfPoly;

    fn sub(self, other: u64) -> GfPoly {
        let other = GfNum::new(&self.field, other);
        self - other
    }
}

impl Mul<u64> for GfPoly {
    type Output = GfPoly;

    fn mul(self, other: u64) -> GfPoly {
        let other = GfNum::new(&self.field, other);
        self * other
    }
}

impl Div<u64> for GfPoly {
    type Output = GfPoly;

    /// # Panics
    ///
    /// Panics when the scalar reduces to zero.
    fn div(self, other: u64) -> GfPoly {
        let other = GfNum::new(&self.field, other);
        self / other
    }
}

impl Rem<u64> for GfPoly {
    type Output = GfPoly;

    fn rem(self, _other: u64) -> GfPoly {
        GfPoly::zero(&self.field)
    }
}

impl Shl<usize> for &GfPoly {
    type Output = GfPoly;

    /// Multiplication by x^n.
    fn shl(self, n: usize) -> GfPoly {
        if self.is_zero() {
            return GfPoly::zero(&self.field);
        }
        let mut coeffs = vec![GfNum::zero(&self.field); n];
        coeffs.extend(self.coeffs.iter().cloned());
        GfPoly::from_coeffs(&self.field, coeffs)
    }
}

impl Shl<usize> for GfPoly {
    type Output = GfPoly;

    fn shl(self, n: usize) -> GfPoly {
        &self << n
    }
}

impl ShlAssign<usize> for GfPoly {
    fn shl_assign(&mut self, n: usize) {
        *self = &*self << n;
    }
}

impl Shr<usize> for &GfPoly {
    type Output = GfPoly;

    /// Exact division by x^n.
    ///
    /// # Panics
    ///
    /// Panics when a nonzero coefficient would be discarded; use
    /// [`GfPoly::checked_shr`] to surface the error instead.
    fn shr(self, n: usize) -> GfPoly {
        match self.checked_shr(n) {
            Ok(p) => p,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Shr<usize> for GfPoly {
    type Output = GfPoly;

    fn shr(self, n: usize) -> GfPoly {
        &self >> n
    }
}
