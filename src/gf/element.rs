// src/gf/element.rs

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::core::static_random;
use crate::error::GfError;
use crate::gf::field::Gf;

/// A residue mod p carrying a handle to its field.
///
/// The residue is canonical (already reduced) after every operation. Elements
/// of different fields must never be combined; this is a programmer error
/// checked in debug builds only.
#[derive(Clone)]
pub struct GfNum {
    field: Gf,
    val: u64,
}

impl GfNum {
    /// An element with the given value, reduced mod p.
    pub fn new(field: &Gf, val: u64) -> Self {
        GfNum {
            field: field.clone(),
            val: val % field.base(),
        }
    }

    pub fn zero(field: &Gf) -> Self {
        GfNum {
            field: field.clone(),
            val: 0,
        }
    }

    /// A uniformly distributed element of `[0, p)`.
    pub fn random(field: &Gf) -> Self {
        GfNum {
            field: field.clone(),
            val: static_random::below(field.base()),
        }
    }

    pub fn field(&self) -> &Gf {
        &self.field
    }

    pub fn base(&self) -> u64 {
        self.field.base()
    }

    /// The residue as an integer in `[0, p)`.
    pub fn value(&self) -> u64 {
        self.val
    }

    pub fn is_zero(&self) -> bool {
        self.val == 0
    }

    pub fn set_zero(&mut self) {
        self.val = 0;
    }

    /// Reassigns the value, reducing mod p. The field is unchanged.
    pub fn assign(&mut self, val: u64) {
        self.val = val % self.base();
    }

    /// The multiplicative inverse; [`GfError::NoInverse`] for zero.
    pub fn mul_inv(&self) -> Result<GfNum, GfError> {
        Ok(GfNum {
            field: self.field.clone(),
            val: self.field.mul_inv(self.val)?,
        })
    }

    /// Division that surfaces [`GfError::DivisionByZero`] instead of
    /// panicking.
    pub fn checked_div(&self, other: &GfNum) -> Result<GfNum, GfError> {
        debug_assert_eq!(self.base(), other.base(), "elements of different fields");
        if other.val == 0 {
            return Err(GfError::DivisionByZero);
        }
        Ok(GfNum {
            field: self.field.clone(),
            val: self.val * self.field.mul_inv(other.val)? % self.base(),
        })
    }

    /// `self^n` by right-to-left exponentiation.
    pub fn pow(&self, mut n: u128) -> GfNum {
        let mut base = self.clone();
        let mut result = GfNum::new(&self.field, 1);
        while n > 0 {
            if n & 1 == 1 {
                result *= &base;
            }
            base = &base * &base;
            n >>= 1;
        }
        result
    }
}

impl fmt::Debug for GfNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.val, self.base())
    }
}

impl fmt::Display for GfNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

impl Neg for &GfNum {
    type Output = GfNum;

    fn neg(self) -> GfNum {
        GfNum {
            field: self.field.clone(),
            val: (self.base() - self.val) % self.base(),
        }
    }
}

impl Neg for GfNum {
    type Output = GfNum;

    fn neg(self) -> GfNum {
        -&self
    }
}

impl Add for &GfNum {
    type Output = GfNum;

    fn add(self, other: &GfNum) -> GfNum {
        debug_assert_eq!(self.base(), other.base(), "elements of different fields");
        GfNum {
            field: self.field.clone(),
            val: (self.val + other.val) % self.base(),
        }
    }
}

impl Sub for &GfNum {
    type Output = GfNum;

    fn sub(self, other: &GfNum) -> GfNum {
        debug_assert_eq!(self.base(), other.base(), "elements of different fields");
        GfNum {
            field: self.field.clone(),
            val: (self.base() + self.val - other.val) % self.base(),
        }
    }
}

impl Mul for &GfNum {
    type Output = GfNum;

    fn mul(self, other: &GfNum) -> GfNum {
        debug_assert_eq!(self.base(), other.base(), "elements of different fields");
        GfNum {
            field: self.field.clone(),
            val: self.val * other.val % self.base(),
        }
    }
}

impl Div for &GfNum {
    type Output = GfNum;

    /// # Panics
    ///
    /// Panics when the divisor is zero; use [`GfNum::checked_div`] to
    /// surface the error instead.
    fn div(self, other: &GfNum) -> GfNum {
        match self.checked_div(other) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! gfnum_owned_binop {
    ($($trait:ident, $method:ident;)*) => {$(
        impl $trait for GfNum {
            type Output = GfNum;

            fn $method(self, other: GfNum) -> GfNum {
                (&self).$method(&other)
            }
        }

        impl $trait<&GfNum> for GfNum {
            type Output = GfNum;

            fn $method(self, other: &GfNum) -> GfNum {
                (&self).$method(other)
            }
        }

        impl $trait<u64> for GfNum {
            type Output = GfNum;

            fn $method(self, other: u64) -> GfNum {
                let other = GfNum::new(&self.field, other);
                (&self).$method(&other)
            }
        }

        impl $trait<GfNum> for u64 {
            type Output = GfNum;

            fn $method(self, other: GfNum) -> GfNum {
                let this = GfNum::new(&other.field, self);
                (&this).$method(&other)
            }
        }
    )*};
}

gfnum_owned_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

impl AddAssign<&GfNum> for GfNum {
    fn add_assign(&mut self, other: &GfNum) {
        *self = &*self + other;
    }
}

impl SubAssign<&GfNum> for GfNum {
    fn sub_assign(&mut self, other: &GfNum) {
        *self = &*self - other;
    }
}

impl MulAssign<&GfNum> for GfNum {
    fn mul_assign(&mut self, other: &GfNum) {
        *self = &*self * other;
    }
}

impl DivAssign<&GfNum> for GfNum {
    fn div_assign(&mut self, other: &GfNum) {
        *self = &*self / other;
    }
}

impl AddAssign<u64> for GfNum {
    fn add_assign(&mut self, other: u64) {
        let other = GfNum::new(&self.field, other);
        *self = &*self + &other;
    }
}

impl SubAssign<u64> for GfNum {
    fn sub_assign(&mut self, other: u64) {
        let other = GfNum::new(&self.field, other);
        *self = &*self - &other;
    }
}

impl MulAssign<u64> for GfNum {
    fn mul_assign(&mut self, other: u64) {
        let other = GfNum::new(&self.field, other);
        *self = &*self * &other;
    }
}

impl DivAssign<u64> for GfNum {
    fn div_assign(&mut self, other: u64) {
        let other = GfNum::new(&self.field, other);
        *self = &*self / &other;
    }
}

impl PartialEq for GfNum {
    fn eq(&self, other: &Self) -> bool {
        debug_assert_eq!(self.base(), other.base(), "elements of different fields");
        self.val == other.val
    }
}

impl Eq for GfNum {}

impl PartialEq<u64> for GfNum {
    fn eq(&self, other: &u64) -> bool {
        self.val == other % self.base()
    }
}

impl PartialOrd for GfNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        debug_assert_eq!(self.base(), other.base(), "elements of different fields");
        self.val.partial_cmp(&other.val)
    }
}

impl Ord for GfNum {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(self.base(), other.base(), "elements of different fields");
        self.val.cmp(&other.val)
    }
}

impl PartialOrd<u64> for GfNum {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.val.partial_cmp(&(other % self.base()))
    }
}
