// src/gf/field.rs

use std::sync::Arc;

use crate::error::GfError;

/// Descriptor of a prime field GF(p): the base together with the precomputed
/// table of multiplicative inverses.
///
/// Constructed once through [`make_gf`] and shared by handle; every element
/// and polynomial over the field carries a [`Gf`].
#[derive(Debug)]
pub struct GfField {
    base: u64,
    inv: Vec<u64>,
}

/// Shared handle to a field descriptor.
pub type Gf = Arc<GfField>;

impl GfField {
    /// The field base p.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The multiplicative inverse of `val` mod p.
    ///
    /// Fails with [`GfError::NoInverse`] when `val` reduces to zero.
    pub fn mul_inv(&self, val: u64) -> Result<u64, GfError> {
        match val % self.base {
            0 => Err(GfError::NoInverse),
            v => Ok(self.inv[v as usize]),
        }
    }

    fn new(base: u64) -> Result<Self, GfError> {
        if base < 2 {
            return Err(GfError::InvalidField { base });
        }
        // Element arithmetic multiplies residues before reducing, so the
        // square of the largest residue must stay representable.
        if (base - 1).checked_mul(base - 1).is_none() {
            return Err(GfError::InvalidField { base });
        }

        let mut inv = vec![0u64; base as usize];
        inv[1] = 1;
        for v in 2..base {
            if inv[v as usize] != 0 {
                continue;
            }
            let w = match inv_calc(base, v) {
                Some(w) => w,
                None => return Err(GfError::InvalidField { base }),
            };
            // inv(inv(v)) = v, so every extended-gcd run fills two slots.
            inv[v as usize] = w;
            inv[w as usize] = v;
        }
        Ok(GfField { base, inv })
    }
}

impl PartialEq for GfField {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for GfField {}

/// The inverse of `val` mod `base` by the extended Euclidean algorithm, or
/// `None` when gcd(val, base) > 1 (in which case `base` is not prime).
fn inv_calc(base: u64, val: u64) -> Option<u64> {
    // base <= 2^32 after the overflow check, so i64 holds every cofactor.
    let (mut u0, mut u2) = (base as i64, 0i64);
    let (mut v0, mut v2) = (val as i64, 1i64);
    while v0 > 0 {
        let q = u0 / v0;
        let (w0, w2) = (u0 - q * v0, u2 - q * v2);
        u0 = v0;
        u2 = v2;
        v0 = w0;
        v2 = w2;
    }
    if u0 > 1 {
        return None;
    }
    Some(if u2 < 0 { (base as i64 + u2) as u64 } else { u2 as u64 })
}

/// Constructs the field GF(base).
///
/// Fails with [`GfError::InvalidField`] when `base` is 0 or 1, when
/// `(base - 1)^2` overflows, or when `base` is not prime.
pub fn make_gf(base: u64) -> Result<Gf, GfError> {
    Ok(Arc::new(GfField::new(base)?))
}
