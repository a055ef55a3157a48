// src/error.rs

use std::fmt;

/// Errors surfaced by field construction and polynomial arithmetic.
///
/// Contract violations (mixing elements of different fields, taking the
/// degree of the zero polynomial) are not represented here; the former is a
/// `debug_assert!`, the latter an `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GfError {
    /// The base does not describe a prime field, or `(base - 1)^2` would
    /// overflow element arithmetic.
    InvalidField { base: u64 },
    /// Zero has no multiplicative inverse.
    NoInverse,
    /// Division by a zero element or a zero polynomial.
    DivisionByZero,
    /// gcd is undefined when either argument is zero.
    ZeroInput,
    /// Exact division by x^n would discard a nonzero coefficient.
    NotDivisible { index: usize },
    /// Rejected polynomial text.
    Parse(String),
}

impl fmt::Display for GfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfError::InvalidField { base } => write!(f, "{} is not a valid field base", base),
            GfError::NoInverse => write!(f, "zero has no multiplicative inverse"),
            GfError::DivisionByZero => write!(f, "division by zero"),
            GfError::ZeroInput => write!(f, "gcd arguments must be nonzero"),
            GfError::NotDivisible { index } => {
                write!(f, "shift would discard nonzero coefficient at x^{}", index)
            }
            GfError::Parse(msg) => write!(f, "malformed polynomial text: {}", msg),
        }
    }
}

impl std::error::Error for GfError {}
