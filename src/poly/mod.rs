// src/poly/mod.rs

pub mod algorithms;
pub mod gf_poly;

pub use algorithms::{derivative, gcd, integer_power, x_pow_mod};
pub use gf_poly::GfPoly;
