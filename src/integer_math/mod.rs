// src/integer_math/mod.rs

pub mod factorization;

pub use factorization::{distinct_prime_divisors, rabin_exponents};
