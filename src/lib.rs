// src/lib.rs

pub mod checks;
pub mod config;
pub mod core;
pub mod error;
pub mod gf;
pub mod integer_math;
pub mod matrix;
pub mod pipeline;
pub mod poly;

pub use checks::{
    is_irreducible_benor, is_irreducible_berlekamp, is_irreducible_rabin,
    is_primitive_definition, make_check, CheckResult, IrreducibleMethod, PrimitiveMethod,
};
pub use error::GfError;
pub use gf::{make_gf, Gf, GfField, GfNum};
pub use pipeline::Pipeline;
pub use poly::GfPoly;
