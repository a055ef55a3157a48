// src/gf/mod.rs

pub mod element;
pub mod field;

pub use element::GfNum;
pub use field::{make_gf, Gf, GfField};
