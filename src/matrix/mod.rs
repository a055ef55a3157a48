// src/matrix/mod.rs

pub mod gf_matrix;

pub use gf_matrix::GfMatrix;
