//! # Linear algebra primitives
//!
//! Dense storage for the coefficients of a dictionary.
pub mod matrix;
