//! # Number types
//!
//! The algorithms are defined over ordered fields. This module defines that space through traits
//! and provides the exact rational implementations used by the solver.
pub mod traits;
pub mod rational;
