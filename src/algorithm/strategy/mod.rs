//! # Strategies
//!
//! Decisions made while pivoting that don't affect the correctness of the result.
pub mod pivot_rule;
