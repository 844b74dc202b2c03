//! # An exact integer linear program solver
//!
//! Linear programs are solved using the Simplex Method on dictionaries, as described in the book
//! Linear Programming: Foundations and Extensions by Robert J. Vanderbei. Integer solutions are
//! found with Gomory's cutting plane method, reoptimizing through the dual dictionary after every
//! round of cuts. All arithmetic is exact.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
