//! # Representing linear programs
//!
//! Problems are most easily stated as a list of inequalities. This module contains that
//! representation, its conversion into a dictionary and the solution read back from one.
pub mod elements;
pub mod inequality_form;
pub mod solution;
