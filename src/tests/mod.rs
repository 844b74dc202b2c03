//! # Shared test problems
//!
//! Small problems with hand-computed dictionaries, used by the unit tests of several modules.
//!
//! Convention for function names:
//!
//! * `fn dictionary()`: the starting dictionary
//! * `fn initial_dictionary()`: the result of the first phase
//! * `fn after_first_pivot()`, `fn relaxation_optimum()`: intermediate results
//! * `fn integer_optimum()`: the result of the cutting plane method
pub mod problem_6;
