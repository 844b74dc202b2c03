//! # Representation of feasible solutions
//!
//! Once a problem is fully solved, a solution is derived from the final dictionary. It contains
//! the values of the decision variables only, named as in the original problem.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Represents a solution to a linear program.
///
/// This struct would probably be used to print the optimal solution for the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, in the original direction of
    /// optimization.
    objective_value: F,
    /// (variable name, solution value) tuples for all decision variables.
    solution_values: Vec<(String, F)>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, solution_values: Vec<(String, F)>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Names and values of all decision variables.
    pub fn values(&self) -> &[(String, F)] {
        &self.solution_values
    }

    /// Value of a variable by name.
    pub fn value(&self, name: &str) -> Option<&F> {
        self.solution_values.iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, value)| value)
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "objective value: {}", self.objective_value)?;
        for (name, value) in &self.solution_values {
            writeln!(f, "{} = {}", name, value)?;
        }
        Ok(())
    }
}
