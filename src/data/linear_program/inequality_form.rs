//! # Linear programs as lists of inequalities
//!
//! A problem with nonnegative decision variables, a linear objective and linear (in)equality
//! constraints. It is converted into a dictionary by adding one nonnegative slack variable for each
//! inequality; equality constraints become two inequalities.
use thiserror::Error;

use crate::algorithm::dictionary::{Dictionary, DictionaryError};
use crate::algorithm::optimizer::{Config, Optimizer, SolveError};
use crate::algorithm::Status;
use crate::algorithm::strategy::pivot_rule::Bland;
use crate::data::linear_program::elements::{ConstraintType, LinearProgramType, Objective, VariableType};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::{default_tolerance, OrderedField};

/// A single constraint `coefficients . x (<=, >=, =) right_hand_side`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint<F> {
    /// One coefficient per decision variable.
    pub coefficients: Vec<F>,
    /// Direction of the constraint.
    pub constraint_type: ConstraintType,
    /// Constant on the right-hand side.
    pub right_hand_side: F,
}

/// The problem description is inconsistent.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum FormError {
    /// A constraint or the list of names doesn't have one entry per variable.
    #[error("expected {expected} values for the {part}, found {found}")]
    Dimension {
        /// Which part has the wrong size.
        part: &'static str,
        /// Number of decision variables.
        expected: usize,
        /// Number of values provided.
        found: usize,
    },
    /// The dictionary could not be constructed.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    /// The solve was aborted.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Optimize `cost . x` subject to a list of constraints and `x >= 0`.
///
/// Decision variables have identifiers `1` through `n` in the dictionary, the slack of the `i`th
/// inequality has identifier `n + 1 + i`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InequalityForm<F> {
    objective: Objective,
    cost: Vec<F>,
    constraints: Vec<Constraint<F>>,
    variable_names: Vec<String>,
    variable_type: VariableType,
}

impl<F: OrderedField> InequalityForm<F> {
    /// Create a problem without constraints.
    ///
    /// Variables are named `x1` through `xn`.
    ///
    /// # Arguments
    ///
    /// * `objective`: Direction of optimization.
    /// * `cost`: Objective coefficient of each decision variable.
    /// * `variable_type`: Whether all decision variables should be integer.
    pub fn new(objective: Objective, cost: Vec<F>, variable_type: VariableType) -> Self {
        let variable_names = (1..=cost.len()).map(|j| format!("x{}", j)).collect();

        Self {
            objective,
            cost,
            constraints: Vec::new(),
            variable_names,
            variable_type,
        }
    }

    /// Rename the decision variables.
    ///
    /// # Errors
    ///
    /// If the number of names differs from the number of variables.
    pub fn with_variable_names(mut self, names: Vec<String>) -> Result<Self, FormError> {
        if names.len() != self.nr_variables() {
            return Err(FormError::Dimension { part: "variable names", expected: self.nr_variables(), found: names.len() });
        }

        self.variable_names = names;
        Ok(self)
    }

    /// Add a constraint.
    ///
    /// When the variables are integer, the cutting plane method assumes the slack variables to be
    /// integer as well. That is the case when all coefficients and the right-hand side are
    /// integer.
    ///
    /// # Errors
    ///
    /// If the number of coefficients differs from the number of variables.
    pub fn add_constraint(
        &mut self,
        coefficients: Vec<F>,
        constraint_type: ConstraintType,
        right_hand_side: F,
    ) -> Result<(), FormError> {
        if coefficients.len() != self.nr_variables() {
            return Err(FormError::Dimension { part: "constraint", expected: self.nr_variables(), found: coefficients.len() });
        }

        self.constraints.push(Constraint { coefficients, constraint_type, right_hand_side });
        Ok(())
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Constraints in the order they were added.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// The dictionary with all decision variables nonbasic and all slacks basic.
    ///
    /// The objective is negated for minimization problems. The basic solution is infeasible when
    /// a `>=` constraint has a positive, or a `<=` constraint a negative right-hand side.
    ///
    /// # Errors
    ///
    /// Doesn't happen for a consistent problem; the dimensions were checked on construction.
    pub fn to_dictionary(&self) -> Result<Dictionary<F>, FormError> {
        let n = self.nr_variables();

        let mut constraint_values = Vec::with_capacity(self.constraints.len());
        let mut coefficients = Vec::with_capacity(self.constraints.len());
        for constraint in &self.constraints {
            let (less, greater) = match constraint.constraint_type {
                ConstraintType::Less => (true, false),
                ConstraintType::Greater => (false, true),
                ConstraintType::Equal => (true, true),
            };

            // s = b - a . x
            if less {
                constraint_values.push(constraint.right_hand_side.clone());
                coefficients.push(constraint.coefficients.iter().map(|value| -value.clone()).collect());
            }
            // s = -b + a . x
            if greater {
                constraint_values.push(-constraint.right_hand_side.clone());
                coefficients.push(constraint.coefficients.clone());
            }
        }

        let m = constraint_values.len();
        let objective = match self.objective {
            Objective::Maximize => self.cost.clone(),
            Objective::Minimize => self.cost.iter().map(|value| -value.clone()).collect(),
        };

        let dictionary = Dictionary::new(
            (n + 1..=n + m).collect(),
            (1..=n).collect(),
            constraint_values,
            coefficients,
            F::zero(),
            objective,
        )?;
        Ok(dictionary)
    }

    /// Read the values of the decision variables from a dictionary of this problem.
    pub fn solution(&self, dictionary: &Dictionary<F>) -> Solution<F> {
        let objective_value = match self.objective {
            Objective::Maximize => dictionary.objective_function_value().clone(),
            Objective::Minimize => -dictionary.objective_function_value().clone(),
        };
        let values = self.variable_names.iter()
            .cloned()
            .zip(dictionary.solution(self.nr_variables()))
            .collect();

        Solution::new(objective_value, values)
    }

    /// Solve the problem with default settings.
    ///
    /// # Errors
    ///
    /// See `solve_with`.
    pub fn solve(&self) -> Result<LinearProgramType<F>, FormError> {
        self.solve_with(default_tolerance(), Config::default())
    }

    /// Solve the problem.
    ///
    /// Continuous problems are solved with the two phase method, integer problems with the
    /// cutting plane method.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Integrality tolerance, only used for integer problems.
    /// * `config`: Limits and diagnostics.
    ///
    /// # Errors
    ///
    /// If the tolerance is not positive or a limit is exceeded.
    pub fn solve_with(&self, tolerance: F, config: Config) -> Result<LinearProgramType<F>, FormError> {
        let dictionary = self.to_dictionary()?;

        let (dictionary, status) = match self.variable_type {
            VariableType::Continuous => {
                let initial = dictionary.initial_dictionary();
                if initial.status() == Status::Infeasible {
                    return Ok(LinearProgramType::Infeasible);
                }
                let optimizer = Optimizer::with_config(initial, tolerance, config, Bland)?;
                let (_, dictionary, status) = optimizer.solve_linear_programming_relaxation()?;
                (dictionary, status)
            },
            VariableType::Integer => {
                let mut optimizer = Optimizer::with_config(dictionary, tolerance, config, Bland)?;
                let (_, dictionary, status) = optimizer.solve_integer_linear_programming_with_cutting_plane()?;
                (dictionary, status)
            },
        };

        Ok(match status {
            Status::Optimal => LinearProgramType::FiniteOptimum(self.solution(&dictionary)),
            Status::Unbounded => LinearProgramType::Unbounded,
            Status::Infeasible => LinearProgramType::Infeasible,
            Status::Continue => unreachable!("solves end in a terminal status"),
        })
    }
}
