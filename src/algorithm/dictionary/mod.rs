//! # Simplex dictionaries
//!
//! A dictionary expresses every basic variable as an affine function of the nonbasic variables:
//!
//! ```text
//! x[basic[i]] = b[i] + sum_j A[i, j] x[non_basic[j]]
//! z           = z0   + sum_j c[j]    x[non_basic[j]]
//! ```
//!
//! The objective `z` is maximized. Setting all nonbasic variables to zero gives the basic solution
//! of the dictionary. Transforms between dictionaries (pivots, the dual) never modify their input.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use thiserror::Error;

use crate::algorithm::Status;
use crate::algorithm::strategy::pivot_rule::{Bland, PivotRule};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::{OrderedField, reciprocal};

mod phase_one;

/// The state of a single simplex iteration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dictionary<F> {
    /// Identifiers of the basic variables, one per row.
    basic: Vec<usize>,
    /// Identifiers of the nonbasic variables, one per column.
    non_basic: Vec<usize>,
    /// Values of the basic variables in the basic solution (`b`).
    constraint_values: Vec<F>,
    /// Dense `m x n` matrix `A`.
    coefficients: DenseMatrix<F>,
    /// Objective value of the basic solution (`z0`).
    objective_constant: F,
    /// Objective coefficients of the nonbasic variables (`c`).
    objective: Vec<F>,
    status: Status,
}

/// A dictionary could not be built from the provided data.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum DictionaryError {
    /// The sizes of the provided parts don't agree.
    #[error("expected {expected} {part}, found {found}")]
    Dimension {
        /// Which part of the dictionary has the wrong size.
        part: &'static str,
        /// Size implied by the variable indices.
        expected: usize,
        /// Size provided.
        found: usize,
    },
    /// A variable identifier is used more than once.
    #[error("variable {0} appears more than once in the dictionary")]
    DuplicateVariable(usize),
}

impl<F: OrderedField> Dictionary<F> {
    /// Create a new dictionary.
    ///
    /// # Arguments
    ///
    /// * `basic`: Identifiers of the basic variables, one per row.
    /// * `non_basic`: Identifiers of the nonbasic variables, one per column.
    /// * `constraint_values`: Values `b` of the basic variables.
    /// * `coefficients`: Rows of the matrix `A`.
    /// * `objective_constant`: Objective value `z0` of the basic solution.
    /// * `objective`: Objective coefficients `c` of the nonbasic variables.
    ///
    /// # Errors
    ///
    /// When the dimensions don't agree with the number of (non)basic variables, or when an
    /// identifier is used twice.
    pub fn new(
        basic: Vec<usize>,
        non_basic: Vec<usize>,
        constraint_values: Vec<F>,
        coefficients: Vec<Vec<F>>,
        objective_constant: F,
        objective: Vec<F>,
    ) -> Result<Self, DictionaryError> {
        let m = basic.len();
        let n = non_basic.len();

        let dimensions = [
            ("constraint values", m, constraint_values.len()),
            ("coefficient rows", m, coefficients.len()),
            ("objective coefficients", n, objective.len()),
        ];
        if let Some(&(part, expected, found)) = dimensions.iter().find(|(_, expected, found)| expected != found) {
            return Err(DictionaryError::Dimension { part, expected, found });
        }
        if let Some(row) = coefficients.iter().find(|row| row.len() != n) {
            return Err(DictionaryError::Dimension { part: "coefficient columns", expected: n, found: row.len() });
        }

        let mut seen = HashSet::with_capacity(m + n);
        if let Some(&duplicate) = basic.iter().chain(&non_basic).find(|&&variable| !seen.insert(variable)) {
            return Err(DictionaryError::DuplicateVariable(duplicate));
        }

        let mut dictionary = Self {
            basic,
            non_basic,
            constraint_values,
            coefficients: DenseMatrix::from_rows(coefficients, n),
            objective_constant,
            objective,
            status: Status::Continue,
        };
        dictionary.status = dictionary.classify();
        Ok(dictionary)
    }

    /// Perform a single pivot using Bland's rule.
    ///
    /// See `pivot_with`.
    pub fn pivot(&self) -> (Option<usize>, Option<usize>, Self) {
        self.pivot_with(&Bland)
    }

    /// Perform a single pivot: one basis exchange.
    ///
    /// # Arguments
    ///
    /// * `rule`: Selects the entering variable. The leaving variable is selected by the minimum
    /// ratio test, ties broken by the lowest variable identifier.
    ///
    /// # Return value
    ///
    /// The entering variable, the leaving variable and the new dictionary. When no variable can
    /// improve the objective, both variables are `None` and the dictionary is an optimal copy of
    /// this one. When the entering variable can increase without bound, the leaving variable is
    /// `None` and the dictionary an unbounded copy of this one.
    pub fn pivot_with<PR: PivotRule>(&self, rule: &PR) -> (Option<usize>, Option<usize>, Self) {
        let Some(column) = rule.select_entering_column(self) else {
            return (None, None, self.with_status(Status::Optimal));
        };
        let entering = self.non_basic[column];

        let Some(row) = self.select_leaving_row(column) else {
            return (Some(entering), None, self.with_status(Status::Unbounded));
        };
        let leaving = self.basic[row];

        let mut next = self.clone();
        next.exchange(row, column);
        next.status = next.classify();

        (Some(entering), Some(leaving), next)
    }

    /// The dual dictionary.
    ///
    /// Rows and columns swap roles: `A' = -A^T`, `b' = -c`, `c' = -b` and `z0' = -z0`. Taking the
    /// dual twice gives back the original dictionary.
    pub fn dual(&self) -> Self {
        let mut dual = Self {
            basic: self.non_basic.clone(),
            non_basic: self.basic.clone(),
            constraint_values: self.objective.iter().map(|value| -value.clone()).collect(),
            coefficients: self.coefficients.negative_transpose(),
            objective_constant: -self.objective_constant.clone(),
            objective: self.constraint_values.iter().map(|value| -value.clone()).collect(),
            status: Status::Continue,
        };
        dual.status = dual.classify();
        dual
    }

    /// Row of the leaving variable when `column` enters the basis.
    ///
    /// Minimum ratio test over the rows in which the entering variable has a negative coefficient.
    /// Among rows with equal ratio, the one with the lowest basic variable identifier is chosen.
    ///
    /// # Return value
    ///
    /// `None` if no row limits the increase of the entering variable.
    pub fn select_leaving_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.n());

        let mut best: Option<(usize, F)> = None;
        for (i, value) in self.coefficients.column(column).enumerate() {
            if !value.is_negative() {
                continue;
            }

            let ratio = -self.constraint_values[i].clone() / value.clone();
            let is_better = match &best {
                None => true,
                Some((best_row, best_ratio)) => {
                    ratio < *best_ratio || (&ratio == best_ratio && self.basic[i] < self.basic[*best_row])
                },
            };
            if is_better {
                best = Some((i, ratio));
            }
        }

        best.map(|(row, _)| row)
    }

    /// Exchange the basic variable of `row` with the nonbasic variable of `column`.
    ///
    /// One Gauss-Jordan elimination step: the row is solved for the entering variable, which is
    /// then substituted in all other rows and the objective. The leaving variable takes the column
    /// position of the entering variable.
    fn exchange(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.m());
        debug_assert!(column < self.n());

        let pivot = self.coefficients[(row, column)].clone();
        debug_assert!(!pivot.is_zero());

        let inverse = reciprocal(&pivot);
        let factor = -inverse.clone();
        self.constraint_values[row] *= &factor;
        for (j, value) in self.coefficients.row_mut(row).iter_mut().enumerate() {
            if j == column {
                *value = inverse.clone();
            } else {
                *value *= &factor;
            }
        }

        let pivot_row = self.coefficients.row(row).to_vec();
        let pivot_value = self.constraint_values[row].clone();
        for i in (0..self.m()).filter(|&i| i != row) {
            let multiplier = self.coefficients[(i, column)].clone();
            if multiplier.is_zero() {
                continue;
            }

            self.constraint_values[i] += multiplier.clone() * &pivot_value;
            substitute(self.coefficients.row_mut(i), column, &multiplier, &pivot_row);
        }

        let multiplier = self.objective[column].clone();
        if !multiplier.is_zero() {
            self.objective_constant += multiplier.clone() * &pivot_value;
            substitute(&mut self.objective, column, &multiplier, &pivot_row);
        }

        std::mem::swap(&mut self.basic[row], &mut self.non_basic[column]);
    }

    /// Status derived from the objective coefficients alone.
    fn classify(&self) -> Status {
        if self.objective.iter().any(|value| value.is_positive()) {
            Status::Continue
        } else {
            Status::Optimal
        }
    }

    /// Copy of this dictionary with a different status.
    #[must_use]
    pub fn with_status(&self, status: Status) -> Self {
        Self { status, ..self.clone() }
    }

    /// Append a constraint row with a new basic variable.
    ///
    /// # Arguments
    ///
    /// * `variable`: Identifier of the new basic variable, not yet in use.
    /// * `value`: Value `b` of the new basic variable.
    /// * `row`: Coefficients of the nonbasic variables.
    pub(crate) fn push_constraint(&mut self, variable: usize, value: F, row: Vec<F>) {
        debug_assert!(!self.basic.contains(&variable) && !self.non_basic.contains(&variable));
        debug_assert_eq!(row.len(), self.n());

        self.basic.push(variable);
        self.constraint_values.push(value);
        self.coefficients.push_row(row);
    }

    /// Reserve space for `additional` more constraint rows.
    pub(crate) fn reserve_constraints(&mut self, additional: usize) {
        self.basic.reserve(additional);
        self.constraint_values.reserve(additional);
        self.coefficients.reserve_rows(additional);
    }

    /// Whether the basic solution is feasible, that is, all basic values are nonnegative.
    pub fn is_primal_feasible(&self) -> bool {
        self.constraint_values.iter().all(|value| !value.is_negative())
    }

    /// Highest variable identifier in use, `0` if there are no variables.
    pub fn max_variable_index(&self) -> usize {
        self.basic.iter().chain(&self.non_basic).copied().max().unwrap_or(0)
    }

    /// Value of a variable in the basic solution.
    ///
    /// Nonbasic variables and unknown identifiers have value zero.
    pub fn value_of(&self, variable: usize) -> F {
        self.basic.iter()
            .position(|&basic| basic == variable)
            .map_or_else(F::zero, |row| self.constraint_values[row].clone())
    }

    /// Values of the variables `1` through `nr_variables` in the basic solution.
    pub fn solution(&self, nr_variables: usize) -> Vec<F> {
        (1..=nr_variables).map(|variable| self.value_of(variable)).collect()
    }

    /// Objective value of the basic solution (`z0`).
    pub fn objective_function_value(&self) -> &F {
        &self.objective_constant
    }
}

impl<F> Dictionary<F> {
    /// Identifiers of the basic variables, in row order.
    pub fn basic_indices(&self) -> &[usize] {
        &self.basic
    }

    /// Identifiers of the nonbasic variables, in column order.
    pub fn non_basic_indices(&self) -> &[usize] {
        &self.non_basic
    }

    /// Values `b` of the basic variables.
    pub fn constraint_values(&self) -> &[F] {
        &self.constraint_values
    }

    /// The matrix `A`.
    pub fn coefficients(&self) -> &DenseMatrix<F> {
        &self.coefficients
    }

    /// Objective coefficients `c` of the nonbasic variables.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    /// Classification of this dictionary.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of rows, or basic variables.
    pub fn m(&self) -> usize {
        self.basic.len()
    }

    /// Number of columns, or nonbasic variables.
    pub fn n(&self) -> usize {
        self.non_basic.len()
    }
}

/// Replace the entering variable in `target` by the solved pivot row.
///
/// `target[column]` holds the coefficient of the entering variable; afterwards that position holds
/// the coefficient of the leaving variable.
fn substitute<F: OrderedField>(target: &mut [F], column: usize, multiplier: &F, pivot_row: &[F]) {
    debug_assert_eq!(target.len(), pivot_row.len());

    target[column] = F::zero();
    for (value, pivot_value) in target.iter_mut().zip(pivot_row) {
        *value += multiplier.clone() * pivot_value;
    }
}

/// Write `constant + sum_j values[j] x[variables[j]]` on a single line.
fn write_affine<F: OrderedField>(
    f: &mut Formatter<'_>,
    constant: &F,
    values: &[F],
    variables: &[usize],
) -> FormatResult {
    let terms = values.iter().zip(variables).format_with("", |(value, variable), term| {
        if value.is_negative() {
            term(&format_args!(" - {} x{}", value.abs(), variable))
        } else {
            term(&format_args!(" + {} x{}", value, variable))
        }
    });
    writeln!(f, "{}{}", constant, terms)
}

impl<F: OrderedField> Display for Dictionary<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        for (i, variable) in self.basic.iter().enumerate() {
            write!(f, "x{} = ", variable)?;
            write_affine(f, &self.constraint_values[i], self.coefficients.row(i), &self.non_basic)?;
        }
        write!(f, "z = ")?;
        write_affine(f, &self.objective_constant, &self.objective, &self.non_basic)?;
        write!(f, "status: {}", self.status)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::dictionary::{Dictionary, DictionaryError};
    use crate::algorithm::Status;
    use crate::algorithm::strategy::pivot_rule::LargestCoefficient;
    use crate::data::number_types::rational::RationalBig;
    use crate::RB;
    use crate::tests::{problem_1, problem_3};

    #[test]
    fn construction_is_validated() {
        let result = Dictionary::<RationalBig>::new(vec![3], vec![1, 2], vec![RB!(1), RB!(2)], vec![vec![RB!(1), RB!(1)]], RB!(0), vec![RB!(0), RB!(0)]);
        assert_eq!(result, Err(DictionaryError::Dimension { part: "constraint values", expected: 1, found: 2 }));

        let result = Dictionary::<RationalBig>::new(vec![3], vec![1, 2], vec![RB!(1)], vec![vec![RB!(1)]], RB!(0), vec![RB!(0), RB!(0)]);
        assert_eq!(result, Err(DictionaryError::Dimension { part: "coefficient columns", expected: 2, found: 1 }));

        let result = Dictionary::<RationalBig>::new(vec![1], vec![1, 2], vec![RB!(1)], vec![vec![RB!(1), RB!(1)]], RB!(0), vec![RB!(0), RB!(0)]);
        assert_eq!(result, Err(DictionaryError::DuplicateVariable(1)));

        let dictionary = problem_1::dictionary();
        assert_eq!(dictionary.m(), 2);
        assert_eq!(dictionary.n(), 2);
        assert_eq!(dictionary.status(), Status::Continue);
        assert_eq!(dictionary.max_variable_index(), 4);
    }

    #[test]
    fn first_pivot() {
        let (entering, leaving, next) = problem_1::dictionary().pivot();
        assert_eq!(entering, Some(1));
        assert_eq!(leaving, Some(3));
        assert_eq!(next, problem_1::after_first_pivot());
    }

    #[test]
    fn pivot_to_optimality() {
        let (_, _, next) = problem_1::after_first_pivot().pivot();
        assert_eq!(next, problem_1::relaxation_optimum());
        assert_eq!(next.objective_function_value(), &RB!(10, 3));
        assert_eq!(next.solution(2), vec![RB!(5, 3), RB!(5, 3)]);
    }

    #[test]
    fn pivot_does_not_change_receiver() {
        let dictionary = problem_1::dictionary();
        let copy = dictionary.clone();
        let _ = dictionary.pivot();
        assert_eq!(dictionary, copy);
    }

    #[test]
    fn pivot_final_is_idempotent() {
        let optimum = problem_1::relaxation_optimum();
        let (entering, leaving, next) = optimum.pivot();
        assert_eq!(entering, None);
        assert_eq!(leaving, None);
        assert_eq!(next, optimum);
        assert_eq!(next.status(), Status::Optimal);
    }

    #[test]
    fn pivot_unbounded() {
        let (_, _, next) = problem_3::dictionary().pivot();
        assert_eq!(next.status(), Status::Continue);

        let (entering, leaving, unbounded) = next.pivot();
        assert_eq!(entering, Some(2));
        assert_eq!(leaving, None);
        assert_eq!(unbounded.status(), Status::Unbounded);
        assert_eq!(unbounded.constraint_values(), next.constraint_values());
        assert_eq!(unbounded.coefficients(), next.coefficients());
    }

    #[test]
    fn leaving_row_ties_take_lowest_variable() {
        let dictionary = Dictionary::new(
            vec![5, 4],
            vec![1],
            vec![RB!(2), RB!(4)],
            vec![vec![RB!(-1)], vec![RB!(-2)]],
            RB!(0),
            vec![RB!(1)],
        ).unwrap();
        assert_eq!(dictionary.select_leaving_row(0), Some(1));
    }

    #[test]
    fn largest_coefficient_rule() {
        let dictionary = Dictionary::new(
            vec![3],
            vec![1, 2],
            vec![RB!(4)],
            vec![vec![RB!(-1), RB!(-1)]],
            RB!(0),
            vec![RB!(1), RB!(3)],
        ).unwrap();
        let (entering, leaving, next) = dictionary.pivot_with(&LargestCoefficient);
        assert_eq!(entering, Some(2));
        assert_eq!(leaving, Some(3));
        assert_eq!(next.objective_function_value(), &RB!(12));
        assert_eq!(next.status(), Status::Optimal);
    }

    #[test]
    fn dual_of_dual() {
        for dictionary in [
            problem_1::dictionary(),
            problem_1::after_first_pivot(),
            problem_1::relaxation_optimum(),
            problem_3::dictionary(),
        ] {
            let dual = dictionary.dual();
            assert_eq!(dual.basic_indices(), dictionary.non_basic_indices());
            assert_eq!(dual.non_basic_indices(), dictionary.basic_indices());
            assert_eq!(dual.dual(), dictionary);
        }
    }

    #[test]
    fn dual() {
        let dual = problem_1::relaxation_optimum().dual();
        assert_eq!(dual.constraint_values(), &[RB!(1, 3), RB!(1, 3)]);
        assert_eq!(dual.objective(), &[RB!(-5, 3), RB!(-5, 3)]);
        assert_eq!(dual.objective_function_value(), &RB!(-10, 3));
        assert_eq!(dual.coefficients().row(0), &[RB!(2, 3), RB!(-1, 3)]);
        assert_eq!(dual.coefficients().row(1), &[RB!(-1, 3), RB!(2, 3)]);
        assert_eq!(dual.status(), Status::Optimal);
    }

    #[test]
    fn value_of() {
        let optimum = problem_1::relaxation_optimum();
        assert_eq!(optimum.value_of(1), RB!(5, 3));
        assert_eq!(optimum.value_of(3), RB!(0));
        assert_eq!(optimum.value_of(100), RB!(0));
        assert!(optimum.is_primal_feasible());
    }

    #[test]
    fn display() {
        let text = problem_1::dictionary().to_string();
        assert_eq!(text, "x3 = 5 - 2 x1 - 1 x2\nx4 = 5 - 1 x1 - 2 x2\nz = 0 + 1 x1 + 1 x2\nstatus: CONTINUE");

        let text = problem_1::relaxation_optimum().to_string();
        assert_eq!(text, "x1 = 5/3 - 2/3 x3 + 1/3 x4\nx2 = 5/3 + 1/3 x3 - 2/3 x4\nz = 10/3 - 1/3 x3 - 1/3 x4\nstatus: FINAL");
    }
}
