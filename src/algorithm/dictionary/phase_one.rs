//! # Finding a feasible dictionary
//!
//! The first phase of the two phase method. A single artificial variable is added to every row,
//! after which the sum of infeasibilities is minimized by maximizing minus the artificial variable.
use crate::algorithm::dictionary::Dictionary;
use crate::algorithm::Status;
use crate::data::number_types::traits::OrderedField;

impl<F: OrderedField> Dictionary<F> {
    /// Compute a dictionary with a feasible basic solution for the same problem.
    ///
    /// If the basic solution of this dictionary is already feasible, it is returned unchanged.
    /// Otherwise an artificial variable `x0` is introduced in every row and the auxiliary problem
    /// `maximize -x0` is solved using Bland's rule.
    ///
    /// # Return value
    ///
    /// A dictionary for the original objective with nonnegative basic values, or a copy of this
    /// dictionary with status `Infeasible` if no feasible solution exists.
    pub fn initial_dictionary(&self) -> Self {
        if self.is_primal_feasible() {
            return self.with_status(self.classify());
        }

        let artificial = self.max_variable_index() + 1;
        let mut auxiliary = self.auxiliary(artificial);

        // The artificial variable enters on the most infeasible row, making every row feasible
        let artificial_column = auxiliary.n() - 1;
        let row = auxiliary.most_infeasible_row();
        auxiliary.exchange(row, artificial_column);
        auxiliary.status = auxiliary.classify();
        debug_assert!(auxiliary.is_primal_feasible());

        while auxiliary.status == Status::Continue {
            let (_, _, next) = auxiliary.pivot();
            debug_assert_ne!(next.status, Status::Unbounded, "the auxiliary objective is bounded by zero");
            auxiliary = next;
        }

        if auxiliary.objective_constant.is_negative() {
            return self.with_status(Status::Infeasible);
        }

        auxiliary.remove_artificial(artificial);
        auxiliary.restore_objective(self);
        auxiliary.status = auxiliary.classify();

        debug_assert!(auxiliary.is_primal_feasible());
        auxiliary
    }

    /// The auxiliary dictionary: an artificial column of ones and objective `-x0`.
    fn auxiliary(&self, artificial: usize) -> Self {
        let mut coefficients = self.coefficients.clone();
        coefficients.push_constant_column(F::one());

        let mut non_basic = self.non_basic.clone();
        non_basic.push(artificial);

        let mut objective = vec![F::zero(); self.n()];
        objective.push(-F::one());

        Self {
            basic: self.basic.clone(),
            non_basic,
            constraint_values: self.constraint_values.clone(),
            coefficients,
            objective_constant: F::zero(),
            objective,
            status: Status::Continue,
        }
    }

    /// Row with the most negative basic value, ties broken by the lowest variable identifier.
    fn most_infeasible_row(&self) -> usize {
        debug_assert!(!self.is_primal_feasible());

        (0..self.m())
            .min_by(|&i, &k| {
                self.constraint_values[i].cmp(&self.constraint_values[k])
                    .then(self.basic[i].cmp(&self.basic[k]))
            })
            .unwrap_or(0)
    }

    /// Remove the artificial variable from the dictionary.
    ///
    /// If it is still basic, it is at level zero. It is then exchanged with the nonbasic variable of
    /// lowest identifier that has a nonzero coefficient in its row. Such a variable exists: the
    /// artificial row gains a nonzero coefficient for the leaving variable of every pivot that
    /// changes it.
    fn remove_artificial(&mut self, artificial: usize) {
        if let Some(row) = self.basic.iter().position(|&variable| variable == artificial) {
            debug_assert!(self.constraint_values[row].is_zero());

            let column = (0..self.n())
                .filter(|&j| !self.coefficients[(row, j)].is_zero())
                .min_by_key(|&j| self.non_basic[j]);
            debug_assert!(column.is_some());
            if let Some(column) = column {
                self.exchange(row, column);
            }
        }

        if let Some(column) = self.non_basic.iter().position(|&variable| variable == artificial) {
            self.non_basic.remove(column);
            self.objective.remove(column);
            self.coefficients.remove_column(column);
        }
    }

    /// Express the objective of `original` in terms of the current nonbasic variables.
    fn restore_objective(&mut self, original: &Self) {
        let mut constant = original.objective_constant.clone();
        let mut objective = vec![F::zero(); self.n()];

        for (variable, cost) in original.non_basic.iter().zip(&original.objective) {
            if cost.is_zero() {
                continue;
            }

            if let Some(column) = self.non_basic.iter().position(|v| v == variable) {
                objective[column] += cost;
            } else if let Some(row) = self.basic.iter().position(|v| v == variable) {
                constant += cost.clone() * &self.constraint_values[row];
                for (total, value) in objective.iter_mut().zip(self.coefficients.row(row)) {
                    *total += cost.clone() * value;
                }
            }
        }

        self.objective_constant = constant;
        self.objective = objective;
    }
}
