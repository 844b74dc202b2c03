//! # Optimizer
//!
//! Drives a dictionary to an optimal solution. The linear programming relaxation is solved by
//! pivoting until a terminal status is reached. Integer solutions are found with the cutting plane
//! method: Gomory cuts are added for every fractional basic value, after which the now primal
//! infeasible but dual feasible dictionary is reoptimized through its dual.
use thiserror::Error;

use crate::algorithm::cutting_plane::{add_cuts, fractional_rows};
use crate::algorithm::dictionary::Dictionary;
use crate::algorithm::Status;
use crate::algorithm::strategy::pivot_rule::{Bland, PivotRule};
use crate::data::number_types::traits::{default_tolerance, is_valid_tolerance, OrderedField};

/// Limits and diagnostics of a solve.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Maximum number of pivots of a single relaxation solve.
    pub max_pivots: Option<usize>,
    /// Maximum number of cuts added in total.
    pub max_cuts: Option<usize>,
    /// Log every intermediate dictionary at the debug level.
    pub trace: bool,
}

impl Config {
    /// Limit the number of pivots of a single relaxation solve.
    #[must_use]
    pub fn max_pivots(mut self, max_pivots: usize) -> Self {
        self.max_pivots = Some(max_pivots);
        self
    }

    /// Limit the total number of cuts.
    #[must_use]
    pub fn max_cuts(mut self, max_cuts: usize) -> Self {
        self.max_cuts = Some(max_cuts);
        self
    }

    /// Enable or disable logging of intermediate dictionaries.
    #[must_use]
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// A solve was aborted.
///
/// Infeasible and unbounded problems are not errors; they are reported through the `Status`.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SolveError {
    /// The relaxation needed more pivots than allowed, possibly because of cycling.
    #[error("pivot limit exceeded after {steps} pivots")]
    PivotLimitExceeded {
        /// Pivots performed.
        steps: usize,
    },
    /// More cuts were needed than allowed.
    #[error("cut limit exceeded after {cuts} cuts")]
    CutLimitExceeded {
        /// Cuts added.
        cuts: usize,
    },
    /// The integrality tolerance should be strictly positive.
    #[error("tolerance should be positive, got {tolerance}")]
    NonPositiveTolerance {
        /// The rejected value.
        tolerance: String,
    },
}

/// Result of a solve: a count, the final dictionary and its status.
///
/// The count is the number of pivots beyond the first for a relaxation, and the number of cuts
/// added for an integer solve.
pub type SolveResult<F> = Result<(usize, Dictionary<F>, Status), SolveError>;

/// Solves the problem described by a dictionary.
#[derive(Clone, Debug)]
pub struct Optimizer<F, PR = Bland> {
    dictionary: Dictionary<F>,
    tolerance: F,
    config: Config,
    rule: PR,
}

impl<F: OrderedField> Optimizer<F> {
    /// Create an optimizer with the default integrality tolerance of `10^-6`.
    pub fn new(dictionary: Dictionary<F>) -> Self {
        Self {
            dictionary,
            tolerance: default_tolerance(),
            config: Config::default(),
            rule: Bland,
        }
    }

    /// Create an optimizer with a custom integrality tolerance.
    ///
    /// # Errors
    ///
    /// If the tolerance is not strictly positive.
    pub fn with_tolerance(dictionary: Dictionary<F>, tolerance: F) -> Result<Self, SolveError> {
        Self::with_config(dictionary, tolerance, Config::default(), Bland)
    }
}

impl<F: OrderedField, PR: PivotRule> Optimizer<F, PR> {
    /// Create an optimizer with all settings explicit.
    ///
    /// # Arguments
    ///
    /// * `dictionary`: Problem to solve.
    /// * `tolerance`: Basic values this close to an integer are considered integer.
    /// * `config`: Limits and diagnostics.
    /// * `rule`: Selects entering variables while solving relaxations.
    ///
    /// # Errors
    ///
    /// If the tolerance is not strictly positive.
    pub fn with_config(
        dictionary: Dictionary<F>,
        tolerance: F,
        config: Config,
        rule: PR,
    ) -> Result<Self, SolveError> {
        if !is_valid_tolerance(&tolerance) {
            return Err(SolveError::NonPositiveTolerance { tolerance: tolerance.to_string() });
        }

        Ok(Self { dictionary, tolerance, config, rule })
    }

    /// The current dictionary.
    ///
    /// After an integer solve, this is the dictionary that was returned.
    pub fn dictionary(&self) -> &Dictionary<F> {
        &self.dictionary
    }

    /// Integrality tolerance.
    pub fn tolerance(&self) -> &F {
        &self.tolerance
    }

    /// Solve the linear programming relaxation, in which all variables are real.
    ///
    /// Pivots from the current dictionary, which should be feasible, until the status is terminal.
    ///
    /// # Return value
    ///
    /// The number of pivots after the first one, the final dictionary and its status, which is
    /// either `Optimal` or `Unbounded`.
    ///
    /// # Errors
    ///
    /// If the pivot limit is exceeded.
    pub fn solve_linear_programming_relaxation(&self) -> SolveResult<F> {
        self.relax(&self.dictionary)
    }

    fn relax(&self, start: &Dictionary<F>) -> SolveResult<F> {
        let mut steps = 0;
        let (entering, leaving, mut dictionary) = start.pivot_with(&self.rule);
        self.trace_pivot(steps, entering, leaving, &dictionary);

        while dictionary.status() == Status::Continue {
            if self.config.max_pivots.is_some_and(|max| steps + 1 >= max) {
                return Err(SolveError::PivotLimitExceeded { steps: steps + 1 });
            }

            steps += 1;
            let (entering, leaving, next) = dictionary.pivot_with(&self.rule);
            dictionary = next;
            self.trace_pivot(steps, entering, leaving, &dictionary);
        }

        let status = dictionary.status();
        Ok((steps, dictionary, status))
    }

    /// Solve the integer linear programming problem, in which all variables are nonnegative
    /// integers, using the cutting plane method.
    ///
    /// The current dictionary doesn't need to be feasible; a feasible dictionary is computed
    /// first. Afterwards, the current dictionary is replaced by the returned one.
    ///
    /// # Return value
    ///
    /// The number of cuts added, the final dictionary and its status. When the relaxation is
    /// infeasible or unbounded, no cuts are added. When no integer solution exists, the status is
    /// `Infeasible` and the dictionary includes the cuts that proved it.
    ///
    /// # Errors
    ///
    /// If the pivot or cut limit is exceeded.
    pub fn solve_integer_linear_programming_with_cutting_plane(&mut self) -> SolveResult<F> {
        self.dictionary = self.dictionary.initial_dictionary();
        self.trace("dictionary after the initialization phase", &self.dictionary);
        if self.dictionary.status() == Status::Infeasible {
            log::info!("Problem is infeasible, no cuts added");
            return Ok((0, self.dictionary.clone(), Status::Infeasible));
        }

        let (_, mut dictionary, status) = self.relax(&self.dictionary)?;
        self.trace("dictionary after solving the first relaxation", &dictionary);
        if status.is_failure() {
            log::info!("Relaxation is {}, no cuts added", status);
            self.dictionary = dictionary;
            return Ok((0, self.dictionary.clone(), status));
        }

        let mut cuts_added = 0;
        let mut rows = fractional_rows(&dictionary, &self.tolerance);
        while !rows.is_empty() {
            if self.config.max_cuts.is_some_and(|max| cuts_added + rows.len() > max) {
                return Err(SolveError::CutLimitExceeded { cuts: cuts_added });
            }
            cuts_added += add_cuts(&mut dictionary, &rows);
            self.trace("dictionary after adding cuts", &dictionary);

            // Primal infeasible after the cuts, the dual is feasible
            let (_, dual, status) = self.relax(&dictionary.dual())?;
            if status.is_failure() {
                log::info!("No integer solution exists, {} cuts added", cuts_added);
                self.dictionary = dictionary.with_status(Status::Infeasible);
                return Ok((cuts_added, self.dictionary.clone(), Status::Infeasible));
            }

            dictionary = dual.dual();
            self.trace("dictionary after solving the relaxation", &dictionary);
            rows = fractional_rows(&dictionary, &self.tolerance);
        }

        log::info!(
            "Integer solution with objective value {} found after {} cuts",
            dictionary.objective_function_value(), cuts_added,
        );
        let status = dictionary.status();
        self.dictionary = dictionary;
        Ok((cuts_added, self.dictionary.clone(), status))
    }

    fn trace_pivot(&self, step: usize, entering: Option<usize>, leaving: Option<usize>, dictionary: &Dictionary<F>) {
        if self.config.trace {
            log::debug!("Pivot step {} (entering {:?}, leaving {:?}):\n{}", step, entering, leaving, dictionary);
        }
    }

    fn trace(&self, message: &str, dictionary: &Dictionary<F>) {
        if self.config.trace {
            log::debug!("{}:\n{}", message, dictionary);
        }
    }
}
