//! # Algorithms
//!
//! Simplex dictionaries, the strategies used to pivot them and the solver driving dictionaries to
//! an optimal real or integer solution.
use std::fmt::{Display, Formatter, Result as FormatResult};

pub mod cutting_plane;
pub mod dictionary;
pub mod optimizer;
pub mod strategy;

/// Classification of a dictionary.
///
/// A dictionary either needs more pivoting, or is in one of three terminal states.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// At least one nonbasic variable can still improve the objective.
    Continue,
    /// No nonbasic variable can improve the objective.
    Optimal,
    /// The objective can be increased without bound along the direction of a nonbasic variable.
    Unbounded,
    /// There is no feasible solution.
    Infeasible,
}

impl Status {
    /// Signed status code: positive means continue, zero optimal and negative a failure.
    pub fn code(self) -> i8 {
        match self {
            Status::Continue => 1,
            Status::Optimal => 0,
            Status::Unbounded => -1,
            Status::Infeasible => -2,
        }
    }

    /// Label of the status.
    ///
    /// The optimal status is labeled `"FINAL"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Continue => "CONTINUE",
            Status::Optimal => "FINAL",
            Status::Unbounded => "UNBOUNDED",
            Status::Infeasible => "INFEASIBLE",
        }
    }

    /// Whether no more pivoting should happen.
    pub fn is_terminal(self) -> bool {
        self != Status::Continue
    }

    /// Whether the status is `Unbounded` or `Infeasible`.
    pub fn is_failure(self) -> bool {
        self.code() < 0
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(self.as_str())
    }
}
