//! # Pivot rules
//!
//! Strategies for selecting the variable that enters the basis.
use crate::algorithm::dictionary::Dictionary;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes the choice of the entering variable.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, by the minimum ratio test.
pub trait PivotRule {
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a column with a positive objective coefficient, or `None` if there is no such
    /// column.
    fn select_entering_column<F: OrderedField>(&self, dictionary: &Dictionary<F>) -> Option<usize>;
}

/// Pivot on the nonbasic variable with the lowest identifier that can improve the objective.
///
/// Combined with breaking ties in the ratio test by the lowest identifier, this rule never cycles.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Bland;
impl PivotRule for Bland {
    fn select_entering_column<F: OrderedField>(&self, dictionary: &Dictionary<F>) -> Option<usize> {
        dictionary.objective().iter()
            .zip(dictionary.non_basic_indices())
            .enumerate()
            .filter(|(_, (cost, _))| cost.is_positive())
            .min_by_key(|&(_, (_, &variable))| variable)
            .map(|(column, _)| column)
    }
}

/// Pivot on the column with the largest objective coefficient, also known as Dantzig's rule.
///
/// Ties are broken by the lowest variable identifier. This rule can cycle on degenerate problems.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LargestCoefficient;
impl PivotRule for LargestCoefficient {
    fn select_entering_column<F: OrderedField>(&self, dictionary: &Dictionary<F>) -> Option<usize> {
        dictionary.objective().iter()
            .zip(dictionary.non_basic_indices())
            .enumerate()
            .filter(|(_, (cost, _))| cost.is_positive())
            .max_by(|(_, (cost, variable)), (_, (other_cost, other_variable))| {
                cost.cmp(other_cost).then(other_variable.cmp(variable))
            })
            .map(|(column, _)| column)
    }
}
