//! # Gomory cutting planes
//!
//! A row of an optimal dictionary with a fractional basic value gives a valid inequality for all
//! integer solutions that is violated by the current basic solution. For a row
//!
//! ```text
//! x_i = b_i + sum_j a_ij x_j
//! ```
//!
//! the cut introduces a new nonnegative basic variable
//!
//! ```text
//! x_new = -frac(b_i) + sum_j frac(-a_ij) x_j
//! ```
//!
//! whose value `-frac(b_i)` is negative, so the extended dictionary is primal infeasible but, being
//! optimal before the cut, still dual feasible.
use crate::algorithm::dictionary::Dictionary;
use crate::data::number_types::traits::{is_integer, OrderedField};

/// A single cutting plane, not yet added to a dictionary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cut<F> {
    /// Value of the new basic variable, `-frac(b_i)`.
    pub constant: F,
    /// Coefficients of the nonbasic variables, `frac(-a_ij)`.
    pub coefficients: Vec<F>,
}

/// Rows with a basic value that is not integer, in ascending order.
///
/// # Arguments
///
/// * `dictionary`: Dictionary to scan.
/// * `tolerance`: Values this close to an integer (absolutely or relatively) count as integer.
pub fn fractional_rows<F: OrderedField>(dictionary: &Dictionary<F>, tolerance: &F) -> Vec<usize> {
    dictionary.constraint_values().iter()
        .enumerate()
        .filter(|(_, value)| !is_integer(*value, tolerance))
        .map(|(i, _)| i)
        .collect()
}

/// Derive the Gomory cut of a row.
pub fn gomory_cut<F: OrderedField>(dictionary: &Dictionary<F>, row: usize) -> Cut<F> {
    debug_assert!(row < dictionary.m());

    Cut {
        constant: -dictionary.constraint_values()[row].fractional_part(),
        coefficients: dictionary.coefficients().row(row).iter()
            .map(|value| (-value.clone()).fractional_part())
            .collect(),
    }
}

/// Add the cuts of the given rows, each with a fresh basic variable.
///
/// All cuts are derived from the dictionary as it was before any of them was added. The new
/// variables get the identifiers following the highest one in use, in the order of `rows`.
///
/// # Return value
///
/// The number of cuts added.
pub fn add_cuts<F: OrderedField>(dictionary: &mut Dictionary<F>, rows: &[usize]) -> usize {
    let cuts = rows.iter().map(|&row| gomory_cut(dictionary, row)).collect::<Vec<_>>();

    dictionary.reserve_constraints(cuts.len());
    for Cut { constant, coefficients } in cuts {
        let variable = dictionary.max_variable_index() + 1;
        dictionary.push_constraint(variable, constant, coefficients);
    }

    rows.len()
}

#[cfg(test)]
mod test {
    use crate::algorithm::cutting_plane::{add_cuts, Cut, fractional_rows, gomory_cut};
    use crate::algorithm::dictionary::Dictionary;
    use crate::algorithm::Status;
    use crate::data::number_types::traits::default_tolerance;
    use crate::RB;
    use crate::tests::problem_1;

    #[test]
    fn fractional() {
        let tolerance = default_tolerance();
        assert_eq!(fractional_rows(&problem_1::relaxation_optimum(), &tolerance), vec![0, 1]);
        assert!(fractional_rows(&problem_1::integer_optimum(), &tolerance).is_empty());
        assert!(fractional_rows(&problem_1::dictionary(), &tolerance).is_empty());
    }

    #[test]
    fn almost_integer() {
        let dictionary = Dictionary::new(
            vec![1, 2, 3],
            vec![4],
            vec![RB!(3_000_001, 1_000_000), RB!(5, 2), RB!(2_000_000_001, 1_000_000_000)],
            vec![vec![RB!(-1)], vec![RB!(-1)], vec![RB!(-1)]],
            RB!(0),
            vec![RB!(-1)],
        ).unwrap();
        assert_eq!(fractional_rows(&dictionary, &default_tolerance()), vec![1]);
        assert_eq!(fractional_rows(&dictionary, &RB!(1, 10_000_000)), vec![0, 1]);
    }

    #[test]
    fn cut() {
        let cut = gomory_cut(&problem_1::relaxation_optimum(), 0);
        assert_eq!(cut, Cut {
            constant: RB!(-2, 3),
            coefficients: vec![RB!(2, 3), RB!(2, 3)],
        });
    }

    #[test]
    fn cuts_are_appended() {
        let mut dictionary = problem_1::relaxation_optimum();
        assert_eq!(add_cuts(&mut dictionary, &[0, 1]), 2);

        assert_eq!(dictionary.m(), 4);
        assert_eq!(dictionary.n(), 2);
        assert_eq!(dictionary.basic_indices(), &[1, 2, 5, 6]);
        assert_eq!(dictionary.constraint_values()[2], RB!(-2, 3));
        assert_eq!(dictionary.constraint_values()[3], RB!(-2, 3));
        assert_eq!(dictionary.coefficients().row(3), &[RB!(2, 3), RB!(2, 3)]);
        assert!(!dictionary.is_primal_feasible());
        // The objective is untouched, so the dual remains feasible
        assert_eq!(dictionary.status(), Status::Optimal);
        assert!(dictionary.dual().is_primal_feasible());
    }
}
