use num::rational::Ratio;
use num::BigInt;

use rilp::algorithm::optimizer::{Config, Optimizer};
use rilp::algorithm::Status;
use rilp::algorithm::strategy::pivot_rule::{Bland, LargestCoefficient};
use rilp::data::number_types::rational::RationalBig;
use rilp::data::number_types::traits::is_integer;
use rilp::io::error::ImportError;
use rilp::io::import;

use super::{get_test_file_path, read};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn integer(value: i64) -> RationalBig {
    Ratio::from_integer(BigInt::from(value))
}

fn fraction(numerator: i64, denominator: i64) -> RationalBig {
    Ratio::new(BigInt::from(numerator), BigInt::from(denominator))
}

fn tolerance() -> RationalBig {
    fraction(1, 1_000_000)
}

fn traced(name: &str) -> Optimizer<RationalBig> {
    init();
    Optimizer::with_config(read(name), tolerance(), Config::default().trace(true), Bland).unwrap()
}

#[test]
fn two_constraints() {
    let optimizer = traced("two_constraints");
    let (steps, relaxed, status) = optimizer.solve_linear_programming_relaxation().unwrap();
    assert_eq!(steps, 1);
    assert_eq!(status, Status::Optimal);
    assert_eq!(relaxed.objective_function_value(), &fraction(10, 3));

    let mut optimizer = traced("two_constraints");
    let (cuts, dictionary, status) = optimizer.solve_integer_linear_programming_with_cutting_plane().unwrap();
    assert_eq!(cuts, 2);
    assert_eq!(status, Status::Optimal);
    assert_eq!(dictionary.objective_function_value(), &integer(3));
    assert_eq!(dictionary.solution(2), vec![integer(1), integer(2)]);
    assert_eq!(dictionary.m(), relaxed.m() + cuts);
}

#[test]
fn infeasible() {
    let mut optimizer = traced("infeasible");
    let (cuts, dictionary, status) = optimizer.solve_integer_linear_programming_with_cutting_plane().unwrap();
    assert_eq!(cuts, 0);
    assert_eq!(status, Status::Infeasible);
    assert_eq!(status.to_string(), "INFEASIBLE");
    assert_eq!(dictionary.status(), Status::Infeasible);
    assert_eq!(read("infeasible").initial_dictionary().status(), Status::Infeasible);
}

#[test]
fn unbounded() {
    let optimizer = traced("unbounded");
    let (_, _, status) = optimizer.solve_linear_programming_relaxation().unwrap();
    assert_eq!(status, Status::Unbounded);

    let mut optimizer = traced("unbounded");
    let (cuts, _, status) = optimizer.solve_integer_linear_programming_with_cutting_plane().unwrap();
    assert_eq!(cuts, 0);
    assert_eq!(status.to_string(), "UNBOUNDED");
}

#[test]
fn integral_relaxation() {
    let mut optimizer = traced("integral_relaxation");
    let (cuts, dictionary, status) = optimizer.solve_integer_linear_programming_with_cutting_plane().unwrap();
    assert_eq!(cuts, 0);
    assert_eq!(status, Status::Optimal);
    assert_eq!(dictionary.objective_function_value(), &integer(13));
    assert_eq!(dictionary.solution(3), vec![integer(2), integer(0), integer(1)]);
}

#[test]
fn many_cuts() {
    let mut optimizer = traced("many_cuts");
    let (cuts, dictionary, status) = optimizer.solve_integer_linear_programming_with_cutting_plane().unwrap();
    assert_eq!(cuts, 6);
    assert_eq!(status, Status::Optimal);
    assert_eq!(dictionary.objective_function_value(), &integer(10));
    assert_eq!(dictionary.solution(2), vec![integer(2), integer(2)]);
    assert!(dictionary.constraint_values().iter().all(|value| is_integer(value, &tolerance())));
    assert!(dictionary.is_primal_feasible());
}

#[test]
fn infeasible_start() {
    let mut optimizer = traced("infeasible_start");
    let (cuts, dictionary, status) = optimizer.solve_integer_linear_programming_with_cutting_plane().unwrap();
    assert_eq!(cuts, 2);
    assert_eq!(status, Status::Optimal);
    assert_eq!(dictionary.objective_function_value(), &integer(10));
    assert_eq!(dictionary.solution(3), vec![integer(1), integer(2), integer(0)]);
}

#[test]
fn pivot_rules_agree() {
    for name in ["two_constraints", "integral_relaxation", "many_cuts", "infeasible_start"] {
        let mut bland = Optimizer::new(read(name));
        let mut largest = Optimizer::with_config(read(name), tolerance(), Config::default(), LargestCoefficient).unwrap();

        let (_, bland_result, bland_status) = bland.solve_integer_linear_programming_with_cutting_plane().unwrap();
        let (_, largest_result, largest_status) = largest.solve_integer_linear_programming_with_cutting_plane().unwrap();
        assert_eq!(bland_status, largest_status);
        assert_eq!(bland_result.objective_function_value(), largest_result.objective_function_value());
    }
}

#[test]
fn dual_involution() {
    for name in ["two_constraints", "infeasible", "unbounded", "integral_relaxation", "many_cuts"] {
        let dictionary = read(name);
        assert_eq!(dictionary.dual().dual(), dictionary);

        let (_, _, pivoted) = dictionary.pivot();
        assert_eq!(pivoted.dual().dual(), pivoted);
    }
}

#[test]
fn final_is_idempotent() {
    let optimizer = Optimizer::new(read("integral_relaxation"));
    let (_, optimum, _) = optimizer.solve_linear_programming_relaxation().unwrap();
    let (entering, leaving, again) = optimum.pivot();
    assert_eq!((entering, leaving), (None, None));
    assert_eq!(again, optimum);
}

#[test]
fn missing_file() {
    assert!(matches!(import(&get_test_file_path("does_not_exist")), Err(ImportError::IO(_))));
    assert!(matches!(import(&get_test_file_path("mod").with_extension("rs")), Err(ImportError::FileExtension(_))));
}
