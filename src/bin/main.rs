use std::path::Path;
use std::process::exit;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use rilp::algorithm::optimizer::{Config, Optimizer};
use rilp::algorithm::strategy::pivot_rule::Bland;
use rilp::algorithm::Status;
use rilp::data::number_types::traits::default_tolerance;
use rilp::io::{import, number};

/// Solve a linear program, or an integer linear program with the cutting plane method, given as a
/// simplex dictionary.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the dictionary
    problem_file: String,
    /// Require all variables to be integer
    #[arg(short, long)]
    integer: bool,
    /// Integrality tolerance, as a decimal or a fraction
    #[arg(short, long)]
    tolerance: Option<String>,
    /// Maximum number of pivots of each relaxation solve
    #[arg(long)]
    max_pivots: Option<usize>,
    /// Maximum number of cuts
    #[arg(long)]
    max_cuts: Option<usize>,
    /// Log every intermediate dictionary
    #[arg(long)]
    trace: bool,
}

fn main() {
    let opts = Opts::parse();

    let level = if opts.trace { LevelFilter::Debug } else { LevelFilter::Info };
    Builder::new().filter_level(level).init();

    let path = Path::new(&opts.problem_file);
    println!("Reading problem file: \"{}\"...", path.to_string_lossy());
    let dictionary = import(path).unwrap_or_else(|error| {
        eprintln!("Couldn't read the file: {}", error);
        exit(1);
    });

    let tolerance = match &opts.tolerance {
        Some(text) => number::parse(text).unwrap_or_else(|error| {
            eprintln!("Invalid tolerance: {}", error);
            exit(1);
        }),
        None => default_tolerance(),
    };
    let config = Config { max_pivots: opts.max_pivots, max_cuts: opts.max_cuts, trace: opts.trace };
    let mut optimizer = Optimizer::with_config(dictionary, tolerance, config, Bland).unwrap_or_else(|error| {
        eprintln!("{}", error);
        exit(1);
    });

    let result = if opts.integer {
        println!("Solving with cutting planes...");
        optimizer.solve_integer_linear_programming_with_cutting_plane()
            .map(|(cuts, dictionary, status)| {
                println!("Cuts added: {}", cuts);
                (dictionary, status)
            })
    } else {
        let initial = optimizer.dictionary().initial_dictionary();
        if initial.status() == Status::Infeasible {
            Ok((initial, Status::Infeasible))
        } else {
            println!("Solving relaxation...");
            Optimizer::with_config(initial, optimizer.tolerance().clone(), config, Bland)
                .and_then(|relaxation| relaxation.solve_linear_programming_relaxation())
                .map(|(steps, dictionary, status)| {
                    println!("Pivot steps: {}", steps);
                    (dictionary, status)
                })
        }
    };

    match result {
        Ok((dictionary, status)) => {
            println!("{}", status);
            if status == Status::Optimal {
                println!("Objective value: {}", dictionary.objective_function_value());
            }
            println!("{}", dictionary);
        },
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        },
    }
}
