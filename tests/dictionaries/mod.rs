//! # Small dictionaries
//!
//! Problems small enough to be verified by hand, stored in the dictionary file format.
use std::path::{Path, PathBuf};

use rilp::algorithm::dictionary::Dictionary;
use rilp::data::number_types::rational::RationalBig;
use rilp::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the dictionary files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("dict")
}

/// Read a problem file.
fn read(name: &str) -> Dictionary<RationalBig> {
    import(&get_test_file_path(name)).unwrap()
}
