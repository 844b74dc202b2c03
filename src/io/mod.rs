//! # Reading of dictionaries
//!
//! This module provides read functionality for dictionary files.
use std::fs;
use std::path::Path;

use crate::algorithm::dictionary::Dictionary;
use crate::data::number_types::rational::RationalBig;
use crate::io::error::ImportError;

pub mod dictionary;
pub mod error;
pub mod number;

/// Import a dictionary from a file.
///
/// Files without an extension or with the `dict` extension are read as dictionary files.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the file doesn't describe
/// a consistent dictionary.
pub fn import(file_path: &Path) -> Result<Dictionary<RationalBig>, ImportError> {
    match file_path.extension() {
        None => {},
        Some(extension) => match extension.to_str() {
            Some("dict" | "txt") => {},
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
    }

    let program = fs::read_to_string(file_path)?;
    dictionary::parse(&program)
}
