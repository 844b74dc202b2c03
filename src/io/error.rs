//! # Error reporting for reading of dictionary files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;

use thiserror::Error;

use crate::algorithm::dictionary::DictionaryError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a dictionary.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The file is syntactically correct, but the dictionary it describes is inconsistent.
    ///
    /// For example, a variable identifier might be used twice.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold the file location at which the error was caused: a line number and the line itself.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("ParseError: {description}{}", location_suffix(.location))]
pub struct ParseError {
    description: String,
    location: Option<(usize, String)>,
}

impl ParseError {
    /// A new `ParseError` without file location.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Attach a file location, unless one is present already.
    #[must_use]
    pub fn at(self, (line_number, line): FileLocation) -> Self {
        match self.location {
            Some(_) => self,
            None => Self { location: Some((line_number, line.to_string())), ..self },
        }
    }

    /// Human readable description, without location.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Line number, starting at `1`, and contents of the line that caused the error.
    pub fn location(&self) -> Option<(usize, &str)> {
        self.location.as_ref().map(|(number, line)| (*number, line.as_str()))
    }
}

fn location_suffix(location: &Option<(usize, String)>) -> String {
    match location {
        Some((line_number, line)) => format!("\n\tCaused at line\t{}:\t{}", line_number, line),
        None => String::new(),
    }
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (usize, &'a str);

/// Shorthand for results of parsing.
pub type ParseResult<T> = Result<T, ParseError>;
