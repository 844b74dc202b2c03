//! # Reading dictionary files
//!
//! A dictionary file lists, on separate lines:
//!
//! ```text
//! m n
//! basic identifiers (m)
//! nonbasic identifiers (n)
//! b (m)
//! A (m lines of n)
//! z0 c (n + 1)
//! ```
//!
//! Values within a line are separated by whitespace. Empty lines and lines starting with `#` are
//! ignored.
use std::str::FromStr;

use crate::algorithm::dictionary::Dictionary;
use crate::data::number_types::rational::RationalBig;
use crate::io::error::{FileLocation, ImportError, ParseError, ParseResult};
use crate::io::number;

/// Lines starting with this character are ignored.
const COMMENT_INDICATOR: char = '#';

/// Parse a dictionary, in string form.
///
/// # Errors
///
/// When the text is syntactically incorrect, or describes an inconsistent dictionary.
pub fn parse(program: &str) -> Result<Dictionary<RationalBig>, ImportError> {
    let mut lines = program.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with(COMMENT_INDICATOR)
        });
    let mut next_line = |part: &str| {
        lines.next().ok_or_else(|| ParseError::new(format!("Unexpected end of file, expected the {}", part)))
    };

    let dimensions = read_values::<usize>(next_line("dimensions")?, 2)?;
    let (m, n) = (dimensions[0], dimensions[1]);

    let basic = read_values(next_line("basic identifiers")?, m)?;
    let non_basic = read_values(next_line("nonbasic identifiers")?, n)?;
    let constraint_values = read_numbers(next_line("basic values")?, m)?;
    let coefficients = (0..m)
        .map(|_| read_numbers(next_line("coefficient row")?, n))
        .collect::<ParseResult<Vec<_>>>()?;
    let mut objective = read_numbers(next_line("objective")?, n + 1)?;
    let objective_constant = objective.remove(0);

    if let Some(location) = lines.next() {
        return Err(ParseError::new("Unexpected content after the objective").at(location).into());
    }

    let dictionary = Dictionary::new(basic, non_basic, constraint_values, coefficients, objective_constant, objective)?;
    log::debug!("Read dictionary with {} rows and {} columns", m, n);
    Ok(dictionary)
}

/// Read exactly `expected` whitespace separated values from a line.
fn read_values<T: FromStr>(location: FileLocation, expected: usize) -> ParseResult<Vec<T>> {
    read_line(location, expected, |text| {
        text.parse().map_err(|_| ParseError::new(format!("Failed to parse \"{}\" as an identifier", text)))
    })
}

fn read_numbers(location: FileLocation, expected: usize) -> ParseResult<Vec<RationalBig>> {
    read_line(location, expected, number::parse)
}

fn read_line<T>(
    location: FileLocation,
    expected: usize,
    parse: impl Fn(&str) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    let (_, line) = location;

    let values = line.split_whitespace()
        .map(parse)
        .collect::<ParseResult<Vec<_>>>()
        .map_err(|error| error.at(location))?;

    if values.len() != expected {
        return Err(ParseError::new(format!("Expected {} values, found {}", expected, values.len())).at(location));
    }

    Ok(values)
}

#[cfg(test)]
mod test {
    use crate::algorithm::dictionary::DictionaryError;
    use crate::io::dictionary::parse;
    use crate::io::error::ImportError;
    use crate::tests::problem_1;

    const PROBLEM_1: &str = "\
# maximize x1 + x2 s.t. 2 x1 + x2 <= 5, x1 + 2 x2 <= 5
2 2
3 4
1 2
5 5
-2 -1
-1 -2

0.0 1 1
";

    #[test]
    fn problem_1() {
        assert_eq!(parse(PROBLEM_1).unwrap(), problem_1::dictionary());
    }

    #[test]
    fn fractions() {
        let text = "2 2\n1 2\n3 4\n5/3 5/3\n-2/3 1/3\n1/3 -2/3\n10/3 -1/3 -1/3\n";
        assert_eq!(parse(text).unwrap(), problem_1::relaxation_optimum());
    }

    #[test]
    fn syntax_errors() {
        let Err(ImportError::Parse(error)) = parse("2 2\n3 4\n1 2\n5 five\n") else {
            panic!("expected a parse error");
        };
        assert_eq!(error.location(), Some((4, "5 five")));

        let Err(ImportError::Parse(error)) = parse("2 2\n3 4\n1 2\n5 5 5\n") else {
            panic!("expected a parse error");
        };
        assert_eq!(error.description(), "Expected 2 values, found 3");

        let Err(ImportError::Parse(error)) = parse("2 2\n3 4\n1 2\n5 5\n-2 -1\n") else {
            panic!("expected a parse error");
        };
        assert_eq!(error.location(), None);

        assert!(matches!(parse(&format!("{}1\n", PROBLEM_1)), Err(ImportError::Parse(_))));
        assert!(matches!(parse("1 1\n-1\n1\n0\n0\n0 0\n"), Err(ImportError::Parse(_))));
    }

    #[test]
    fn inconsistent() {
        let result = parse("1 1\n1\n1\n0\n0\n0 0\n");
        assert!(matches!(result, Err(ImportError::Dictionary(DictionaryError::DuplicateVariable(1)))));
    }
}
