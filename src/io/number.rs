//! # Number parsing
//!
//! Reading exact rational numbers from strings. Both decimals (`-2.5`, `.3`, `4.`) and fractions
//! (`5/3`, `-1/2`) are accepted.
use std::str::FromStr;

use num::BigInt;
use num_traits::{One, Zero};

use crate::data::number_types::rational::RationalBig;
use crate::io::error::{ParseError, ParseResult};

/// Parse a decimal or a fraction into an exact rational.
///
/// # Errors
///
/// When the text is not a number, or when a fraction has a zero denominator.
pub fn parse(text: &str) -> ParseResult<RationalBig> {
    match text.split_once('/') {
        None => Raw::try_from(text).map(RationalBig::from),
        Some((numerator, denominator)) => {
            let numerator = RationalBig::from(Raw::try_from(numerator)?);
            let denominator = RationalBig::from(Raw::try_from(denominator)?);
            if denominator.is_zero() {
                return Err(ParseError::new(format!("Zero denominator in \"{}\"", text)));
            }

            Ok(numerator / denominator)
        },
    }
}

/// Intermediate form of read number: `sign * integer / 10^decimal_steps_from_right`.
#[derive(Eq, PartialEq, Clone, Debug)]
struct Raw {
    sign: Sign,
    integer: BigInt,
    decimal_steps_from_right: usize,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Sign {
    Positive,
    Negative,
}

impl TryFrom<&str> for Raw {
    type Error = ParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, text.strip_prefix('+').unwrap_or(text)),
        };

        let (integer_part, mantissa_part) = digits.split_once('.').unwrap_or((digits, ""));
        if integer_part.is_empty() && mantissa_part.is_empty() {
            return Err(ParseError::new(format!("Empty number \"{}\"", text)));
        }
        if !integer_part.chars().chain(mantissa_part.chars()).all(|c| c.is_ascii_digit()) {
            return Err(ParseError::new(format!("Failed to parse \"{}\" as a number", text)));
        }

        let all_digits = format!("{}{}", integer_part, mantissa_part);
        let integer = BigInt::from_str(&all_digits)
            .map_err(|error| ParseError::new(format!("Failed to parse \"{}\" as a number: {}", text, error)))?;

        Ok(Self { sign, integer, decimal_steps_from_right: mantissa_part.len() })
    }
}

impl From<Raw> for RationalBig {
    fn from(value: Raw) -> Self {
        let Raw { sign, integer, decimal_steps_from_right } = value;

        let signed_numerator = match sign {
            Sign::Positive => integer,
            Sign::Negative => -integer,
        };
        let denominator = num_traits::pow(BigInt::from(10), decimal_steps_from_right);
        debug_assert!(denominator >= BigInt::one());

        Self::new(signed_numerator, denominator)
    }
}
