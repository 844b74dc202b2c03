//! # Rational numbers
//!
//! Pivoting accumulates long chains of multiplications and divisions. Rational numbers of
//! arbitrary size keep every dictionary exact, so that integrality and optimality can be decided
//! reliably.
pub use num::BigInt;
use num::rational::Ratio;

/// Rational number with an arbitrary size numerator and denominator.
pub type RationalBig = Ratio<BigInt>;
/// Rational number with a fixed size numerator and denominator.
///
/// Only suitable for small problems, operations may overflow.
pub type Rational64 = Ratio<i64>;

/// Shorthand for creating an arbitrary precision rational number.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::RationalBig::from_integer(
            $crate::data::number_types::rational::BigInt::from($value)
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::RationalBig::new(
            $crate::data::number_types::rational::BigInt::from($numer),
            $crate::data::number_types::rational::BigInt::from($denom),
        )
    };
}

/// Shorthand for creating a fixed size rational number.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational64::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational64::new($numer, $denom)
    };
}
