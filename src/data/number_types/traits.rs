//! # Traits
//!
//! A hierarchy of number types is defined. The pivoting logic is written against these traits
//! rather than against a concrete type, so that it can be tested with small fixed size rationals
//! while being used with arbitrary precision rationals.
use std::fmt::{Debug, Display};

use num::rational::Ratio;
use num::Integer;
use num_traits::{FromPrimitive, NumAssignRef, NumRef, Signed};

/// The simplex method is defined over the ordered fields.
///
/// All methods containing algorithmic logic should be defined to work over an ordered field.
/// Automatically implemented for all types satisfying the bounds.
pub trait OrderedField:
    Signed +
    NumRef +
    NumAssignRef +
    Ord +
    FromPrimitive +
    Rounding +
    Clone +
    Display +
    Debug +
{
}
impl<T> OrderedField for T
where
    T: Signed + NumRef + NumAssignRef + Ord + FromPrimitive + Rounding + Clone + Display + Debug,
{
}

/// Rounding towards integer values.
///
/// Needed to derive cutting planes from fractional rows and to decide integrality.
pub trait Rounding: Sized {
    /// Largest integer value not greater than `self`.
    fn floor(&self) -> Self;

    /// Nearest integer value, half-way cases rounded away from zero.
    fn round(&self) -> Self;

    /// The fractional part `self - floor(self)`, always in `[0, 1)`.
    fn fractional_part(&self) -> Self;
}

impl<T: Clone + Integer> Rounding for Ratio<T> {
    fn floor(&self) -> Self {
        Ratio::floor(self)
    }

    fn round(&self) -> Self {
        Ratio::round(self)
    }

    fn fractional_part(&self) -> Self {
        self - Ratio::floor(self)
    }
}

/// Whether `value` is within `tolerance` of the integer nearest to it.
///
/// Closeness is accepted either absolutely or relative to the magnitude of the values compared.
pub fn is_integer<F: OrderedField>(value: &F, tolerance: &F) -> bool {
    let nearest = value.round();
    let difference = (value.clone() - &nearest).abs();
    if &difference <= tolerance {
        return true;
    }

    let magnitude = value.abs().max(nearest.abs());
    difference <= magnitude * tolerance
}

/// The default closeness threshold, exactly `10^-6`.
pub fn default_tolerance<F: OrderedField>() -> F {
    let ten = (0..10).fold(F::zero(), |total, _| total + F::one());
    F::one() / num_traits::pow(ten, 6)
}

/// Whether a value can serve as a tolerance.
pub fn is_valid_tolerance<F: OrderedField>(tolerance: &F) -> bool {
    tolerance > &F::zero()
}

/// The value `1 / value`.
pub(crate) fn reciprocal<F: OrderedField>(value: &F) -> F {
    debug_assert!(!value.is_zero());

    F::one() / value.clone()
}
