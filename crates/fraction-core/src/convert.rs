//! Structural access and numeric conversion

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{FractionError, Result},
    fraction::Fraction,
};

impl Fraction {
    /// Indexed access: `0` is the numerator, `1` the denominator.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::IndexOutOfBounds`] for any other index.
    pub const fn get(&self, index: usize) -> Result<i32> {
        match index {
            0 => Ok(self.numerator()),
            1 => Ok(self.denominator()),
            _ => Err(FractionError::IndexOutOfBounds { index }),
        }
    }

    /// `(numerator, denominator)`, for destructuring.
    #[must_use]
    pub const fn to_pair(&self) -> (i32, i32) {
        (self.numerator(), self.denominator())
    }

    /// Nearest `i32`, rounding half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn round_to_int(&self) -> i32 {
        // |n/d| <= 2^31, so the rounded value is within i32 except for
        // 2^31 itself (a raw -2^31 / -1 copy), which the cast saturates.
        self.decimal().round() as i32
    }

    /// Nearest `i64`, rounding half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn round_to_long(&self) -> i64 {
        self.decimal().round() as i64
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> f32 {
        self.decimal() as f32
    }

    #[must_use]
    pub const fn to_f64(&self) -> f64 {
        self.decimal()
    }
}

impl From<Fraction> for (i32, i32) {
    fn from(fraction: Fraction) -> Self {
        fraction.to_pair()
    }
}

impl From<Fraction> for f64 {
    fn from(fraction: Fraction) -> Self {
        fraction.to_f64()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

/// Serialized form of a [`Fraction`].
///
/// Deserializing goes through [`Fraction::of`], so stored values are
/// validated and reduced on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionParts {
    pub numerator: i32,
    pub denominator: i32,
}

impl TryFrom<FractionParts> for Fraction {
    type Error = FractionError;

    fn try_from(parts: FractionParts) -> Result<Self> {
        Self::of(parts.numerator, parts.denominator)
    }
}

impl From<Fraction> for FractionParts {
    fn from(fraction: Fraction) -> Self {
        Self {
            numerator: fraction.numerator(),
            denominator: fraction.denominator(),
        }
    }
}
