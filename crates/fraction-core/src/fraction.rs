//! The `Fraction` value type and its construction paths
//!
//! A `Fraction` is created through [`Fraction::of`], which validates and
//! reduces its input, or [`Fraction::of_int`]. Every instance produced by
//! those paths is canonical: `gcd(|numerator|, denominator) == 1` and the
//! denominator is positive.
//!
//! [`Fraction::copy`] is the one exception. It copies fields verbatim and
//! only rejects a zero denominator, so it can yield a non-canonical value.

use serde::{Deserialize, Serialize};

use crate::{
    convert::FractionParts,
    error::{FractionError, Result},
};

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0) = a` and `gcd(a, b) = gcd(b, a mod b)`. The sign of the result
/// follows the remainders, so callers normalize the sign afterwards.
///
/// ```
/// use fraction_core::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
#[must_use]
pub const fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a.wrapping_rem(b))
    }
}

/// An immutable rational number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "FractionParts", into = "FractionParts")]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
    decimal: f64,
}

impl Fraction {
    /// Create a canonical fraction from a numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::InvalidArgument`] if `denominator` is zero,
    /// or [`FractionError::Overflow`] for `i32::MIN / -1`.
    ///
    /// ```
    /// use fraction_core::Fraction;
    ///
    /// # fn main() -> fraction_core::Result<()> {
    /// let f = Fraction::of(4, -6)?;
    /// assert_eq!(f.to_pair(), (-2, 3));
    /// # Ok(())
    /// # }
    /// ```
    pub fn of(numerator: i32, denominator: i32) -> Result<Self> {
        Self::normalize(i64::from(numerator), i64::from(denominator), "of")
    }

    /// Create the fraction `number/1`.
    #[must_use]
    pub fn of_int(number: i32) -> Self {
        Self::from_parts(number, 1)
    }

    /// Reduce a wide numerator/denominator pair and narrow it to storage.
    ///
    /// Arithmetic computes its cross products in `i64` and hands them here,
    /// so the only overflow point is the final narrowing.
    pub(crate) fn normalize(
        numerator: i64,
        denominator: i64,
        operation: &'static str,
    ) -> Result<Self> {
        if denominator == 0 {
            tracing::debug!(numerator, operation, "rejected zero denominator");
            return Err(FractionError::InvalidArgument { numerator });
        }

        let overflow = FractionError::Overflow { operation };

        if numerator.checked_rem(denominator).ok_or(overflow)? == 0 {
            let quotient = numerator.checked_div(denominator).ok_or(overflow)?;
            return Self::narrow(quotient, 1, operation);
        }

        let divisor = gcd(numerator, denominator);
        let mut numerator = numerator.checked_div(divisor).ok_or(overflow)?;
        let mut denominator = denominator.checked_div(divisor).ok_or(overflow)?;

        if denominator < 0 {
            numerator = numerator.checked_neg().ok_or(overflow)?;
            denominator = denominator.checked_neg().ok_or(overflow)?;
        }

        Self::narrow(numerator, denominator, operation)
    }

    fn narrow(numerator: i64, denominator: i64, operation: &'static str) -> Result<Self> {
        match (i32::try_from(numerator), i32::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) => Ok(Self::from_parts(numerator, denominator)),
            _ => {
                tracing::debug!(numerator, denominator, operation, "reduced terms overflow i32");
                Err(FractionError::Overflow { operation })
            }
        }
    }

    /// Raw constructor. Callers guarantee `denominator != 0`.
    fn from_parts(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
            decimal: f64::from(numerator) / f64::from(denominator),
        }
    }

    #[must_use]
    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    #[must_use]
    pub const fn denominator(&self) -> i32 {
        self.denominator
    }

    /// `numerator / denominator` as computed at construction.
    #[must_use]
    pub const fn decimal(&self) -> f64 {
        self.decimal
    }

    /// Whether the terms are fully reduced with a positive denominator.
    ///
    /// Always true for values from [`Fraction::of`]; may be false after
    /// [`Fraction::copy`].
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        let numerator = i64::from(self.numerator).abs();
        let denominator = i64::from(self.denominator);
        denominator > 0 && gcd(numerator, denominator) == 1
    }

    /// Start a field-level copy of this fraction.
    ///
    /// Unset fields keep their current value. The result is **not** reduced:
    /// `Fraction::of(1, 2)?.copy().numerator(2).build()?` is `2/2`.
    pub const fn copy(&self) -> FractionCopy {
        FractionCopy {
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }
}

impl From<i32> for Fraction {
    fn from(number: i32) -> Self {
        Self::of_int(number)
    }
}

/// Field-level copy of a [`Fraction`] with optional overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FractionCopy {
    numerator: i32,
    denominator: i32,
}

impl FractionCopy {
    pub const fn numerator(mut self, numerator: i32) -> Self {
        self.numerator = numerator;
        self
    }

    pub const fn denominator(mut self, denominator: i32) -> Self {
        self.denominator = denominator;
        self
    }

    /// Build the copy without reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::InvalidArgument`] if the denominator is zero.
    pub fn build(self) -> Result<Fraction> {
        if self.denominator == 0 {
            return Err(FractionError::InvalidArgument {
                numerator: i64::from(self.numerator),
            });
        }
        Ok(Fraction::from_parts(self.numerator, self.denominator))
    }
}

/// `numerator.over(denominator)` as a call-site shorthand for [`Fraction::of`].
pub trait Over {
    fn over(self, denominator: i32) -> Result<Fraction>;
}

impl Over for i32 {
    fn over(self, denominator: i32) -> Result<Fraction> {
        Fraction::of(self, denominator)
    }
}
