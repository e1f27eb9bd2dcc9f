//! Arithmetic on fractions
//!
//! Every operation computes in `i64` and returns through the normalizing
//! factory, so results are canonical. The operator impls are thin wrappers
//! over the named methods and keep their `Result` output: overflow of the
//! 32-bit terms is reported rather than wrapped.

use std::ops::{Add, Mul, Neg};

use crate::{
    error::{FractionError, Result},
    fraction::Fraction,
};

impl Fraction {
    /// Unary plus: an equivalent canonical fraction.
    pub fn pos(&self) -> Result<Self> {
        Self::normalize(
            i64::from(self.numerator()),
            i64::from(self.denominator()),
            "pos",
        )
    }

    /// Unary minus.
    pub fn negate(&self) -> Result<Self> {
        Self::normalize(
            -i64::from(self.numerator()),
            i64::from(self.denominator()),
            "negate",
        )
    }

    /// `a/b + c/d = (a·d + c·b) / (b·d)`
    pub fn plus(&self, other: &Self) -> Result<Self> {
        let (a, b) = widen(self);
        let (c, d) = widen(other);
        let numerator = (a * d)
            .checked_add(c * b)
            .ok_or(FractionError::Overflow { operation: "plus" })?;
        Self::normalize(numerator, b * d, "plus")
    }

    pub fn plus_int(&self, number: i32) -> Result<Self> {
        self.plus(&Self::of_int(number))
    }

    /// `a/b × c/d = (a·c) / (b·d)`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let (a, b) = widen(self);
        let (c, d) = widen(other);
        Self::normalize(a * c, b * d, "multiply")
    }

    pub fn multiply_int(&self, number: i32) -> Result<Self> {
        self.multiply(&Self::of_int(number))
    }
}

// i32 × i32 always fits i64
fn widen(fraction: &Fraction) -> (i64, i64) {
    (
        i64::from(fraction.numerator()),
        i64::from(fraction.denominator()),
    )
}

impl Neg for Fraction {
    type Output = Result<Self>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for Fraction {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Self::Output {
        self.plus(&other)
    }
}

impl Add<i32> for Fraction {
    type Output = Result<Self>;

    fn add(self, number: i32) -> Self::Output {
        self.plus_int(number)
    }
}

impl Mul for Fraction {
    type Output = Result<Self>;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(&other)
    }
}

impl Mul<i32> for Fraction {
    type Output = Result<Self>;

    fn mul(self, number: i32) -> Self::Output {
        self.multiply_int(number)
    }
}
