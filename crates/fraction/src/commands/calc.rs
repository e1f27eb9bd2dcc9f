//! Calculator command implementations
//!
//! Each command builds its fractions through the normalizing factory and
//! returns a serializable report.

use std::{
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use anyhow::{Context, Result};
use fraction_core::Fraction;
use serde::Serialize;

use crate::output::Render;

fn fraction(numerator: i32, denominator: i32) -> Result<Fraction> {
    Fraction::of(numerator, denominator)
        .with_context(|| format!("Cannot build fraction {numerator}/{denominator}"))
}

/// Result of `fraction of`
#[derive(Debug, Clone, Serialize)]
pub struct FractionReport {
    pub input: (i32, i32),
    pub fraction: Fraction,
    pub decimal: f64,
}

impl Render for FractionReport {
    fn to_text(&self) -> String {
        let (numerator, denominator) = self.input;
        format!(
            "{numerator}/{denominator} = {} ({})",
            self.fraction, self.decimal
        )
    }
}

/// Construct and describe a single fraction.
pub fn of(numerator: i32, denominator: i32) -> Result<FractionReport> {
    let fraction = fraction(numerator, denominator)?;
    Ok(FractionReport {
        input: (numerator, denominator),
        fraction,
        decimal: fraction.decimal(),
    })
}

/// Binary arithmetic supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Multiply,
}

impl BinaryOp {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
        }
    }
}

/// Result of `fraction add` / `fraction mul`
#[derive(Debug, Clone, Serialize)]
pub struct BinaryReport {
    pub operation: BinaryOp,
    pub left: Fraction,
    pub right: Fraction,
    pub result: Fraction,
}

impl Render for BinaryReport {
    fn to_text(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.left,
            self.operation.symbol(),
            self.right,
            self.result
        )
    }
}

pub fn binary(op: BinaryOp, left: (i32, i32), right: (i32, i32)) -> Result<BinaryReport> {
    let lhs = fraction(left.0, left.1)?;
    let rhs = fraction(right.0, right.1)?;
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Multiply => lhs * rhs,
    }
    .with_context(|| format!("Cannot compute {lhs} {} {rhs}", op.symbol()))?;

    tracing::debug!(%lhs, %rhs, %result, operation = ?op, "computed");
    Ok(BinaryReport {
        operation: op,
        left: lhs,
        right: rhs,
        result,
    })
}

/// Result of `fraction compare`
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub left: Fraction,
    pub right: Fraction,
    pub ordering: &'static str,
    pub equal: bool,
    pub same_hash: bool,
}

impl Render for CompareReport {
    fn to_text(&self) -> String {
        let symbol = match self.ordering {
            "less" => "<",
            "greater" => ">",
            _ => "==",
        };
        format!(
            "{} {symbol} {} (equal: {}, same hash: {})",
            self.left, self.right, self.equal, self.same_hash
        )
    }
}

fn hash_of(fraction: &Fraction) -> u64 {
    let mut hasher = DefaultHasher::new();
    fraction.hash(&mut hasher);
    hasher.finish()
}

pub fn compare(left: (i32, i32), right: (i32, i32)) -> Result<CompareReport> {
    let lhs = fraction(left.0, left.1)?;
    let rhs = fraction(right.0, right.1)?;
    let ordering = match lhs.compare_to(&rhs) {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    Ok(CompareReport {
        left: lhs,
        right: rhs,
        ordering,
        equal: lhs == rhs,
        same_hash: hash_of(&lhs) == hash_of(&rhs),
    })
}

/// Result of `fraction get`
#[derive(Debug, Clone, Serialize)]
pub struct GetReport {
    pub fraction: Fraction,
    pub index: usize,
    pub value: i32,
}

impl Render for GetReport {
    fn to_text(&self) -> String {
        format!("{}[{}] = {}", self.fraction, self.index, self.value)
    }
}

pub fn get(numerator: i32, denominator: i32, index: usize) -> Result<GetReport> {
    let fraction = fraction(numerator, denominator)?;
    let value = fraction
        .get(index)
        .with_context(|| format!("Cannot index {fraction}"))?;
    Ok(GetReport {
        fraction,
        index,
        value,
    })
}
