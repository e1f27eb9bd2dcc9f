//! Demo command implementation
//!
//! Walks every public Fraction operation with literal inputs and reports one
//! line per scenario.

use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

use anyhow::Result;
use fraction_core::{Fraction, Over};
use serde::Serialize;

use crate::output::Render;

/// One demo scenario and its printed result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoLine {
    pub scenario: String,
    pub result: String,
}

impl DemoLine {
    fn new(scenario: impl Into<String>, result: impl fmt::Display) -> Self {
        Self {
            scenario: scenario.into(),
            result: result.to_string(),
        }
    }
}

impl Render for DemoLine {
    fn to_text(&self) -> String {
        format!("{}: {}", self.scenario, self.result)
    }
}

fn hash_of(fraction: &Fraction) -> u64 {
    let mut hasher = DefaultHasher::new();
    fraction.hash(&mut hasher);
    hasher.finish()
}

/// Run every scenario.
///
/// # Errors
///
/// Returns an error if a scenario that is expected to succeed fails. The
/// out-of-bounds `get` is captured into its line instead.
pub fn run() -> Result<Vec<DemoLine>> {
    let of = Fraction::of;

    let mut lines = vec![
        DemoLine::new("1/2", of(1, 2)?),
        DemoLine::new("2/3", of(2, 3)?),
        DemoLine::new("8", Fraction::of_int(8)),
        DemoLine::new("2/4", 2_i32.over(4)?),
    ];

    // Unary, plus and times
    lines.extend([
        DemoLine::new("+2/4", of(2, 4)?.pos()?),
        DemoLine::new("-2/6", (-of(2, 6)?)?),
        DemoLine::new("1/2 + 2/3", (of(1, 2)? + of(2, 3)?)?),
        DemoLine::new("1/2 + 1", (of(1, 2)? + 1)?),
        DemoLine::new("1/2 * 2/3", (of(1, 2)? * of(2, 3)?)?),
        DemoLine::new("1/2 * 2", (of(1, 2)? * 2)?),
    ]);

    // Comparison, hash and equality
    lines.extend([
        DemoLine::new("3/2 > 2/2", of(3, 2)? > of(2, 2)?),
        DemoLine::new("1/2 <= 2/4", of(1, 2)? <= of(2, 4)?),
        DemoLine::new("4/6 >= 2/3", of(4, 6)? >= of(2, 3)?),
        DemoLine::new(
            "hash 1/2 == 2/4",
            hash_of(&of(1, 2)?) == hash_of(&of(2, 4)?),
        ),
        DemoLine::new(
            "hash 1/2 == 1/2",
            hash_of(&of(1, 2)?) == hash_of(&of(1, 2)?),
        ),
        DemoLine::new(
            "hash 1/3 == 3/5",
            hash_of(&of(1, 3)?) == hash_of(&of(3, 5)?),
        ),
        DemoLine::new("1/2 == 2/4", of(1, 2)? == of(2, 4)?),
        DemoLine::new("1/2 == 1/2", of(1, 2)? == of(1, 2)?),
        DemoLine::new("1/3 == 3/5", of(1, 3)? == of(3, 5)?),
    ]);

    // Copy never reduces
    let half = of(1, 2)?;
    lines.extend([
        DemoLine::new("copy 1/2", half.copy().build()?),
        DemoLine::new(
            "copy 1/2 with numerator 2",
            half.copy().numerator(2).build()?,
        ),
        DemoLine::new(
            "copy 1/2 with denominator 3",
            half.copy().denominator(3).build()?,
        ),
        DemoLine::new(
            "copy 1/2 with numerator 2 and denominator 3",
            half.copy().numerator(2).denominator(3).build()?,
        ),
    ]);

    let (numerator, denominator): (i32, i32) = half.into();
    let (first, _) = of(10, 30)?.to_pair();
    let (_, second) = of(10, 79)?.to_pair();
    lines.extend([
        DemoLine::new(
            "components of 1/2",
            format!("{numerator}, {denominator}"),
        ),
        DemoLine::new("first component of 10/30", first),
        DemoLine::new("second component of 10/79", second),
        DemoLine::new("get 0 of 1/2", half.get(0)?),
        DemoLine::new("get 1 of 1/2", half.get(1)?),
        DemoLine::new(
            "get 2 of 1/2",
            match half.get(2) {
                Ok(value) => format!("Success({value})"),
                Err(e) => format!("Failure({e})"),
            },
        ),
    ]);

    lines.extend([
        DemoLine::new("round to int 1/2", half.round_to_int()),
        DemoLine::new("round to long 1/2", half.round_to_long()),
        DemoLine::new("to f32 1/2", half.to_f32()),
        DemoLine::new("to f64 1/2", half.to_f64()),
    ]);

    let range = of(1, 2)?..=of(2, 3)?;
    lines.extend([
        DemoLine::new("1/2 in 1/2..=2/3", range.contains(&of(1, 2)?)),
        DemoLine::new("2/3 in 1/2..=2/3", range.contains(&of(2, 3)?)),
        DemoLine::new("7/12 in 1/2..=2/3", range.contains(&of(7, 12)?)),
    ]);

    tracing::debug!(scenarios = lines.len(), "demo complete");
    Ok(lines)
}
