//! Fraction-core - Canonical rational numbers
//!
//! This crate provides:
//! - The [`Fraction`] value type, always reduced with a positive denominator
//! - Checked arithmetic routed through the normalizing factory
//! - Decimal-based ordering with structural equality
//! - Indexed and destructuring access, numeric conversion
//!
//! ```
//! use fraction_core::{Fraction, Over};
//!
//! # fn main() -> fraction_core::Result<()> {
//! let half = Fraction::of(2, 4)?;
//! assert_eq!(half, 1_i32.over(2)?);
//! assert_eq!((half + Fraction::of(2, 3)?)?, Fraction::of(7, 6)?);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod arithmetic;
pub mod convert;
pub mod error;
pub mod fraction;
pub mod ordering;

pub use error::{FractionError, Result};
pub use fraction::{gcd, Fraction, FractionCopy, Over};
