//! Command implementations for the fraction CLI

pub mod calc;
pub mod demo;
