use std::io::Write;

use anyhow::{Context, Result};
use clap::ArgMatches;

use super::setup::SetupConfig;
use crate::{
    commands::{
        calc::{self, BinaryOp},
        demo,
    },
    output::emit,
};

/// Run the selected subcommand, writing records to `out`.
pub fn dispatch<W: Write>(matches: &ArgMatches, config: &SetupConfig, out: &mut W) -> Result<()> {
    let format = config.format;
    match matches.subcommand() {
        Some(("demo", _)) => {
            for line in demo::run()? {
                emit(out, format, &line)?;
            }
            Ok(())
        }
        Some(("of", sub_m)) => {
            let report = calc::of(term(sub_m, "numerator")?, term(sub_m, "denominator")?)?;
            emit(out, format, &report)
        }
        Some(("add", sub_m)) => {
            let (left, right) = operands(sub_m)?;
            emit(out, format, &calc::binary(BinaryOp::Add, left, right)?)
        }
        Some(("mul", sub_m)) => {
            let (left, right) = operands(sub_m)?;
            emit(out, format, &calc::binary(BinaryOp::Multiply, left, right)?)
        }
        Some(("compare", sub_m)) => {
            let (left, right) = operands(sub_m)?;
            emit(out, format, &calc::compare(left, right)?)
        }
        Some(("get", sub_m)) => {
            let index = *sub_m
                .get_one::<usize>("index")
                .context("Missing argument 'index'")?;
            let report = calc::get(
                term(sub_m, "numerator")?,
                term(sub_m, "denominator")?,
                index,
            )?;
            emit(out, format, &report)
        }
        _ => anyhow::bail!("Unknown command. Run 'fraction --help' for usage."),
    }
}

fn term(matches: &ArgMatches, name: &str) -> Result<i32> {
    matches
        .get_one::<i32>(name)
        .copied()
        .with_context(|| format!("Missing argument '{name}'"))
}

type Terms = (i32, i32);

fn operands(matches: &ArgMatches) -> Result<(Terms, Terms)> {
    Ok((
        (term(matches, "n1")?, term(matches, "d1")?),
        (term(matches, "n2")?, term(matches, "d2")?),
    ))
}
