pub mod handlers;
pub mod setup;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("fraction")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonical fractions: demo and calculator")
        .subcommand_required(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit JSON Lines instead of text"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug events to stderr"),
        )
        .subcommand(cmd_demo())
        .subcommand(cmd_of())
        .subcommand(cmd_binary("add", "Add two fractions"))
        .subcommand(cmd_binary("mul", "Multiply two fractions"))
        .subcommand(cmd_binary("compare", "Compare two fractions"))
        .subcommand(cmd_get())
}

fn term(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i32))
        .help(help)
}

fn cmd_demo() -> Command {
    Command::new("demo").about("Run every fraction operation with literal inputs")
}

fn cmd_of() -> Command {
    Command::new("of")
        .about("Build a fraction in canonical form")
        .arg(term("numerator", "Numerator"))
        .arg(term("denominator", "Denominator (non-zero)"))
}

fn cmd_binary(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(term("n1", "Left numerator"))
        .arg(term("d1", "Left denominator"))
        .arg(term("n2", "Right numerator"))
        .arg(term("d2", "Right denominator"))
}

fn cmd_get() -> Command {
    Command::new("get")
        .about("Index into a fraction (0 = numerator, 1 = denominator)")
        .arg(term("numerator", "Numerator"))
        .arg(term("denominator", "Denominator (non-zero)"))
        .arg(
            Arg::new("index")
                .required(true)
                .value_parser(value_parser!(usize))
                .help("Index"),
        )
}
