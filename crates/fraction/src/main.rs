//! Fraction CLI - demo and calculator for canonical fractions
//!
//! Binary name: `fraction`

use std::process::ExitCode;

use fraction::{
    cli::{build_cli, handlers::dispatch, setup},
    output::output_error,
};
use fraction_core::FractionError;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    let config = setup::SetupConfig::from_matches(&matches);

    if let Err(e) = setup::init_tracing(&config) {
        eprintln!("Warning: {e}");
    }

    let mut stdout = std::io::stdout().lock();
    match dispatch(&matches, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<FractionError>()
                .map_or("ERROR", FractionError::code);
            tracing::debug!(code, "command failed");
            output_error(config.format, code, &format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
