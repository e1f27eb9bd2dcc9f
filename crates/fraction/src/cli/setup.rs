//! Global setup utilities for CLI initialization
//!
//! Provides setup routines for:
//! - Resolving global flags into a `SetupConfig`
//! - Logging initialization with tracing

use clap::ArgMatches;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::output::OutputFormat;

/// Configuration for CLI setup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupConfig {
    /// Output format (`--json`)
    pub format: OutputFormat,
    /// Whether debug logging was requested (`--verbose`)
    pub verbose: bool,
}

impl SetupConfig {
    /// Read the global flags from parsed arguments.
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            format: OutputFormat::from_json_flag(matches.get_flag("json")),
            verbose: matches.get_flag("verbose"),
        }
    }

    /// Level applied when `RUST_LOG` is unset. `--verbose` raises it to
    /// DEBUG even when `RUST_LOG` is set.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}

/// Build the log filter from `RUST_LOG`-style directives.
///
/// Without directives the filter falls back to [`SetupConfig::log_level`].
/// Unparseable directives are skipped.
#[must_use]
pub fn env_filter(config: &SetupConfig, directives: Option<&str>) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level().into())
        .parse_lossy(directives.unwrap_or_default());
    if config.verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - Environment filter (`RUST_LOG`), falling back to INFO, or DEBUG with `--verbose`
/// - Stderr output (to avoid mixing with stdout)
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing(config: &SetupConfig) -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, directives.as_deref()))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
