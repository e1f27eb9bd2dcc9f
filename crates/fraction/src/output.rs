//! Output formatting for the fraction CLI.
//!
//! Text output is one human-readable line per record. JSON output is JSONL:
//! each line is a complete, parseable JSON object.

use std::io::Write;

use serde::{Deserialize, Serialize};

/// Output format selected by the global `--json` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `label: value` lines
    #[default]
    Text,
    /// JSON Lines
    Json,
}

impl OutputFormat {
    /// Convert the `--json` flag to an `OutputFormat`.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Something the CLI can print in either format.
pub trait Render: Serialize {
    /// The text-mode line(s), without a trailing newline.
    fn to_text(&self) -> String;
}

/// Render `record` to `writer` in the given format.
///
/// # Errors
///
/// Returns an error if JSON serialization or the write fails.
pub fn emit<W: Write, R: Render>(
    writer: &mut W,
    format: OutputFormat,
    record: &R,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", record.to_text())?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(record)?)?,
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    success: bool,
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: &'a str,
}

/// Print an error, respecting the output format.
///
/// JSON errors go to stdout so a consumer reading JSONL sees them in-stream;
/// text errors go to stderr.
pub fn output_error(format: OutputFormat, code: &str, message: &str) {
    match format {
        OutputFormat::Json => {
            let error_output = ErrorOutput {
                success: false,
                error: ErrorDetail { code, message },
            };
            match serde_json::to_string(&error_output) {
                Ok(json_str) => println!("{json_str}"),
                Err(_) => eprintln!("Error: {message}"),
            }
        }
        OutputFormat::Text => eprintln!("Error: {message}"),
    }
}
