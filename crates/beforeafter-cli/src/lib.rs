//! Shared plumbing for the before/after command-line tools.
//!
//! Each binary parses its own arguments; this crate holds logging setup,
//! offset parsing, and the console report they have in common.

use beforeafter_core::geometry::{Offset, OFFSET_LIMIT};
use beforeafter_core::Outcome;
use tracing_subscriber::EnvFilter;

/// Help text describing the offset argument.
pub const OFFSET_HELP: &str = "Vertical crop offset (-100 to 100). \
Positive = show more center/bottom (crop from top), \
negative = show more top (crop from bottom)";

/// Initialise stderr logging, `warn` unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// clap value parser for offsets: an integer in `-100..=100`.
pub fn parse_offset(value: &str) -> Result<Offset, String> {
    let raw: i32 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not an integer"))?;
    Offset::checked(raw).map_err(|_| format!("must be between -{OFFSET_LIMIT} and {OFFSET_LIMIT}"))
}

/// Console lines describing a finished run.
pub fn report_lines(headline: &str, outcome: &Outcome) -> Vec<String> {
    vec![
        format!("{}: {}", headline, outcome.output.display()),
        format!("Dimensions: {}", outcome.size),
        format!("File size: {:.1} KB", outcome.size_kb()),
    ]
}

/// Print [`report_lines`] to stdout.
pub fn print_report(headline: &str, outcome: &Outcome) {
    for line in report_lines(headline, outcome) {
        println!("{line}");
    }
}
