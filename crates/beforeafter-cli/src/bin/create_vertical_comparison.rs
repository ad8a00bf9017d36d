//! Stacked before/after comparison: before on top, after below.

use std::path::PathBuf;

use anyhow::{Context, Result};
use beforeafter_cli::{init_tracing, print_report};
use beforeafter_core::{compare, CompareOptions, RasterBackend};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Create a stacked before/after comparison image (max height 1200px)"
)]
struct Args {
    /// Before image path (placed on top)
    before: PathBuf,

    /// After image path (placed below)
    after: PathBuf,

    /// Output JPEG path
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let outcome = compare(
        &RasterBackend::default(),
        &args.before,
        &args.after,
        &args.output,
        &CompareOptions::vertical(),
    )
    .with_context(|| {
        format!(
            "Failed to compose {} and {}",
            args.before.display(),
            args.after.display()
        )
    })?;

    print_report("Created", &outcome);
    Ok(())
}
