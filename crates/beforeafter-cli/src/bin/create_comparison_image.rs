//! Side-by-side before/after comparison, no text overlays.

use std::path::PathBuf;

use anyhow::{Context, Result};
use beforeafter_cli::{init_tracing, parse_offset, print_report, OFFSET_HELP};
use beforeafter_core::{compare, CompareOptions, Offset, RasterBackend};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Create a side-by-side before/after comparison image (max width 1200px)"
)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Before image path (placed on the left)
    before: PathBuf,

    /// After image path (placed on the right)
    after: PathBuf,

    /// Output JPEG path
    output: PathBuf,

    #[arg(default_value = "0", value_parser = parse_offset, help = OFFSET_HELP)]
    offset: Offset,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let options = CompareOptions::horizontal().with_offset(args.offset);
    let outcome = compare(
        &RasterBackend::default(),
        &args.before,
        &args.after,
        &args.output,
        &options,
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
