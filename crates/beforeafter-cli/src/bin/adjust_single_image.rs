//! Re-crop a single image vertically, keeping its dimensions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use beforeafter_cli::{init_tracing, parse_offset, print_report, OFFSET_HELP};
use beforeafter_core::{adjust_single, AdjustOptions, Offset, RasterBackend};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Adjust the vertical crop position of a single image")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Input image path
    input: PathBuf,

    /// Output JPEG path
    output: PathBuf,

    #[arg(default_value = "0", value_parser = parse_offset, help = OFFSET_HELP)]
    offset: Offset,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let options = AdjustOptions::default().with_offset(args.offset);
    let outcome = adjust_single(&RasterBackend::default(), &args.input, &args.output, &options)
        .with_context(|| {
            format!(
                "Failed to adjust {} -> {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    let headline = if args.offset.is_zero() {
        "No adjustment - copied".to_string()
    } else {
        format!("Adjusted with offset {}", args.offset)
    };
    print_report(&headline, &outcome);
    Ok(())
}
