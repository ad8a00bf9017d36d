//! Single-image vertical crop adjustment.

use std::path::Path;

use tracing::debug;

use crate::backend::ImageBackend;
use crate::geometry::{plan_offset_crop, Offset, Size};
use crate::AdjustOptions;

use super::{Outcome, PipelineError};

/// Re-crop `input` vertically by `options.offset` and save it to `output`.
///
/// With a zero offset the image is re-encoded unchanged. Otherwise it is
/// stretched, cropped back to its own size, and resampled so the output has
/// exactly the input's dimensions.
pub fn adjust_single<B: ImageBackend>(
    backend: &B,
    input: &Path,
    output: &Path,
    options: &AdjustOptions,
) -> Result<Outcome, PipelineError> {
    let source = backend.load(input)?;
    let original = backend.dimensions(&source);

    let result = if options.offset.is_zero() {
        debug!(%original, "Zero offset, passing image through");
        source
    } else {
        let cropped = offset_crop(backend, &source, original, options.offset, options.stretch)?;
        backend.resize(&cropped, original)?
    };

    let size = backend.dimensions(&result);
    let bytes = backend.save(&result, output, options.quality)?;

    Ok(Outcome {
        output: output.to_path_buf(),
        size,
        bytes,
    })
}

/// Stretch `image` and cut a `window`-sized region out of it at `offset`.
///
/// The returned image is the raw crop; callers resize it to their final
/// dimensions.
pub fn offset_crop<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    window: Size,
    offset: Offset,
    stretch: f64,
) -> Result<B::Image, PipelineError> {
    let source = backend.dimensions(image);
    let plan = plan_offset_crop(source, window, offset, stretch);
    debug!(
        %source,
        intermediate = %plan.intermediate,
        %offset,
        crop_top = plan.rect.top,
        max_crop_top = plan.max_crop_top(),
        "Planned offset crop"
    );

    let stretched = backend.resize(image, plan.intermediate)?;
    backend.crop(&stretched, plan.rect)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
