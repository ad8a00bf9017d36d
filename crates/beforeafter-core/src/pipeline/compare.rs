//! Before/after comparison composition.

use std::path::Path;

use tracing::debug;

use crate::backend::ImageBackend;
use crate::geometry::{canvas_size, normalize, paste_origin, scale_to_fit};
use crate::CompareOptions;

use super::{offset_crop, Outcome, PipelineError};

/// Compose `before` and `after` along `options.axis` and save to `output`.
pub fn compare<B: ImageBackend>(
    backend: &B,
    before: &Path,
    after: &Path,
    output: &Path,
    options: &CompareOptions,
) -> Result<Outcome, PipelineError> {
    let before = backend.load(before)?;
    let after = backend.load(after)?;

    let composed = compose_pair(backend, &before, &after, options)?;
    let size = backend.dimensions(&composed);
    let bytes = backend.save(&composed, output, options.quality)?;

    Ok(Outcome {
        output: output.to_path_buf(),
        size,
        bytes,
    })
}

/// Build the comparison canvas from two loaded images.
///
/// 1. Normalize both to the smaller cross-axis extent. The before image is
///    offset-cropped to its normalized size first when the offset is non-zero.
/// 2. If the combined extent exceeds `options.max_extent`, shrink the images
///    from step 1 uniformly.
/// 3. Paste before at the origin and after directly behind it on a white
///    canvas.
pub fn compose_pair<B: ImageBackend>(
    backend: &B,
    before: &B::Image,
    after: &B::Image,
    options: &CompareOptions,
) -> Result<B::Image, PipelineError> {
    let axis = options.axis;
    let (before_size, after_size) =
        normalize(backend.dimensions(before), backend.dimensions(after), axis);
    debug!(?axis, %before_size, %after_size, "Normalized comparison pair");

    let mut before_fit = if options.offset.is_zero() {
        backend.resize(before, before_size)?
    } else {
        let cropped = offset_crop(backend, before, before_size, options.offset, options.stretch)?;
        backend.resize(&cropped, before_size)?
    };
    let mut after_fit = backend.resize(after, after_size)?;

    if let Some((before_scaled, after_scaled)) =
        scale_to_fit(before_size, after_size, axis, options.max_extent)
    {
        debug!(
            max_extent = options.max_extent,
            %before_scaled,
            %after_scaled,
            "Scaling comparison to fit"
        );
        before_fit = backend.resize(&before_fit, before_scaled)?;
        after_fit = backend.resize(&after_fit, after_scaled)?;
    }

    let first = backend.dimensions(&before_fit);
    let second = backend.dimensions(&after_fit);
    let mut canvas = backend.canvas(canvas_size(first, second, axis))?;
    backend.paste(&mut canvas, &before_fit, (0, 0))?;
    backend.paste(&mut canvas, &after_fit, paste_origin(first, axis))?;

    Ok(canvas)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
