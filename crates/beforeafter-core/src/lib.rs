//! Before/After Core - geometry and pipelines for comparison images
//!
//! This crate provides the vertical re-crop and two-image composition used to
//! prepare before/after marketing images: offset-to-crop mapping, dimension
//! normalization, scale-to-fit, and white-canvas composition, along with the
//! decode, resize, and JPEG encode steps around them.

pub mod backend;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod pipeline;
pub mod transform;

use serde::{Deserialize, Serialize};

pub use backend::{ImageBackend, RasterBackend};
pub use geometry::{Axis, CropRect, Offset, Size};
pub use pipeline::{adjust_single, compare, Outcome, PipelineError};

/// Default bound on the combined extent of a comparison along its axis.
pub const DEFAULT_MAX_EXTENT: u32 = 1200;

/// Settings for a single-image crop adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustOptions {
    /// Vertical crop offset (-100 to 100, 0 = unchanged)
    pub offset: Offset,
    /// JPEG output quality (1 to 100)
    pub quality: u8,
    /// Height multiplier of the intermediate image
    pub stretch: f64,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            offset: Offset::ZERO,
            quality: encode::ADJUST_QUALITY,
            stretch: geometry::DEFAULT_STRETCH,
        }
    }
}

impl AdjustOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_stretch(mut self, stretch: f64) -> Self {
        self.stretch = stretch;
        self
    }
}

/// Settings for a before/after comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Composition axis (side by side or stacked)
    pub axis: Axis,
    /// Vertical crop offset for the before image (-100 to 100, 0 = no crop)
    pub offset: Offset,
    /// Maximum combined extent along the axis, in pixels
    pub max_extent: u32,
    /// JPEG output quality (1 to 100)
    pub quality: u8,
    /// Height multiplier of the before image's intermediate
    pub stretch: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::new(Axis::Horizontal)
    }
}

impl CompareOptions {
    /// Defaults for the given axis.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            offset: Offset::ZERO,
            max_extent: DEFAULT_MAX_EXTENT,
            quality: encode::COMPARISON_QUALITY,
            stretch: geometry::DEFAULT_STRETCH,
        }
    }

    /// Side by side, limited to 1200 px total width.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Stacked, limited to 1200 px total height.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_max_extent(mut self, max_extent: u32) -> Self {
        self.max_extent = max_extent;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_stretch(mut self, stretch: f64) -> Self {
        self.stretch = stretch;
        self
    }
}
