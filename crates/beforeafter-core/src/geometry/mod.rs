//! Dimension arithmetic for offset crops and two-image composition.
//!
//! Everything in this module works on integer sizes only and never touches
//! pixel data, so the crop window, normalization, and scale-to-fit rules can
//! be checked without decoding a single image.
//!
//! # Pipeline Order
//!
//! A comparison is built in this order, each step operating on the output of
//! the previous one:
//! 1. Offset crop of the before image ([`plan_offset_crop`])
//! 2. Normalization to a shared dimension ([`normalize`])
//! 3. Scale-to-fit against the maximum extent ([`scale_to_fit`])
//! 4. Composition onto a white canvas ([`canvas_size`], [`paste_origin`])
//!
//! Step 3 resizes the images produced by steps 1 and 2. Going back to the
//! source images at that point would drop the crop.

mod fit;
mod offset;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fit::{canvas_size, normalize, paste_origin, scale_to_fit};
pub use offset::{plan_offset_crop, CropRect, Offset, OffsetCrop, DEFAULT_STRETCH, OFFSET_LIMIT};

/// Errors raised by geometry validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Offset outside the accepted percentage range.
    #[error("Offset {0} is out of range (expected -100 to 100)")]
    OffsetOutOfRange(i32),

    /// Width or height is zero.
    #[error("Invalid dimensions: {width}x{height}")]
    EmptySize { width: u32, height: u32 },
}

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Reject zero-sized dimensions.
    pub fn ensure_non_empty(self) -> Result<Self, GeometryError> {
        if self.is_empty() {
            return Err(GeometryError::EmptySize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis along which two images are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Side by side, first image on the left.
    #[default]
    Horizontal,
    /// Stacked, first image on top.
    Vertical,
}

impl Axis {
    /// Extent of `size` along the composition axis.
    #[inline]
    pub fn along(self, size: Size) -> u32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` perpendicular to the composition axis.
    #[inline]
    pub fn across(self, size: Size) -> u32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Build a size from extents expressed relative to this axis.
    #[inline]
    pub fn size(self, along: u32, across: u32) -> Size {
        match self {
            Axis::Horizontal => Size::new(along, across),
            Axis::Vertical => Size::new(across, along),
        }
    }
}
