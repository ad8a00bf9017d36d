//! Offset-to-crop mapping.
//!
//! An offset crop first stretches the source so it is [`DEFAULT_STRETCH`]
//! times taller than the crop window, then takes a window of the requested
//! size out of that intermediate. The window is always centered horizontally.
//! Vertically it starts centered and the offset shifts it by a percentage of
//! the spare height:
//!
//! - `0` keeps the window centered
//! - positive values move it down, showing more of the center and bottom
//! - negative values move it up, showing more of the top
//!
//! Any offset is accepted here; the window is clamped to the intermediate.
//! Callers that want the `-100..=100` contract use [`Offset::checked`].

use serde::{Deserialize, Serialize};

use super::{GeometryError, Size};

/// Height multiplier applied to the source before an offset crop.
pub const DEFAULT_STRETCH: f64 = 1.3;

/// Largest accepted magnitude for [`Offset::checked`].
pub const OFFSET_LIMIT: i32 = 100;

/// Vertical crop bias as a percentage of the spare height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Offset(i32);

impl Offset {
    pub const ZERO: Offset = Offset(0);

    /// Wrap any value without validation.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Wrap a value, rejecting anything outside `-100..=100`.
    pub fn checked(value: i32) -> Result<Self, GeometryError> {
        if !(-OFFSET_LIMIT..=OFFSET_LIMIT).contains(&value) {
            return Err(GeometryError::OffsetOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for Offset {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pixel bounds of a crop window, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Resolved offset crop: the size to stretch the source to, and the window
/// to cut out of the stretched image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetCrop {
    /// Size of the stretched intermediate image.
    pub intermediate: Size,
    /// Crop window within the intermediate.
    pub rect: CropRect,
}

impl OffsetCrop {
    /// Spare rows above and below the window, i.e. the largest valid `top`.
    pub fn max_crop_top(&self) -> u32 {
        self.intermediate.height - self.rect.height()
    }
}

/// Compute the stretch-then-crop plan for `source`.
///
/// `crop` is the window to cut out. For a plain adjustment it equals the
/// source size; for a comparison it is the before image's normalized size.
/// The intermediate height is `floor(crop.height * stretch)` and its width
/// is `floor(height * source.width / source.height)`, computed in integers.
///
/// The offset shift is `max_crop_top * offset / 100` truncated toward zero,
/// added to the centered position and clamped into `0..=max_crop_top`.
pub fn plan_offset_crop(source: Size, crop: Size, offset: Offset, stretch: f64) -> OffsetCrop {
    debug_assert!(!source.is_empty(), "source size must be non-zero");

    let temp_height = ((f64::from(crop.height) * stretch) as u32).max(crop.height);
    let temp_width = (u64::from(temp_height) * u64::from(source.width)
        / u64::from(source.height.max(1)))
    .max(1) as u32;

    let max_crop_top = temp_height - crop.height;
    let center_crop_top = max_crop_top / 2;
    let offset_pixels = i64::from(max_crop_top) * i64::from(offset.get()) / 100;
    let crop_top =
        (i64::from(center_crop_top) + offset_pixels).clamp(0, i64::from(max_crop_top)) as u32;

    let crop_left = temp_width.saturating_sub(crop.width) / 2;
    let crop_right = crop_left.saturating_add(crop.width).min(temp_width);

    OffsetCrop {
        intermediate: Size::new(temp_width, temp_height),
        rect: CropRect::new(crop_left, crop_top, crop_right, crop_top + crop.height),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
