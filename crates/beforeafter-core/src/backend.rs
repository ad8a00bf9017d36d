//! Imaging capability interface used by the pipelines.
//!
//! The pipelines only need six operations from an imaging backend. Keeping
//! them behind [`ImageBackend`] lets the offset and scale-to-fit arithmetic
//! run against any implementation, including ones that only track sizes.

use std::path::Path;

use tracing::info;

use crate::decode::{self, DecodedImage, FilterType};
use crate::encode;
use crate::geometry::{CropRect, Size};
use crate::pipeline::PipelineError;
use crate::transform;

/// Load, transform, and save images.
pub trait ImageBackend {
    /// Backend-specific image handle.
    type Image;

    /// Decode the image stored at `path`.
    fn load(&self, path: &Path) -> Result<Self::Image, PipelineError>;

    /// Current dimensions of `image`.
    fn dimensions(&self, image: &Self::Image) -> Size;

    /// Resample `image` to exactly `size`.
    fn resize(&self, image: &Self::Image, size: Size) -> Result<Self::Image, PipelineError>;

    /// Cut `rect` out of `image`.
    fn crop(&self, image: &Self::Image, rect: CropRect) -> Result<Self::Image, PipelineError>;

    /// Allocate a solid-white image of `size`.
    fn canvas(&self, size: Size) -> Result<Self::Image, PipelineError>;

    /// Copy `image` onto `canvas` with its top-left corner at `origin`.
    fn paste(
        &self,
        canvas: &mut Self::Image,
        image: &Self::Image,
        origin: (u32, u32),
    ) -> Result<(), PipelineError>;

    /// Encode `image` as JPEG at `quality` and write it to `path`.
    ///
    /// Returns the size of the written file in bytes.
    fn save(&self, image: &Self::Image, path: &Path, quality: u8) -> Result<u64, PipelineError>;
}

/// [`ImageBackend`] over in-memory RGB buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterBackend {
    filter: FilterType,
}

impl RasterBackend {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl ImageBackend for RasterBackend {
    type Image = DecodedImage;

    fn load(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
        Ok(decode::load_image(path)?)
    }

    fn dimensions(&self, image: &DecodedImage) -> Size {
        image.size()
    }

    fn resize(&self, image: &DecodedImage, size: Size) -> Result<DecodedImage, PipelineError> {
        Ok(decode::resize(image, size.width, size.height, self.filter)?)
    }

    fn crop(&self, image: &DecodedImage, rect: CropRect) -> Result<DecodedImage, PipelineError> {
        Ok(transform::crop(image, rect))
    }

    fn canvas(&self, size: Size) -> Result<DecodedImage, PipelineError> {
        let size = size.ensure_non_empty()?;
        Ok(transform::white_canvas(size.width, size.height))
    }

    fn paste(
        &self,
        canvas: &mut DecodedImage,
        image: &DecodedImage,
        origin: (u32, u32),
    ) -> Result<(), PipelineError> {
        transform::paste(canvas, image, origin.0, origin.1);
        Ok(())
    }

    fn save(&self, image: &DecodedImage, path: &Path, quality: u8) -> Result<u64, PipelineError> {
        let jpeg = encode::encode_jpeg(&image.pixels, image.width, image.height, quality)?;
        let written = encode::write_atomic(path, &jpeg).map_err(|source| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            quality,
            bytes = written,
            "Saved image"
        );
        Ok(written)
    }
}
