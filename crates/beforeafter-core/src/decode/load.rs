//! Image decoding from bytes and from disk.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::debug;

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes, guessing the format from its content.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes
///
/// # Returns
///
/// A `DecodedImage` with RGB pixel data. Alpha is dropped.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        });
    }

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns `DecodeError::IoError` if the file cannot be read, otherwise the
/// same errors as [`decode_image`].
pub fn load_image(path: &Path) -> Result<DecodedImage, DecodeError> {
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;

    let image = decode_image(&bytes)?;
    debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Loaded image"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 77]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let bytes = png_bytes(12, 8);
        let img = decode_image(&bytes).unwrap();

        assert_eq!(img.width, 12);
        assert_eq!(img.height, 8);
        assert_eq!(img.pixels.len(), 12 * 8 * 3);
        assert_eq!(img.pixel(3, 5), Some([3, 5, 77]));
    }

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();

        let decoded = decode_image(buffer.get_ref()).unwrap();
        assert_eq!(decoded.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(decoded.pixels.len(), 4 * 4 * 3);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(20, 20);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("beforeafter-missing-input.png");
        let result = load_image(&path);
        assert!(matches!(result, Err(DecodeError::IoError(_))));
    }
}
