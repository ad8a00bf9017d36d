//! Rectangular cropping in pixel coordinates.

use crate::decode::DecodedImage;
use crate::geometry::CropRect;

/// Copy the pixels inside `rect` into a new image.
///
/// # Behavior
///
/// - Bounds beyond the image are clamped to its edges
/// - Minimum output dimension is 1x1 pixels
/// - A rect covering the whole image returns a copy of the original
pub fn crop(image: &DecodedImage, rect: CropRect) -> DecodedImage {
    // Fast path: full crop returns a clone
    let covers_image = rect.left == 0
        && rect.top == 0
        && rect.right >= image.width
        && rect.bottom >= image.height;
    if image.is_empty() || covers_image {
        return image.clone();
    }

    let left = rect.left.min(image.width.saturating_sub(1));
    let top = rect.top.min(image.height.saturating_sub(1));
    let right = rect.right.min(image.width).max(left + 1);
    let bottom = rect.bottom.min(image.height).max(top + 1);

    let out_width = right - left;
    let out_height = bottom - top;
    let src_stride = image.width as usize * 3;
    let row_bytes = out_width as usize * 3;

    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for y in top..bottom {
        let start = y as usize * src_stride + left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v); // R
                pixels.push(v); // G
                pixels.push(v); // B
            }
        }
        DecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(100, 100);
        let result = crop(&img, CropRect::new(0, 0, 100, 100));

        assert_eq!(result, img);
    }

    #[test]
    fn test_window_crop() {
        let img = test_image(10, 10);
        let result = crop(&img, CropRect::new(2, 3, 8, 7));

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 4);
        // Value at (2, 3) = 3 * 10 + 2
        assert_eq!(result.pixels[0], 32);
        // Value at (7, 6) = 6 * 10 + 7
        assert_eq!(result.pixel(5, 3), Some([67, 67, 67]));
    }

    #[test]
    fn test_vertical_band() {
        // The shape an offset crop produces: full-width band lower in the image
        let img = test_image(13, 20);
        let result = crop(&img, CropRect::new(0, 6, 13, 16));

        assert_eq!(result.width, 13);
        assert_eq!(result.height, 10);
        assert_eq!(result.pixel(0, 0), img.pixel(0, 6));
        assert_eq!(result.pixel(12, 9), img.pixel(12, 15));
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let img = test_image(10, 10);
        let result = crop(&img, CropRect::new(8, 8, 20, 20));

        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
        assert_eq!(result.pixels[0], 88);
    }

    #[test]
    fn test_crop_start_outside_image() {
        let img = test_image(10, 10);
        let result = crop(&img, CropRect::new(50, 50, 60, 60));

        // Clamped to the last pixel
        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        assert_eq!(result.pixels[0], 99);
    }

    #[test]
    fn test_crop_empty_rect_produces_minimum() {
        let img = test_image(10, 10);
        let result = crop(&img, CropRect::new(4, 4, 4, 4));

        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
