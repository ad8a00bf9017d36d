//! Canvas allocation and pasting.

use crate::decode::DecodedImage;

/// Background color of composition canvases.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Allocate a solid-white canvas.
pub fn white_canvas(width: u32, height: u32) -> DecodedImage {
    DecodedImage::filled(width, height, WHITE)
}

/// Copy `image` onto `canvas` with its top-left corner at (x, y).
///
/// Parts of `image` falling outside the canvas are dropped.
pub fn paste(canvas: &mut DecodedImage, image: &DecodedImage, x: u32, y: u32) {
    if x >= canvas.width || y >= canvas.height {
        return;
    }

    let visible_width = image.width.min(canvas.width - x) as usize;
    let visible_height = image.height.min(canvas.height - y);
    let src_stride = image.width as usize * 3;
    let dst_stride = canvas.width as usize * 3;
    let row_bytes = visible_width * 3;

    for row in 0..visible_height {
        let src = row as usize * src_stride;
        let dst = (y + row) as usize * dst_stride + x as usize * 3;
        canvas.pixels[dst..dst + row_bytes].copy_from_slice(&image.pixels[src..src + row_bytes]);
    }
}
