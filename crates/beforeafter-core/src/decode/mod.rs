//! Image loading and resampling.
//!
//! This module provides functionality for:
//! - Decoding any format the `image` crate is built with (JPEG, PNG, WebP)
//! - Loading images from disk
//! - Resizing to exact dimensions with a selectable filter
//!
//! All images are converted to 8-bit RGB on load. EXIF orientation is not
//! applied; pixels are used in stored order.
//!
//! # Examples
//!
//! ```ignore
//! use beforeafter_core::decode::{load_image, resize, FilterType};
//!
//! let image = load_image("before.jpg".as_ref()).unwrap();
//! let half = resize(&image, image.width / 2, image.height / 2, FilterType::Lanczos3).unwrap();
//! println!("Resized to {}x{}", half.width, half.height);
//! ```

mod load;
mod resize;
mod types;

pub use load::{decode_image, load_image};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType};
