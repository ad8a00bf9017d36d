//! Output encoding.
//!
//! This module provides functionality for:
//! - Encoding RGB images to JPEG with a fixed quality
//! - Writing the encoded bytes so that the destination is replaced in one step
//!
//! # Examples
//!
//! ```ignore
//! use beforeafter_core::encode::{encode_jpeg, write_atomic, COMPARISON_QUALITY};
//!
//! let pixels = vec![128u8; 100 * 100 * 3];
//! let jpeg = encode_jpeg(&pixels, 100, 100, COMPARISON_QUALITY).unwrap();
//! write_atomic("out.jpg".as_ref(), &jpeg).unwrap();
//! ```

mod file;
mod jpeg;

pub use file::write_atomic;
pub use jpeg::{encode_jpeg, EncodeError};

/// JPEG quality for single-image crop adjustments.
pub const ADJUST_QUALITY: u8 = 95;

/// JPEG quality for before/after comparison images.
pub const COMPARISON_QUALITY: u8 = 90;
