//! Pixel-level crop and composition.
//!
//! Both operations copy whole rows between RGB buffers. They work with pixel
//! coordinates produced by [`crate::geometry`]; out-of-range rectangles and
//! paste positions are clipped rather than rejected.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Right and bottom bounds are exclusive

mod compose;
mod crop;

pub use compose::{paste, white_canvas, WHITE};
pub use crop::crop;
