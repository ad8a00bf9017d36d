//! End-to-end pipelines: load, optional offset crop, resize, scale-to-fit,
//! compose, save.
//!
//! Each pipeline is a single linear pass generic over [`ImageBackend`]. No
//! intermediate state is persisted; the only side effect is the output file.

mod adjust;
mod compare;
#[cfg(test)]
pub(crate) mod fake;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::geometry::{GeometryError, Size};

pub use adjust::{adjust_single, offset_crop};
pub use compare::{compare, compose_pair};

/// Errors from any stage of a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Writing the output file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a pipeline wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Output file path.
    pub output: PathBuf,
    /// Final image dimensions.
    pub size: Size,
    /// Size of the written file in bytes.
    pub bytes: u64,
}

impl Outcome {
    /// File size in kilobytes (1024 bytes).
    pub fn size_kb(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}
