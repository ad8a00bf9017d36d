//! Size-only backend that records every operation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::backend::ImageBackend;
use crate::decode::DecodeError;
use crate::geometry::{CropRect, Size};

use super::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Load(PathBuf),
    Resize { from: Size, to: Size },
    Crop { from: Size, rect: CropRect },
    Canvas(Size),
    Paste { image: Size, origin: (u32, u32) },
    Save { size: Size, quality: u8 },
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    inputs: HashMap<PathBuf, Size>,
    ops: RefCell<Vec<Op>>,
}

impl FakeBackend {
    pub fn with_input(mut self, path: &str, width: u32, height: u32) -> Self {
        self.inputs
            .insert(PathBuf::from(path), Size::new(width, height));
        self
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    fn record(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

impl ImageBackend for FakeBackend {
    type Image = Size;

    fn load(&self, path: &Path) -> Result<Size, PipelineError> {
        self.record(Op::Load(path.to_path_buf()));
        self.inputs
            .get(path)
            .copied()
            .ok_or_else(|| DecodeError::IoError(path.display().to_string()).into())
    }

    fn dimensions(&self, image: &Size) -> Size {
        *image
    }

    fn resize(&self, image: &Size, size: Size) -> Result<Size, PipelineError> {
        self.record(Op::Resize {
            from: *image,
            to: size,
        });
        Ok(size)
    }

    fn crop(&self, image: &Size, rect: CropRect) -> Result<Size, PipelineError> {
        self.record(Op::Crop { from: *image, rect });
        Ok(rect.size())
    }

    fn canvas(&self, size: Size) -> Result<Size, PipelineError> {
        self.record(Op::Canvas(size));
        Ok(size)
    }

    fn paste(
        &self,
        _canvas: &mut Size,
        image: &Size,
        origin: (u32, u32),
    ) -> Result<(), PipelineError> {
        self.record(Op::Paste {
            image: *image,
            origin,
        });
        Ok(())
    }

    fn save(&self, image: &Size, _path: &Path, quality: u8) -> Result<u64, PipelineError> {
        self.record(Op::Save {
            size: *image,
            quality,
        });
        Ok(u64::from(image.width) * u64::from(image.height))
    }
}
