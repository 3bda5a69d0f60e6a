//! Filesystem image reader.

use std::path::Path;

use image::DynamicImage;

use classipix_core::error::{Error, Result};
use classipix_core::pipeline::ImageReader;

/// Reads images from the local filesystem via the `image` crate.
///
/// Supported formats are whatever the decoder natively handles; an
/// unreadable path or corrupt file surfaces as [`Error::Load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageReader;

impl ImageReader for FsImageReader {
    fn read(&self, path: &Path) -> Result<DynamicImage> {
        image::open(path).map_err(|e| Error::Load(format!("{}: {e}", path.display())))
    }
}
