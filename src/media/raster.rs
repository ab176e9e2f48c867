// SPDX-License-Identifier: GPL-3.0-or-later
// src/media/raster.rs

use std::path::Path;

use image::{GenericImageView, ImageReader};

use super::ImageHandle;

/// A decoded raster image ready for display.
pub struct RasterImage {
    /// Cached handle for rendering.
    pub handle: ImageHandle,
    /// Native pixel dimensions (width, height).
    pub dimensions: (u32, u32),
}

impl RasterImage {
    /// Load and decode a raster image from disk.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let decoded = ImageReader::open(path)?.decode()?;
        let dimensions = decoded.dimensions();

        let rgba = decoded.to_rgba8();
        let (w, h) = dimensions;
        let handle = ImageHandle::from_rgba(w, h, rgba.into_raw());

        Ok(Self { handle, dimensions })
    }
}
