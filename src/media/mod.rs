// SPDX-License-Identifier: GPL-3.0-or-later
// src/media/mod.rs
//
// Media loading: decoded raster images and their display handles.

pub mod raster;

pub use raster::RasterImage;

/// Image handle type used for rendering.
pub type ImageHandle = cosmic::iced::widget::image::Handle;
