// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/model.rs
//
// Application state.

use crate::domain::{FieldBinding, ImageAsset, PickerSession};
use crate::media::ImageHandle;

pub struct AppModel {
    // Library.
    pub assets: Vec<ImageAsset>,
    pub current_index: Option<usize>,

    // Current asset display. `None` when the image failed to decode; the
    // picker still opens against a placeholder in that case.
    pub image: Option<ImageHandle>,
    pub image_dimensions: Option<(u32, u32)>,

    // Focal-point editing.
    pub binding: FieldBinding,
    pub picker: PickerSession,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            current_index: None,
            image: None,
            image_dimensions: None,
            binding: FieldBinding::default(),
            picker: PickerSession::default(),
            error: None,
        }
    }

    pub fn current_asset(&self) -> Option<&ImageAsset> {
        self.current_index.and_then(|index| self.assets.get(index))
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
