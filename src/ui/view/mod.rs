// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/view/mod.rs
//
// View module root: canvas, picker modal, settings panel.

pub mod canvas;
pub mod picker;
pub mod settings;

use cosmic::Element;

use crate::config::AppConfig;
use crate::ui::{AppMessage, AppModel};

/// Render the main window content. An open picker replaces the canvas
/// entirely, like the original modal hiding the host UI beneath it.
pub fn view<'a>(model: &'a AppModel, _config: &'a AppConfig) -> Element<'a, AppMessage> {
    if model.picker.is_open() {
        picker::view(model)
    } else {
        canvas::view(model)
    }
}
