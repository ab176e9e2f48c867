// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use crate::domain::TrackingArea;
use crate::ui::app::ContextPage;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File / navigation.
    OpenPath(PathBuf),
    NextAsset,
    PrevAsset,

    // Picker lifecycle.
    OpenPicker,
    ClosePicker,

    // Pointer events from the overlay widget.
    PickerPointerMoved {
        x: f32,
        y: f32,
        area: TrackingArea,
    },
    PickerPointerLeft,
    PickerCommit {
        x: f32,
        y: f32,
        area: TrackingArea,
    },

    // Field actions.
    ClearFocalPoint,
    SaveFields,

    // Panels.
    ToggleContextPage(ContextPage),

    // Errors.
    ClearError,
}
