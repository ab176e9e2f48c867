// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/view/settings.rs
//
// Settings panel (context drawer): asset properties and the focal-point
// field block for eligible assets.

use cosmic::Element;
use cosmic::iced_widget::column;
use cosmic::widget::{button, text};

use crate::config::AppConfig;
use crate::fl;
use crate::ui::{AppMessage, AppModel};

pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    let Some(asset) = model.current_asset() else {
        return column![text(fl!("no-asset"))].spacing(12).into();
    };

    let mut panel = column![
        text::title4(fl!("properties")),
        text(format!("{}: {}", fl!("file-label"), asset.display_name())),
        text(format!("{}: {}", fl!("mime-label"), asset.mime)),
    ]
    .spacing(12);

    // Only allow-listed types get the focal-point control at all; for
    // everything else the block simply is not rendered.
    if asset.is_eligible(&config.focal_mime_types) {
        let preview = model
            .binding
            .preview_text()
            .unwrap_or_else(|| fl!("no-focal-point"));

        panel = panel
            .push(text::title4(fl!("focal-point")))
            .push(button::suggested(fl!("set-focal-point")).on_press(AppMessage::OpenPicker))
            .push(text(preview));

        if model.binding.clear_visible() {
            panel = panel
                .push(button::link(fl!("clear-focal-point")).on_press(AppMessage::ClearFocalPoint));
        }

        panel = panel.push(button::standard(fl!("save")).on_press(AppMessage::SaveFields));
    }

    // Error line doubles as its own dismiss control.
    if let Some(error) = &model.error {
        panel = panel.push(button::link(error.clone()).on_press(AppMessage::ClearError));
    }

    panel.into()
}
