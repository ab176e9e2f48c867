// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/view/canvas.rs
//
// Render the center canvas area with the current asset.

use cosmic::Element;
use cosmic::iced::{ContentFit, Length};
use cosmic::widget::{container, text};

use crate::fl;
use crate::ui::{AppMessage, AppModel};

/// Render the center canvas area with the current asset.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    if model.current_asset().is_some() {
        match &model.image {
            Some(handle) => container(
                cosmic::iced::widget::image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => container(text(fl!("image-load-failed")))
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill)
                .into(),
        }
    } else {
        container(text(fl!("no-asset")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }
}
