// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/view/picker.rs
//
// Full-window picker modal: title, instructions, and the image stacked
// under the crosshair overlay.

use cosmic::Element;
use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::iced_widget::{column, row, stack};
use cosmic::widget::{button, container, horizontal_space, text};

use crate::domain::picker::PointerPhase;
use crate::fl;
use crate::ui::widgets::focal_overlay;
use crate::ui::{AppMessage, AppModel};

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let crosshair = model.picker.crosshair().unwrap_or_default();
    let previewing = model.picker.phase() == PointerPhase::Previewing;

    let header = row![
        text::title3(fl!("set-focal-point")),
        horizontal_space(),
        button::standard(fl!("picker-close")).on_press(AppMessage::ClosePicker),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    // Broken images still get a tracking surface; the overlay falls back
    // to its full bounds when no dimensions are known.
    let image: Element<'_, AppMessage> = match &model.image {
        Some(handle) => cosmic::iced::widget::image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text(fl!("image-load-failed")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into(),
    };

    let stage = stack![
        image,
        focal_overlay(crosshair, model.image_dimensions, previewing),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    column![header, text(fl!("picker-instructions")), stage]
        .spacing(8)
        .padding(16)
        .into()
}
