// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/focal_overlay.rs
//
// Focal-point overlay: crosshair guide lines over the displayed image,
// publishing pointer events for the picker session.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
    },
};

use crate::domain::{FocalPoint, TrackingArea};
use crate::ui::AppMessage;

const LINE_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);
const LINE_WIDTH: f32 = 1.0;
const BORDER_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);
const BORDER_WIDTH: f32 = 1.0;

/// Overlay stacked over the picker image. The tracking area is the
/// contain-fit rectangle of the image inside the widget bounds, matching
/// the image widget rendered beneath; without known dimensions (broken
/// image) the whole bounds track instead.
pub struct FocalOverlay {
    crosshair: FocalPoint,
    image_size: Option<(u32, u32)>,
    previewing: bool,
}

impl FocalOverlay {
    pub fn new(crosshair: FocalPoint, image_size: Option<(u32, u32)>, previewing: bool) -> Self {
        Self {
            crosshair,
            image_size,
            previewing,
        }
    }

    /// The rectangle pointer positions are measured against.
    fn tracking_rect(&self, bounds: Rectangle) -> Rectangle {
        let Some((img_w, img_h)) = self.image_size else {
            return bounds;
        };
        if img_w == 0 || img_h == 0 {
            return bounds;
        }

        // Same math as ContentFit::Contain: scale to fit, center.
        #[allow(clippy::cast_precision_loss)]
        let (img_w, img_h) = (img_w as f32, img_h as f32);
        let scale = (bounds.width / img_w).min(bounds.height / img_h);
        let w = img_w * scale;
        let h = img_h * scale;

        Rectangle::new(
            Point::new(
                bounds.x + (bounds.width - w) / 2.0,
                bounds.y + (bounds.height - h) / 2.0,
            ),
            Size::new(w, h),
        )
    }

    fn draw_border(&self, renderer: &mut Renderer, rect: Rectangle) {
        // Top
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(rect.x, rect.y),
                Size::new(rect.width, BORDER_WIDTH),
            ),
            BORDER_COLOR,
        );

        // Bottom
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(rect.x, rect.y + rect.height - BORDER_WIDTH),
                Size::new(rect.width, BORDER_WIDTH),
            ),
            BORDER_COLOR,
        );

        // Left
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(rect.x, rect.y),
                Size::new(BORDER_WIDTH, rect.height),
            ),
            BORDER_COLOR,
        );

        // Right
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(rect.x + rect.width - BORDER_WIDTH, rect.y),
                Size::new(BORDER_WIDTH, rect.height),
            ),
            BORDER_COLOR,
        );
    }

    fn draw_crosshair(&self, renderer: &mut Renderer, rect: Rectangle) {
        #[allow(clippy::cast_possible_truncation)]
        let line_x = rect.x + rect.width * (self.crosshair.x() / 100.0) as f32;
        #[allow(clippy::cast_possible_truncation)]
        let line_y = rect.y + rect.height * (self.crosshair.y() / 100.0) as f32;

        // Vertical guide
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(line_x, rect.y),
                Size::new(LINE_WIDTH, rect.height),
            ),
            LINE_COLOR,
        );

        // Horizontal guide
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(rect.x, line_y),
                Size::new(rect.width, LINE_WIDTH),
            ),
            LINE_COLOR,
        );
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for FocalOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let rect = self.tracking_rect(layout.bounds());

        self.draw_border(renderer, rect);
        self.draw_crosshair(renderer, rect);
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let rect = self.tracking_rect(layout.bounds());
        let area = TrackingArea::new(rect.x, rect.y, rect.width, rect.height);

        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(pos) = cursor.position() {
                    if rect.contains(pos) {
                        shell.publish(AppMessage::PickerPointerMoved {
                            x: pos.x,
                            y: pos.y,
                            area,
                        });
                        return Status::Captured;
                    }

                    if self.previewing {
                        shell.publish(AppMessage::PickerPointerLeft);
                        return Status::Captured;
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if self.previewing {
                    shell.publish(AppMessage::PickerPointerLeft);
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(pos) = cursor.position()
                    && rect.contains(pos)
                {
                    shell.publish(AppMessage::PickerCommit {
                        x: pos.x,
                        y: pos.y,
                        area,
                    });
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let rect = self.tracking_rect(layout.bounds());

        if cursor.position().is_some_and(|pos| rect.contains(pos)) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::None
        }
    }
}

impl<'a> From<FocalOverlay> for Element<'a, AppMessage> {
    fn from(widget: FocalOverlay) -> Self {
        Element::new(widget)
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn focal_overlay<'a>(
    crosshair: FocalPoint,
    image_size: Option<(u32, u32)>,
    previewing: bool,
) -> Element<'a, AppMessage> {
    FocalOverlay::new(crosshair, image_size, previewing).into()
}
