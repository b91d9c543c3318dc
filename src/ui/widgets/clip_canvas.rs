// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the current clip frame with zoom and pan.
//!
//! The frame is fitted inside the widget bounds (contain), then magnified
//! by the [`ZoomTransform`] and clipped to the fitted area. The canvas only
//! reports wheel and press events; drags are tracked by the application's
//! pointer subscription once a press has started a gesture.

use crate::domain::video::{NormPoint, ZoomTransform};
use crate::ui::design_tokens::palette;
use crate::ui::state::gesture::{normalize, PointerId};
use iced::mouse::{self, ScrollDelta};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::{image, Action};
use iced::{touch, Event, Point, Rectangle, Renderer, Size, Theme};

/// Pixel scroll distance counted as one wheel notch.
const PIXELS_PER_NOTCH: f32 = 120.0;

pub struct ClipCanvas<'a, Message> {
    frame: Option<&'a image::Handle>,
    frame_size: Size,
    zoom: ZoomTransform,
    on_wheel: fn(f32, NormPoint) -> Message,
    on_press: fn(PointerId, Point, Rectangle) -> Message,
}

impl<'a, Message> ClipCanvas<'a, Message> {
    pub fn new(
        frame: Option<&'a image::Handle>,
        frame_size: Size,
        zoom: ZoomTransform,
        on_wheel: fn(f32, NormPoint) -> Message,
        on_press: fn(PointerId, Point, Rectangle) -> Message,
    ) -> Self {
        Self {
            frame,
            frame_size,
            zoom,
            on_wheel,
            on_press,
        }
    }
}

/// Largest rectangle of the frame's aspect ratio centered in `bounds`.
#[must_use]
pub fn fit_contain(frame: Size, bounds: Rectangle) -> Rectangle {
    if frame.width <= 0.0 || frame.height <= 0.0 || bounds.height <= 0.0 {
        return bounds;
    }
    let frame_aspect = frame.width / frame.height;
    let bounds_aspect = bounds.width / bounds.height;

    let (width, height) = if frame_aspect > bounds_aspect {
        (bounds.width, bounds.width / frame_aspect)
    } else {
        (bounds.height * frame_aspect, bounds.height)
    };
    Rectangle {
        x: bounds.x + (bounds.width - width) / 2.0,
        y: bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    }
}

fn scroll_notches(delta: &ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => *y,
        ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_NOTCH,
    }
}

impl<Message> canvas::Program<Message> for ClipCanvas<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        self.frame?;
        let content = fit_contain(self.frame_size, bounds);

        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_over(content)?;
                let notches = scroll_notches(delta);
                if notches == 0.0 {
                    return None;
                }
                Some(
                    Action::publish((self.on_wheel)(notches, normalize(position, content)))
                        .and_capture(),
                )
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(content)?;
                Some(Action::publish((self.on_press)(PointerId::Mouse, position, content)).and_capture())
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !content.contains(*position) {
                    return None;
                }
                Some(
                    Action::publish((self.on_press)(PointerId::Finger(id.0), *position, content))
                        .and_capture(),
                )
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::BLACK);

        if let Some(handle) = self.frame {
            let content = fit_contain(
                self.frame_size,
                Rectangle::new(Point::ORIGIN, bounds.size()),
            );
            let scale = self.zoom.scale().value();
            let offset = self.zoom.offset();

            frame.with_clip(content, |clipped| {
                clipped.draw_image(
                    Rectangle {
                        x: offset.x * content.width,
                        y: offset.y * content.height,
                        width: scale * content.width,
                        height: scale * content.height,
                    },
                    canvas::Image::new(handle.clone()),
                );
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let content = fit_contain(self.frame_size, bounds);
        if self.frame.is_some() && !self.zoom.is_identity() && cursor.is_over(content) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
