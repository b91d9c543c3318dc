// SPDX-License-Identifier: MPL-2.0
//! Spinner shown over the clip while it loads.

use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn per period.
const PERIOD: Duration = Duration::from_millis(1200);
const SIZE: f32 = 40.0;

pub struct LoadingSpinner {
    color: Color,
    angle: f32,
}

impl LoadingSpinner {
    /// Spinner at the rotation reached after `elapsed`.
    #[must_use]
    pub fn new(color: Color, elapsed: Duration) -> Self {
        Self {
            color,
            angle: angle_at(elapsed),
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(SIZE))
            .height(Length::Fixed(SIZE))
            .into()
    }
}

fn angle_at(elapsed: Duration) -> f32 {
    let phase = elapsed.as_secs_f32() % PERIOD.as_secs_f32() / PERIOD.as_secs_f32();
    phase * TAU
}

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(3.0)
                .with_color(Color { a: 0.25, ..self.color }),
        );

        let start = self.angle - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI * 0.75),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(3.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
