// SPDX-License-Identifier: MPL-2.0
//! Tooltip styling with contrast against the current theme.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Inverted surface: light tooltip on dark themes and the other way round.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (Color::from_rgba(0.95, 0.95, 0.96, 0.98), Color::from_rgb(0.1, 0.1, 0.12))
    } else {
        (Color::from_rgba(0.12, 0.12, 0.15, 0.98), Color::from_rgb(0.95, 0.95, 0.96))
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.3),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` with a styled text tooltip.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .max_width(320.0)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
