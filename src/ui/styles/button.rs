// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (Start Test, Confirm, Copy).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let accent = theme.palette().primary;
    let background = match status {
        button::Status::Hovered => lighten(accent, 0.1),
        button::Status::Disabled => Color { a: 0.4, ..accent },
        button::Status::Active | button::Status::Pressed => accent,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Toggle-style button: answer faces, speed presets, navigation entries.
pub fn toggle(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return primary(theme, status);
        }
        let extended = theme.extended_palette();
        let base = extended.background.weak.color;
        let (background, text_color) = match status {
            button::Status::Hovered => (extended.background.strong.color, theme.palette().text),
            button::Status::Disabled => (base, extended.background.strong.text),
            button::Status::Active | button::Status::Pressed => (base, theme.palette().text),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: extended.background.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only button used for links and table headers.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let accent = theme.palette().primary;
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => lighten(accent, 0.15),
            _ => accent,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}
