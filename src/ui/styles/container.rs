// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised surface for cards: quiz panel, citation, leaderboard.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;
    container::Style {
        background: Some(Background::Color(Color { a: opacity::SURFACE, ..base })),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Top bar holding the brand and navigation.
pub fn header(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Black letterbox behind the clip.
pub fn clip_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

/// Monospace block for the BibTeX entry.
pub fn code_block(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.strong.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
