// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme selection.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Theme preference from `[general] theme_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. `System` asks the OS and falls
    /// back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Iced theme built from the DiceBench palette.
    #[must_use]
    pub fn theme(self) -> Theme {
        let (name, scheme) = if self.is_dark() {
            ("DiceBench Dark", ColorScheme::dark())
        } else {
            ("DiceBench Light", ColorScheme::light())
        };
        Theme::custom(name.to_string(), scheme.palette())
    }
}

/// Colors of one theme variant.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            surface: palette::GRAY_100,
            text: palette::GRAY_900,
            text_muted: palette::GRAY_600,
            accent: palette::ACCENT_600,
            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
            danger: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_950,
            surface: palette::GRAY_800,
            text: palette::GRAY_100,
            text_muted: palette::GRAY_400,
            accent: palette::ACCENT_400,
            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
            danger: palette::ERROR_500,
        }
    }

    fn palette(&self) -> Palette {
        Palette {
            background: self.background,
            text: self.text,
            primary: self.accent,
            success: self.success,
            warning: self.warning,
            danger: self.danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_background() {
        assert!(ColorScheme::light().background.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_background() {
        assert!(ColorScheme::dark().background.r < 0.2);
    }

    #[test]
    fn explicit_modes_ignore_system() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System depends on the host; only check it does not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").unwrap();
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
