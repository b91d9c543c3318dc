// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every DiceBench view.
//!
//! - **Palette**: base colors
//! - **Opacity**: overlay levels
//! - **Spacing**: 8px grid
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: elevation

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.04, 0.04, 0.06);
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.18);
    pub const GRAY_600: Color = Color::from_rgb(0.32, 0.32, 0.36);
    pub const GRAY_400: Color = Color::from_rgb(0.58, 0.58, 0.62);
    pub const GRAY_200: Color = Color::from_rgb(0.86, 0.86, 0.89);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);

    // Accent scale (indigo)
    pub const ACCENT_300: Color = Color::from_rgb(0.65, 0.7, 0.98);
    pub const ACCENT_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const ACCENT_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const ACCENT_600: Color = Color::from_rgb(0.31, 0.27, 0.9);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Square answer buttons of the quiz.
    pub const ANSWER_BUTTON: f32 = 52.0;
    pub const HEADER_HEIGHT: f32 = 56.0;
    /// Reading width of prose columns.
    pub const CONTENT_MAX_WIDTH: f32 = 760.0;
    pub const CLIP_VIEW_HEIGHT: f32 = 360.0;
    pub const TOC_WIDTH: f32 = 220.0;
    pub const SPEED_BUTTON_WIDTH: f32 = 56.0;
    pub const TOAST_WIDTH: f32 = 340.0;
}

pub mod typography {
    //! Font size scale.

    /// Page title.
    pub const TITLE_LG: f32 = 32.0;
    /// Brand and section headings.
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    /// Lead paragraph.
    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 15.0;
    pub const BODY_SM: f32 = 13.0;
    /// Monospace citation text and status lines.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::ANSWER_BUTTON >= sizing::BUTTON_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn accent_is_blue_dominant() {
        assert!(palette::ACCENT_500.b > palette::ACCENT_500.r);
        assert!(palette::ACCENT_500.b > palette::ACCENT_500.g);
    }
}
