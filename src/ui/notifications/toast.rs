// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(i18n.tr(notification.message_key())).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("\u{00d7}").size(typography::BODY_LG))
                    .on_press(Message::Dismiss(notification.id()))
                    .padding(spacing::XXS)
                    .style(crate::ui::styles::button::link),
            );

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Bottom-right stack of the visible toasts.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn container_border_uses_accent() {
        let accent = Severity::Warning.color();
        let style = toast_container_style(&Theme::Dark, accent);
        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::view_overlay(&manager, &i18n);
        drop(_empty);
        manager.push(Notification::warning("notification-config-load-error"));
        let _filled = Toast::view_overlay(&manager, &i18n);
    }
}
