// SPDX-License-Identifier: MPL-2.0
//! Top bar: brand, screen navigation and the repository link.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::links;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    OpenGithub,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Screen),
    OpenLink(&'static str),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::OpenGithub => Event::OpenLink(links::GITHUB_URL),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand")).size(typography::TITLE_SM);

    let nav = [
        (Screen::Overview, "nav-overview"),
        (Screen::Leaderboard, "nav-leaderboard"),
        (Screen::Quiz, "nav-quiz"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (screen, key)| {
        row.push(
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .on_press(Message::Navigate(screen))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::toggle(ctx.screen == screen)),
        )
    });

    let github = button(Text::new(ctx.i18n.tr("nav-github")).size(typography::BODY))
        .on_press(Message::OpenGithub)
        .style(styles::button::link);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(nav)
        .push(github);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::header)
        .into()
}
