// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits on top of the active screen; toasts float over both.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::header;
use crate::ui::leaderboard;
use crate::ui::notifications::{self, Toast};
use crate::ui::overview;
use crate::ui::quiz;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub overview: &'a overview::State,
    pub leaderboard: &'a leaderboard::State,
    pub quiz: &'a quiz::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Overview => overview::view(overview::ViewContext {
            i18n,
            state: ctx.overview,
        })
        .map(Message::Overview),
        Screen::Leaderboard => leaderboard::view(leaderboard::ViewContext {
            i18n,
            state: ctx.leaderboard,
        })
        .map(Message::Leaderboard),
        Screen::Quiz => ctx
            .quiz
            .view(quiz::ViewContext { i18n })
            .map(Message::Quiz),
    };

    let header = header::view(header::ViewContext {
        i18n,
        screen: ctx.screen,
    })
    .map(Message::Header);

    let page = Column::new().push(header).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);
    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification));
    }
    layers.into()
}
