// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards a component message, then turns the event the
//! component reports into app-level side effects (screen switches, opening
//! links, toasts).

use super::{Message, Screen};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::leaderboard;
use crate::ui::links;
use crate::ui::notifications::{self, Notification};
use crate::ui::overview::{self, Event as OverviewEvent};
use crate::ui::quiz::{self, Event as QuizEvent};
use iced::Task;
use std::time::Instant;

/// i18n key of the toast shown when the system opener fails.
pub const LINK_OPEN_FAILED_KEY: &str = "link-open-failed";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub overview: &'a mut overview::State,
    pub leaderboard: &'a mut leaderboard::State,
    pub quiz: &'a mut quiz::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::Navigate(screen) => {
            *ctx.screen = screen;
            Task::none()
        }
        HeaderEvent::OpenLink(url) => {
            open_link(ctx.notifications, url);
            Task::none()
        }
    }
}

pub fn handle_overview_message(
    ctx: &mut UpdateContext<'_>,
    message: overview::Message,
) -> Task<Message> {
    let (event, task) = ctx.overview.update(message);
    if let OverviewEvent::OpenLink(url) = event {
        open_link(ctx.notifications, url);
    }
    task.map(Message::Overview)
}

pub fn handle_leaderboard_message(
    ctx: &mut UpdateContext<'_>,
    message: leaderboard::Message,
) -> Task<Message> {
    ctx.leaderboard.update(message);
    Task::none()
}

pub fn handle_quiz_message(ctx: &mut UpdateContext<'_>, message: quiz::Message) -> Task<Message> {
    let event = ctx.quiz.update(message);
    handle_quiz_event(ctx, event);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let event = ctx.quiz.tick(now);
    handle_quiz_event(ctx, event);
    ctx.overview.tick(now);
    ctx.notifications.tick(now);
    Task::none()
}

fn handle_quiz_event(ctx: &mut UpdateContext<'_>, event: QuizEvent) {
    match event {
        QuizEvent::None => {}
        QuizEvent::ClipFailed(key) => ctx.notifications.push(Notification::error(key)),
        QuizEvent::Completed { accuracy } => {
            tracing::info!(accuracy, "quiz completed");
        }
    }
}

fn open_link(notifications: &mut notifications::Manager, url: &str) {
    if let Err(err) = links::open(url) {
        tracing::warn!(url, error = %err, "failed to open link");
        notifications.push(Notification::warning(LINK_OPEN_FAILED_KEY));
    }
}
