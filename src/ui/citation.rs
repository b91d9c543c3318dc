// SPDX-License-Identifier: MPL-2.0
//! BibTeX citation block with copy to clipboard.
//!
//! The confirmation only appears after the clipboard accepted the text; a
//! failed write shows its own indicator for the same duration.

use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, tooltip, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length, Theme};
use std::time::{Duration, Instant};

pub const BIBTEX: &str = "@misc{dicebench2024,
  title = {DiceBench: A Post-Human Level Benchmark},
  author = {Lindahl, Rasmus},
  year = {2024},
  publisher = {becose},
  url = {https://dicebench.vercel.app},
  note = {AI consultancy specializing in advanced machine learning solutions}
}";

/// How long the copy result stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Copied,
    Failed,
}

#[derive(Debug, Default)]
pub struct State {
    feedback: Option<(CopyFeedback, Instant)>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Copy,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Copy => self.copy_with(write_clipboard, Instant::now()),
        }
    }

    /// Writes [`BIBTEX`] through `write` and records the outcome at `now`.
    pub fn copy_with<W>(&mut self, write: W, now: Instant)
    where
        W: FnOnce(&str) -> Result<()>,
    {
        let feedback = match write(BIBTEX) {
            Ok(()) => {
                tracing::info!("citation copied");
                CopyFeedback::Copied
            }
            Err(err) => {
                tracing::warn!(error = %err, "citation copy failed");
                CopyFeedback::Failed
            }
        };
        self.feedback = Some((feedback, now));
    }

    /// Clears the feedback once it has been shown long enough.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, shown_at)) = self.feedback {
            if now.saturating_duration_since(shown_at) >= FEEDBACK_DURATION {
                self.feedback = None;
            }
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Option<CopyFeedback> {
        self.feedback.map(|(feedback, _)| feedback)
    }

    /// Whether a timer tick is needed.
    #[must_use]
    pub fn is_showing_feedback(&self) -> bool {
        self.feedback.is_some()
    }
}

fn write_clipboard(content: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| Error::Clipboard(e.to_string()))
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let copy_button = styles::tooltip::styled(
        button(Text::new(ctx.i18n.tr("citation-copy")).size(typography::BODY_SM))
            .on_press(Message::Copy)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::primary),
        ctx.i18n.tr("citation-copy-tooltip"),
        tooltip::Position::Left,
    );

    let feedback: Element<'a, Message> = match ctx.state.feedback() {
        Some(CopyFeedback::Copied) => Text::new(ctx.i18n.tr("citation-copied"))
            .size(typography::BODY_SM)
            .style(text::success)
            .into(),
        Some(CopyFeedback::Failed) => Text::new(ctx.i18n.tr("citation-copy-failed"))
            .size(typography::BODY_SM)
            .style(text::danger)
            .into(),
        None => Space::new().into(),
    };

    let title_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("citation-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(feedback)
        .push(copy_button);

    let code = Container::new(
        Text::new(BIBTEX)
            .font(Font::MONOSPACE)
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::code_block);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(title_row)
            .push(code),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_copy_shows_confirmation_then_clears() {
        let mut state = State::new();
        let now = Instant::now();
        let mut written = String::new();
        state.copy_with(
            |content| {
                written = content.to_string();
                Ok(())
            },
            now,
        );

        assert_eq!(written, BIBTEX);
        assert_eq!(state.feedback(), Some(CopyFeedback::Copied));

        state.tick(now + Duration::from_millis(999));
        assert_eq!(state.feedback(), Some(CopyFeedback::Copied));

        state.tick(now + FEEDBACK_DURATION);
        assert_eq!(state.feedback(), None);
        assert!(!state.is_showing_feedback());
    }

    #[test]
    fn failed_copy_never_claims_success() {
        let mut state = State::new();
        state.copy_with(|_| Err(Error::Clipboard("no display".into())), Instant::now());
        assert_eq!(state.feedback(), Some(CopyFeedback::Failed));
    }

    #[test]
    fn repeated_copy_restarts_the_timer() {
        let mut state = State::new();
        let start = Instant::now();
        state.copy_with(|_| Ok(()), start);
        state.copy_with(|_| Ok(()), start + Duration::from_millis(800));

        state.tick(start + Duration::from_millis(1200));
        assert_eq!(state.feedback(), Some(CopyFeedback::Copied));
    }

    #[test]
    fn bibtex_matches_published_entry() {
        assert!(BIBTEX.starts_with("@misc{dicebench2024,"));
        assert!(BIBTEX.contains("author = {Lindahl, Rasmus}"));
        assert!(BIBTEX.ends_with('}'));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
