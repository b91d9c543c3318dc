// SPDX-License-Identifier: MPL-2.0
//! Overview screen: benchmark prose with a table of contents, the contact
//! action and the citation block.

use crate::i18n::fluent::I18n;
use crate::ui::citation;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::links;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{
    button, operation, rule, scrollable, text, tooltip, Column, Container, Id, Row, Text,
};
use iced::{Element, Length, Task};

const SCROLLABLE_ID: &str = "overview-scrollable";

/// Sections listed in the table of contents, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    EndOfHumanBenchmarks,
    PostHumanLevel,
    DiceBench,
    Methodology,
    Access,
    Citation,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::EndOfHumanBenchmarks,
        Section::PostHumanLevel,
        Section::DiceBench,
        Section::Methodology,
        Section::Access,
        Section::Citation,
    ];

    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Section::EndOfHumanBenchmarks => "section-end-title",
            Section::PostHumanLevel => "section-phl-title",
            Section::DiceBench => "section-dicebench-title",
            Section::Methodology => "section-methodology-title",
            Section::Access => "section-access-title",
            Section::Citation => "citation-title",
        }
    }

    /// Vertical scroll target of the section, from 0 (top) to 1 (bottom).
    ///
    /// Sections are spread evenly over the scroll range; the first one
    /// maps to the top of the page so the title stays visible.
    #[must_use]
    pub fn scroll_fraction(self) -> f32 {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        index as f32 / (Self::ALL.len() - 1) as f32
    }
}

#[derive(Debug, Default)]
pub struct State {
    citation: citation::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    ScrollTo(Section),
    OpenLink(&'static str),
    Citation(citation::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(&'static str),
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

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::ScrollTo(section) => (
                Event::None,
                operation::snap_to(
                    Id::new(SCROLLABLE_ID),
                    RelativeOffset {
                        x: 0.0,
                        y: section.scroll_fraction(),
                    },
                ),
            ),
            Message::OpenLink(url) => (Event::OpenLink(url), Task::none()),
            Message::Citation(message) => {
                self.citation.update(message);
                (Event::None, Task::none())
            }
        }
    }

    pub fn tick(&mut self, now: std::time::Instant) {
        self.citation.tick(now);
    }

    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.citation.is_showing_feedback()
    }

    #[must_use]
    pub fn citation(&self) -> &citation::State {
        &self.citation
    }
}

fn paragraph<'a>(content: String) -> Element<'a, Message> {
    Text::new(content).size(typography::BODY_LG).into()
}

fn build_section<'a>(title: String, body: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(rule::horizontal(1));
    for element in body {
        column = column.push(element);
    }
    column.into()
}

fn link_button<'a>(label: String, url: &'static str) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::OpenLink(url))
        .padding(0)
        .style(styles::button::link)
        .into()
}

fn build_toc<'a>(i18n: &I18n) -> Element<'a, Message> {
    let entries = Section::ALL.into_iter().fold(
        Column::new().spacing(spacing::XXS).push(
            Text::new(i18n.tr("overview-toc-title"))
                .size(typography::BODY_SM)
                .style(text::secondary),
        ),
        |column, section| {
            column.push(
                button(Text::new(i18n.tr(section.title_key())).size(typography::BODY_SM))
                    .on_press(Message::ScrollTo(section))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::link),
            )
        },
    );

    Container::new(entries)
        .width(Length::Fixed(sizing::TOC_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_criteria<'a>(i18n: &I18n) -> Element<'a, Message> {
    ["criterion-beyond-human", "criterion-measurable", "criterion-upper-bound"]
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS).padding([0.0, spacing::MD]), |column, key| {
            column.push(Text::new(format!("\u{2022} {}", i18n.tr(key))).size(typography::BODY_LG))
        })
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let intro = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("overview-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("overview-lead"))
                .size(typography::BODY_LG)
                .style(text::secondary),
        );

    let contact = styles::tooltip::styled(
        button(Text::new(i18n.tr("contact-button")).size(typography::BODY))
            .on_press(Message::OpenLink(links::CONTACT_MAILTO))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary),
        i18n.tr("contact-tooltip"),
        tooltip::Position::Right,
    );

    let article = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(intro)
        .push(build_section(
            i18n.tr("section-end-title"),
            vec![
                paragraph(i18n.tr("section-end-p1")),
                paragraph(i18n.tr("section-end-p2")),
                link_button(i18n.tr("link-h-matched"), links::H_MATCHED_URL),
            ],
        ))
        .push(build_section(
            i18n.tr("section-phl-title"),
            vec![
                paragraph(i18n.tr("section-phl-intro")),
                build_criteria(i18n),
                paragraph(i18n.tr("section-phl-outro")),
            ],
        ))
        .push(build_section(
            i18n.tr("section-dicebench-title"),
            vec![
                paragraph(i18n.tr("section-dicebench-p1")),
                paragraph(i18n.tr("section-dicebench-p2")),
            ],
        ))
        .push(build_section(
            i18n.tr("section-methodology-title"),
            vec![
                paragraph(i18n.tr("section-methodology-p1")),
                paragraph(i18n.tr("section-methodology-p2")),
            ],
        ))
        .push(build_section(
            i18n.tr("section-access-title"),
            vec![paragraph(i18n.tr("section-access-p1")), contact.into()],
        ))
        .push(
            citation::view(citation::ViewContext {
                i18n,
                state: ctx.state.citation(),
            })
            .map(Message::Citation),
        );

    let page = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(build_toc(i18n))
        .push(article);

    scrollable(
        Container::new(page)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .id(Id::new(SCROLLABLE_ID))
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn scroll_fractions_span_the_page() {
        assert_abs_diff_eq!(Section::EndOfHumanBenchmarks.scroll_fraction(), 0.0);
        assert_abs_diff_eq!(Section::Citation.scroll_fraction(), 1.0);
        let fractions: Vec<f32> = Section::ALL.iter().map(|s| s.scroll_fraction()).collect();
        assert!(fractions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn open_link_emits_event() {
        let mut state = State::new();
        let (event, _task) = state.update(Message::OpenLink(links::CONTACT_MAILTO));
        assert_eq!(event, Event::OpenLink(links::CONTACT_MAILTO));
    }

    #[test]
    fn citation_copy_requests_ticks() {
        let mut state = State::new();
        assert!(!state.needs_tick());
        state.citation.copy_with(|_| Ok(()), std::time::Instant::now());
        assert!(state.needs_tick());
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
