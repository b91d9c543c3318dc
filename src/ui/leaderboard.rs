// SPDX-License-Identifier: MPL-2.0
//! Sortable comparison table of benchmark results.

use crate::domain::leaderboard::{
    format_accuracy, LeaderboardEntry, SortConfig, SortDirection, SortKey, ENTRIES,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, rule, scrollable, text, tooltip, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Default)]
pub struct State {
    sort: SortConfig,
}

#[derive(Debug, Clone)]
pub enum Message {
    SortBy(SortKey),
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
            Message::SortBy(key) => self.sort.request(key),
        }
    }

    #[must_use]
    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<&'static LeaderboardEntry> {
        self.sort.apply(&ENTRIES)
    }
}

fn sort_indicator(sort: SortConfig, key: SortKey) -> &'static str {
    match (sort.key == key, sort.direction) {
        (false, _) => "",
        (true, SortDirection::Ascending) => " \u{2191}",
        (true, SortDirection::Descending) => " \u{2193}",
    }
}

fn header_cell<'a>(
    label: String,
    key: SortKey,
    sort: SortConfig,
    align: Horizontal,
) -> Element<'a, Message> {
    let label = format!("{label}{}", sort_indicator(sort, key));
    Container::new(
        button(Text::new(label).size(typography::BODY))
            .on_press(Message::SortBy(key))
            .padding(0)
            .style(styles::button::link),
    )
    .width(Length::FillPortion(if key == SortKey::Name { 3 } else { 1 }))
    .align_x(align)
    .into()
}

fn entry_row<'a>(i18n: &I18n, entry: &'static LeaderboardEntry) -> Element<'a, Message> {
    let name = Container::new(Text::new(entry.name).size(typography::BODY))
        .width(Length::FillPortion(3));
    let accuracy = Container::new(
        Text::new(format_accuracy(entry.accuracy))
            .size(typography::BODY)
            .font(iced::Font::MONOSPACE),
    )
    .width(Length::FillPortion(1))
    .align_x(Horizontal::Right);

    let row = Row::new()
        .align_y(Vertical::Center)
        .padding([spacing::XS, 0.0])
        .push(name)
        .push(accuracy);

    styles::tooltip::styled(row, i18n.tr(entry.description_key), tooltip::Position::Bottom)
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let sort = ctx.state.sort();

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(header_cell(
            ctx.i18n.tr("leaderboard-header-system"),
            SortKey::Name,
            sort,
            Horizontal::Left,
        ))
        .push(header_cell(
            ctx.i18n.tr("leaderboard-header-accuracy"),
            SortKey::Accuracy,
            sort,
            Horizontal::Right,
        ));

    let rows = ctx
        .state
        .rows()
        .into_iter()
        .fold(Column::new(), |column, entry| {
            column.push(entry_row(ctx.i18n, entry))
        });

    let table = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(rule::horizontal(1))
            .push(rows),
    )
    .padding(spacing::MD)
    .style(styles::container::card);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("leaderboard-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("leaderboard-intro"))
                .size(typography::BODY)
                .style(text::secondary),
        )
        .push(table);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}
