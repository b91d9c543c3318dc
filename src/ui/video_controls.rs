// SPDX-License-Identifier: MPL-2.0
//! Playback toolbar of the quiz clip.
//!
//! Play/pause, frame stepping, speed presets, a seek bar with scrub
//! preview, zoom reset and a status line. The toolbar renders from a
//! [`PlaybackState`] snapshot and its messages are applied to the
//! [`PlaybackController`] by [`apply`].

use crate::domain::video::{PlaybackSpeed, PlaybackStatus};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::PlaybackController;
use iced::alignment::Vertical;
use iced::widget::{button, slider, text, tooltip, Column, Row, Space, Text};
use iced::{Element, Length};
use std::time::Duration;

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    /// Slider dragged: preview only, position in seconds.
    SeekPreview(f64),
    /// Slider released: seek to the previewed position.
    SeekCommit,
    StepBackward,
    StepForward,
    SetSpeed(PlaybackSpeed),
    ResetZoom,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// What the toolbar needs to know about the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    pub position_secs: f64,
    pub duration_secs: f64,
    pub speed: PlaybackSpeed,
    pub zoomed: bool,
    /// i18n key of the load or decode error, if any.
    pub error_key: Option<&'static str>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Unloaded,
            position_secs: 0.0,
            duration_secs: 0.0,
            speed: PlaybackSpeed::default(),
            zoomed: false,
            error_key: None,
        }
    }
}

impl PlaybackState {
    #[must_use]
    pub fn from_controller(controller: &PlaybackController) -> Self {
        Self {
            status: controller.status(),
            position_secs: controller.displayed_position().as_secs_f64(),
            duration_secs: controller.duration().as_secs_f64(),
            speed: controller.speed(),
            zoomed: !controller.zoom().is_identity(),
            error_key: controller.error().map(|err| err.i18n_key()),
        }
    }

    fn status_key(&self) -> &'static str {
        match self.status {
            PlaybackStatus::Unloaded => "video-status-idle",
            PlaybackStatus::Loading => "video-status-loading",
            PlaybackStatus::Error => "video-status-error",
            PlaybackStatus::Ready | PlaybackStatus::Playing | PlaybackStatus::Paused => {
                "video-status-loaded"
            }
        }
    }
}

/// Routes a toolbar message to the controller.
pub fn apply(controller: &mut PlaybackController, message: Message) {
    match message {
        Message::TogglePlayback => controller.toggle_play(),
        Message::SeekPreview(secs) => controller.scrub_to(secs_to_duration(secs)),
        Message::SeekCommit => controller.end_scrub(),
        Message::StepBackward => controller.step_frame(false),
        Message::StepForward => controller.step_frame(true),
        Message::SetSpeed(speed) => controller.change_speed(speed),
        Message::ResetZoom => controller.reset_zoom(),
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::from_secs_f64(secs)
    } else {
        Duration::ZERO
    }
}

fn control_button<'a>(
    label: String,
    tip: String,
    message: Option<Message>,
) -> Element<'a, Message> {
    let button = button(Text::new(label).size(typography::BODY_SM))
        .on_press_maybe(message)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::toggle(false));
    styles::tooltip::styled(button, tip, tooltip::Position::Top).into()
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &PlaybackState) -> Element<'a, Message> {
    let enabled = state.status.accepts_transport_commands();
    let when_enabled = |message: Message| enabled.then_some(message);

    let play_label = if state.status.is_playing() {
        ctx.i18n.tr("video-pause")
    } else {
        ctx.i18n.tr("video-play")
    };
    let play_button = button(Text::new(play_label).size(typography::BODY_SM))
        .on_press_maybe(when_enabled(Message::TogglePlayback))
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary);

    let step_back = control_button(
        "\u{25c0}|".into(),
        ctx.i18n.tr("video-step-backward"),
        when_enabled(Message::StepBackward),
    );
    let step_forward = control_button(
        "|\u{25b6}".into(),
        ctx.i18n.tr("video-step-forward"),
        when_enabled(Message::StepForward),
    );

    let timeline = slider(
        0.0..=state.duration_secs,
        state.position_secs,
        Message::SeekPreview,
    )
    .on_release(Message::SeekCommit)
    .width(Length::Fill)
    .step(SLIDER_STEP_SECS);

    let time_display = text(format!(
        "{} / {}",
        format_time(state.position_secs),
        format_time(state.duration_secs)
    ))
    .size(typography::CAPTION)
    .font(iced::Font::MONOSPACE);

    let transport_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(step_back)
        .push(play_button)
        .push(step_forward)
        .push(timeline)
        .push(time_display);

    let speeds = PlaybackSpeed::presets().fold(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("video-speed")).size(typography::BODY_SM)),
        |row, speed| {
            row.push(
                button(Text::new(speed.label()).size(typography::BODY_SM).center())
                    .on_press(Message::SetSpeed(speed))
                    .width(Length::Fixed(sizing::SPEED_BUTTON_WIDTH))
                    .style(styles::button::toggle(speed == state.speed)),
            )
        },
    );

    let reset_zoom = button(Text::new(ctx.i18n.tr("video-reset-zoom")).size(typography::BODY_SM))
        .on_press_maybe(state.zoomed.then_some(Message::ResetZoom))
        .style(styles::button::link);

    let options_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(speeds)
        .push(Space::new().width(Length::Fill))
        .push(reset_zoom);

    let mut status_line = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr(state.status_key())).size(typography::CAPTION));
    if let Some(key) = state.error_key {
        status_line = status_line.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .style(text::danger),
        );
    }
    status_line = status_line.push(Space::new().width(Length::Fill)).push(
        Text::new(ctx.i18n.tr("video-zoom-hint"))
            .size(typography::CAPTION)
            .style(text::secondary),
    );

    Column::new()
        .spacing(spacing::XS)
        .push(transport_row)
        .push(options_row)
        .push(status_line)
        .into()
}

/// Formats a position as `MM:SS.mmm`. Clips are short enough that hours
/// never appear, and millisecond precision shows single frame steps.
fn format_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let minutes = total_ms / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{secs:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MediaEvent;
    use crate::domain::video::VideoMetadata;
    use crate::error::VideoError;
    use crate::test_utils::{assert_abs_diff_eq, MockTransport};
    use std::path::Path;

    fn loaded_controller() -> PlaybackController {
        let (transport, _log) = MockTransport::new();
        let mut controller = PlaybackController::new(Box::new(transport));
        controller.load(Path::new("clip.webm"));
        controller.handle_event(MediaEvent::Loaded(VideoMetadata::new(
            640,
            360,
            Duration::from_secs(2),
            30.0,
        )));
        controller
    }

    #[test]
    fn format_time_shows_milliseconds() {
        assert_eq!(format_time(0.0), "00:00.000");
        assert_eq!(format_time(1.5), "00:01.500");
        assert_eq!(format_time(75.033), "01:15.033");
        assert_eq!(format_time(-3.0), "00:00.000");
    }

    #[test]
    fn snapshot_reflects_controller() {
        let state = PlaybackState::from_controller(&loaded_controller());
        assert_eq!(state.status, PlaybackStatus::Ready);
        assert_abs_diff_eq!(state.duration_secs, 2.0);
        assert!(!state.zoomed);
        assert_eq!(state.status_key(), "video-status-loaded");
    }

    #[test]
    fn error_snapshot_carries_reason_key() {
        let mut controller = loaded_controller();
        controller.handle_event(MediaEvent::Error(VideoError::CorruptedFile));
        let state = PlaybackState::from_controller(&controller);
        assert_eq!(state.status_key(), "video-status-error");
        assert_eq!(state.error_key, Some(VideoError::CorruptedFile.i18n_key()));
    }

    #[test]
    fn scrub_messages_preview_then_commit() {
        let mut controller = loaded_controller();
        apply(&mut controller, Message::SeekPreview(1.25));
        assert!(controller.is_scrubbing());
        assert_eq!(controller.displayed_position(), Duration::from_millis(1250));

        apply(&mut controller, Message::SeekCommit);
        assert!(!controller.is_scrubbing());
        assert_eq!(controller.position(), Duration::from_millis(1250));
    }

    #[test]
    fn negative_preview_clamps_to_start() {
        assert_eq!(secs_to_duration(-1.0), Duration::ZERO);
        assert_eq!(secs_to_duration(f64::NAN), Duration::ZERO);
    }

    #[test]
    fn speed_message_updates_controller() {
        let mut controller = loaded_controller();
        let slow = PlaybackSpeed::new(0.25);
        apply(&mut controller, Message::SetSpeed(slow));
        assert_eq!(controller.speed(), slow);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n }, &PlaybackState::default());
    }
}
