// SPDX-License-Identifier: MPL-2.0
//! Quiz screen: watch each clip, stage a face, confirm, see the score.
//!
//! The screen owns one [`QuizSession`] and, while a session is running, one
//! [`PlaybackController`] for the clip on screen. Confirming an answer drops
//! the controller and builds a fresh one for the next clip, so exactly one
//! decoder runs at a time.

use crate::application::port::TransportFactory;
use crate::domain::catalog::{Catalog, DieFace};
use crate::domain::leaderboard::format_accuracy;
use crate::domain::quiz::{ConfirmOutcome, QuizSession, QuizState};
use crate::domain::video::{NormPoint, PlaybackSpeed, PlaybackStatus, WheelZoomStep};
use crate::i18n::fluent::I18n;
use crate::media::resolve_media_path;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::gesture::{GestureUpdate, PointerGesture, PointerId};
use crate::ui::styles;
use crate::ui::video_controls::{self, PlaybackState};
use crate::ui::widgets::{ClipCanvas, LoadingSpinner};
use crate::video_player::PlaybackController;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, canvas, image, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{Element, Length, Point, Rectangle, Size, Theme};
use rand::Rng;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Playback preferences applied to every clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackOptions {
    pub speed: PlaybackSpeed,
    pub autoplay: bool,
    pub wheel_step: WheelZoomStep,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            speed: PlaybackSpeed::default(),
            autoplay: false,
            wheel_step: WheelZoomStep::default(),
        }
    }
}

/// Last decoded frame, converted once for the renderer.
struct DisplayedFrame {
    handle: image::Handle,
    pts: Duration,
    size: Size,
}

pub struct State {
    catalog: Catalog,
    media_dir: Option<PathBuf>,
    options: PlaybackOptions,
    transports: Box<dyn TransportFactory>,
    session: QuizSession,
    player: Option<PlaybackController>,
    frame: Option<DisplayedFrame>,
    gesture: PointerGesture,
    clip_started_at: Instant,
    now: Instant,
    /// Set once the current clip's failure has been reported.
    failure_reported: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("clips", &self.catalog.len())
            .field("session", &self.session.state())
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Start,
    SelectAnswer(DieFace),
    Confirm,
    Restart,
    Controls(video_controls::Message),
    /// Wheel notches over the clip and the normalized cursor position.
    Wheel(f32, NormPoint),
    /// A pointer went down on the clip; the rectangle is the clip content.
    PointerPressed(PointerId, Point, Rectangle),
    PointerMoved(PointerId, Point),
    PointerReleased(PointerId),
    GestureCancelled,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The current clip failed to load or decode.
    ClipFailed(&'static str),
    Completed { accuracy: f64 },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn new(
        catalog: Catalog,
        media_dir: Option<PathBuf>,
        options: PlaybackOptions,
        transports: Box<dyn TransportFactory>,
    ) -> Self {
        let now = Instant::now();
        Self {
            catalog,
            media_dir,
            options,
            transports,
            session: QuizSession::new(),
            player: None,
            frame: None,
            gesture: PointerGesture::default(),
            clip_started_at: now,
            now,
            failure_reported: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Start => {
                self.start_with(&mut rand::thread_rng());
                Event::None
            }
            Message::SelectAnswer(face) => {
                self.session.select_answer(face);
                Event::None
            }
            Message::Confirm => self.confirm(),
            Message::Restart => {
                self.session.restart();
                self.unload();
                Event::None
            }
            Message::Controls(message) => {
                if let Some(player) = self.player.as_mut() {
                    if let video_controls::Message::SetSpeed(speed) = message {
                        // The chosen speed carries over to the next clips.
                        self.options.speed = speed;
                    }
                    video_controls::apply(player, message);
                }
                Event::None
            }
            Message::Wheel(notches, focal) => {
                if let Some(player) = self.player.as_mut() {
                    player.zoom_wheel(notches, focal, self.options.wheel_step);
                }
                Event::None
            }
            Message::PointerPressed(id, position, content) => {
                if self.player.is_some() {
                    self.gesture.start(id, position, content);
                }
                Event::None
            }
            Message::PointerMoved(id, position) => {
                if let (Some(update), Some(player)) =
                    (self.gesture.move_to(id, position), self.player.as_mut())
                {
                    match update {
                        GestureUpdate::Pan(delta) => player.pan_by(delta),
                        GestureUpdate::Pinch { ratio, focal } => player.zoom_pinch(ratio, focal),
                    }
                }
                Event::None
            }
            Message::PointerReleased(id) => {
                self.gesture.end(id);
                Event::None
            }
            Message::GestureCancelled => {
                self.gesture.cancel();
                Event::None
            }
        }
    }

    /// Begins a session over a fresh shuffle drawn from `rng`.
    pub fn start_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session.start(&self.catalog, rng);
        tracing::info!(clips = self.catalog.len(), "quiz started");
        self.load_current();
    }

    fn confirm(&mut self) -> Event {
        match self.session.confirm() {
            Some(ConfirmOutcome::Advanced { index }) => {
                tracing::debug!(index, "next clip");
                self.load_current();
                Event::None
            }
            Some(ConfirmOutcome::Completed) => {
                self.unload();
                Event::Completed {
                    accuracy: self.session.accuracy().unwrap_or(0.0),
                }
            }
            None => Event::None,
        }
    }

    /// Replaces the player with a new one for the current clip.
    fn load_current(&mut self) {
        self.unload();
        let Some(item) = self.session.current_item() else {
            return;
        };
        let path = resolve_media_path(item, self.media_dir.as_deref());
        let mut player = PlaybackController::new(self.transports.create())
            .with_speed(self.options.speed)
            .with_autoplay(self.options.autoplay);
        player.load(&path);
        self.player = Some(player);
        self.clip_started_at = self.now;
        self.failure_reported = false;
    }

    fn unload(&mut self) {
        self.player = None;
        self.frame = None;
        self.gesture.cancel();
    }

    /// Drains playback events and refreshes the displayed frame.
    pub fn tick(&mut self, now: Instant) -> Event {
        self.now = now;
        let Some(player) = self.player.as_mut() else {
            return Event::None;
        };

        if player.poll() {
            Self::refresh_frame(&mut self.frame, player);
        }

        // Load failures surface synchronously, so this is checked even when
        // no event arrived.
        match player.error() {
            Some(err) if !self.failure_reported => {
                self.failure_reported = true;
                Event::ClipFailed(err.i18n_key())
            }
            _ => Event::None,
        }
    }

    fn refresh_frame(shown: &mut Option<DisplayedFrame>, player: &PlaybackController) {
        match player.frame() {
            Some(frame) => {
                let stale = shown
                    .as_ref()
                    .is_none_or(|current| current.pts != frame.pts());
                if stale {
                    *shown = Some(DisplayedFrame {
                        handle: image::Handle::from_rgba(
                            frame.width(),
                            frame.height(),
                            frame.rgba_bytes().to_vec(),
                        ),
                        pts: frame.pts(),
                        size: Size::new(frame.width() as f32, frame.height() as f32),
                    });
                }
            }
            None => *shown = None,
        }
    }

    /// Whether the clip needs the fast playback tick.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.player.is_some()
    }

    /// Whether pointer moves and releases must be routed here.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlaybackController> {
        self.player.as_ref()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let body = match self.session.state() {
            QuizState::NotStarted => self.view_start(ctx.i18n),
            QuizState::InProgress => self.view_clip(ctx.i18n),
            QuizState::Completed => self.view_results(ctx.i18n),
        };

        scrollable(
            Container::new(
                Container::new(body)
                    .max_width(sizing::CONTENT_MAX_WIDTH)
                    .padding(spacing::LG),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .height(Length::Fill)
        .into()
    }

    fn view_start<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let total = self.catalog.len() as i64;
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("quiz-title")).size(typography::TITLE_MD))
            .push(Text::new(i18n.tr("quiz-intro")).size(typography::BODY_LG))
            .push(
                Text::new(i18n.tr_with_args("quiz-clip-count", &[("total", FluentValue::from(total))]))
                    .size(typography::BODY)
                    .style(text::secondary),
            )
            .push(
                button(Text::new(i18n.tr("quiz-start")).size(typography::BODY_LG))
                    .on_press(Message::Start)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            )
            .into()
    }

    fn view_clip<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let (index, total) = self.session.progress();
        let progress = Text::new(i18n.tr_with_args(
            "quiz-progress",
            &[
                ("current", FluentValue::from(index as i64 + 1)),
                ("total", FluentValue::from(total as i64)),
            ],
        ))
        .size(typography::BODY)
        .style(text::secondary);

        let playback = self
            .player
            .as_ref()
            .map(PlaybackState::from_controller)
            .unwrap_or_default();

        let controls = video_controls::view(video_controls::ViewContext { i18n }, &playback)
            .map(Message::Controls);

        let is_last = index + 1 == total;
        let confirm_label = if is_last {
            i18n.tr("quiz-finish")
        } else {
            i18n.tr("quiz-confirm")
        };
        let confirm = button(Text::new(confirm_label).size(typography::BODY))
            .on_press_maybe(self.session.staged().map(|_| Message::Confirm))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);

        Column::new()
            .spacing(spacing::MD)
            .push(progress)
            .push(self.view_canvas(playback.status))
            .push(controls)
            .push(Text::new(i18n.tr("quiz-question")).size(typography::TITLE_SM))
            .push(self.view_answers())
            .push(confirm)
            .into()
    }

    fn view_canvas(&self, status: PlaybackStatus) -> Element<'_, Message> {
        let zoom = self
            .player
            .as_ref()
            .map(|player| *player.zoom())
            .unwrap_or_default();
        let (handle, size) = match &self.frame {
            Some(frame) => (Some(&frame.handle), frame.size),
            None => (None, Size::ZERO),
        };

        let clip = canvas(ClipCanvas::new(
            handle,
            size,
            zoom,
            Message::Wheel,
            Message::PointerPressed,
        ))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CLIP_VIEW_HEIGHT));

        let mut layers = Stack::new().push(clip);
        if status.is_loading() {
            let elapsed = self.now.saturating_duration_since(self.clip_started_at);
            layers = layers.push(
                Container::new(
                    Container::new(
                        LoadingSpinner::new(iced::Color::WHITE, elapsed).into_element(),
                    )
                    .width(Length::Fixed(sizing::ANSWER_BUTTON))
                    .height(Length::Fixed(sizing::ANSWER_BUTTON)),
                )
                .center(Length::Fill),
            );
        }

        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CLIP_VIEW_HEIGHT))
            .style(styles::container::clip_surface)
            .into()
    }

    fn view_answers(&self) -> Element<'_, Message> {
        let staged = self.session.staged();
        DieFace::all()
            .fold(Row::new().spacing(spacing::SM), |row, face| {
                row.push(
                    button(
                        Text::new(face.to_string())
                            .size(typography::TITLE_SM)
                            .center(),
                    )
                    .on_press(Message::SelectAnswer(face))
                    .width(Length::Fixed(sizing::ANSWER_BUTTON))
                    .height(Length::Fixed(sizing::ANSWER_BUTTON))
                    .style(styles::button::toggle(staged == Some(face))),
                )
            })
            .into()
    }

    fn view_results<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let accuracy = self.session.accuracy().unwrap_or(0.0);

        let rows = self
            .session
            .results()
            .unwrap_or_default()
            .into_iter()
            .fold(Column::new().spacing(spacing::XXS), |column, result| {
                let line = i18n.tr_with_args(
                    "quiz-result-row",
                    &[
                        ("id", FluentValue::from(i64::from(result.item.id))),
                        ("guess", FluentValue::from(i64::from(result.guess.value()))),
                        ("outcome", FluentValue::from(i64::from(result.item.outcome.value()))),
                    ],
                );
                let correct = result.is_correct();
                column.push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(
                            Text::new(if correct { "\u{2713}" } else { "\u{2717}" })
                                .size(typography::BODY)
                                .style(move |theme: &Theme| {
                                    if correct {
                                        text::success(theme)
                                    } else {
                                        text::danger(theme)
                                    }
                                }),
                        )
                        .push(Text::new(line).size(typography::BODY)),
                )
            });

        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("quiz-results-title")).size(typography::TITLE_MD))
            .push(
                Text::new(i18n.tr_with_args(
                    "quiz-accuracy",
                    &[("accuracy", FluentValue::from(format_accuracy(accuracy)))],
                ))
                .size(typography::TITLE_SM),
            )
            .push(
                Text::new(i18n.tr("quiz-baseline"))
                    .size(typography::BODY)
                    .style(text::secondary),
            )
            .push(
                Container::new(rows)
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::container::card),
            )
            .push(
                button(Text::new(i18n.tr("quiz-restart")).size(typography::BODY))
                    .on_press(Message::Restart)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{MediaEvent, MediaTransport};
    use crate::domain::video::{VideoFrame, VideoMetadata};
    use crate::error::VideoError;
    use crate::test_utils::{assert_abs_diff_eq, MockTransport, TransportLog};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::{Arc, Mutex};

    /// Factory handing out mock transports and keeping their logs.
    #[derive(Clone, Default)]
    struct Logs(Arc<Mutex<Vec<TransportLog>>>);

    impl Logs {
        fn factory(&self) -> Box<dyn TransportFactory> {
            let logs = self.clone();
            Box::new(move || -> Box<dyn MediaTransport> {
                let (transport, log) = MockTransport::new();
                logs.0.lock().unwrap().push(log);
                Box::new(transport)
            })
        }

        fn count(&self) -> usize {
            self.0.lock().unwrap().len()
        }

        fn last(&self) -> TransportLog {
            self.0.lock().unwrap().last().cloned().unwrap()
        }
    }

    fn face(value: u8) -> DieFace {
        DieFace::new(value).unwrap()
    }

    fn quiz(logs: &Logs) -> State {
        let catalog = Catalog::from_raw([(1, "a.webm", 5), (2, "b.webm", 3)]).unwrap();
        State::new(
            catalog,
            Some(PathBuf::from("/clips")),
            PlaybackOptions::default(),
            logs.factory(),
        )
    }

    fn started(logs: &Logs) -> State {
        let mut state = quiz(logs);
        state.start_with(&mut StdRng::seed_from_u64(3));
        state
    }

    fn answer_correctly(state: &mut State) -> Event {
        let outcome = state.session().current_item().unwrap().outcome;
        state.update(Message::SelectAnswer(outcome));
        state.update(Message::Confirm)
    }

    #[test]
    fn start_loads_first_clip_from_media_dir() {
        let logs = Logs::default();
        let state = started(&logs);

        assert_eq!(logs.count(), 1);
        let item = state.session().current_item().unwrap();
        let expected = format!("load {}", PathBuf::from("/clips").join(&item.path).display());
        assert!(logs.last().commands().contains(&expected));
        assert_eq!(
            state.player().map(PlaybackController::status),
            Some(PlaybackStatus::Loading)
        );
        assert!(state.needs_tick());
    }

    #[test]
    fn confirm_without_selection_keeps_clip() {
        let logs = Logs::default();
        let mut state = started(&logs);
        assert_eq!(state.update(Message::Confirm), Event::None);
        assert_eq!(state.session().progress().0, 0);
        assert_eq!(logs.count(), 1);
    }

    #[test]
    fn confirm_creates_a_fresh_player_per_clip() {
        let logs = Logs::default();
        let mut state = started(&logs);
        assert_eq!(answer_correctly(&mut state), Event::None);
        assert_eq!(logs.count(), 2);
        assert_eq!(state.session().progress().0, 1);
    }

    #[test]
    fn completing_reports_accuracy_and_unloads() {
        let logs = Logs::default();
        let mut state = started(&logs);
        answer_correctly(&mut state);
        let event = answer_correctly(&mut state);

        match event {
            Event::Completed { accuracy } => assert_abs_diff_eq!(accuracy, 100.0),
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(state.player().is_none());
        assert!(!state.needs_tick());
    }

    #[test]
    fn restart_returns_to_start_screen() {
        let logs = Logs::default();
        let mut state = started(&logs);
        state.update(Message::Restart);
        assert_eq!(state.session().state(), QuizState::NotStarted);
        assert!(state.player().is_none());
    }

    #[test]
    fn tick_caches_frame_and_reports_errors_once() {
        let logs = Logs::default();
        let mut state = started(&logs);
        let log = logs.last();

        log.push_event(MediaEvent::Loaded(VideoMetadata::new(
            2,
            2,
            Duration::from_secs(1),
            30.0,
        )));
        log.push_event(MediaEvent::Frame(
            VideoFrame::from_rgba(2, 2, vec![0; 16], Duration::ZERO).unwrap(),
        ));
        assert_eq!(state.tick(Instant::now()), Event::None);
        assert!(state.frame.is_some());

        log.push_event(MediaEvent::Error(VideoError::CorruptedFile));
        assert_eq!(
            state.tick(Instant::now()),
            Event::ClipFailed("error-load-video-corrupted")
        );
        log.push_event(MediaEvent::Error(VideoError::CorruptedFile));
        assert_eq!(state.tick(Instant::now()), Event::None);
    }

    #[test]
    fn rejected_load_is_reported_on_next_tick() {
        let catalog = Catalog::from_raw([(1, "missing.webm", 2)]).unwrap();
        let failing = || -> Box<dyn MediaTransport> { Box::new(MockTransport::failing_load().0) };
        let mut state = State::new(catalog, None, PlaybackOptions::default(), Box::new(failing));
        state.start_with(&mut StdRng::seed_from_u64(0));

        assert_eq!(
            state.tick(Instant::now()),
            Event::ClipFailed(VideoError::IoError(String::new()).i18n_key())
        );
        assert_eq!(state.tick(Instant::now()), Event::None);
    }

    #[test]
    fn chosen_speed_carries_to_next_clip() {
        let logs = Logs::default();
        let mut state = started(&logs);
        let slow = PlaybackSpeed::new(0.25);
        state.update(Message::Controls(video_controls::Message::SetSpeed(slow)));
        answer_correctly(&mut state);
        assert_eq!(state.player().map(PlaybackController::speed), Some(slow));
    }

    #[test]
    fn drag_pans_zoomed_clip() {
        let logs = Logs::default();
        let mut state = started(&logs);
        let content = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));

        state.update(Message::Wheel(8.0, NormPoint::CENTER));
        let before = state.player().unwrap().zoom().offset();

        state.update(Message::PointerPressed(
            PointerId::Mouse,
            Point::new(50.0, 50.0),
            content,
        ));
        assert!(state.gesture_active());
        state.update(Message::PointerMoved(PointerId::Mouse, Point::new(60.0, 50.0)));
        state.update(Message::PointerReleased(PointerId::Mouse));

        let after = state.player().unwrap().zoom().offset();
        assert!(after.x > before.x);
        assert!(!state.gesture_active());
    }

    #[test]
    fn views_render_in_every_state() {
        let i18n = I18n::default();
        let logs = Logs::default();
        let mut state = quiz(&logs);
        let _start = state.view(ViewContext { i18n: &i18n });
        drop(_start);

        state.start_with(&mut StdRng::seed_from_u64(1));
        state.update(Message::SelectAnswer(face(2)));
        let _clip = state.view(ViewContext { i18n: &i18n });
        drop(_clip);

        answer_correctly(&mut state);
        answer_correctly(&mut state);
        let _results = state.view(ViewContext { i18n: &i18n });
    }
}
