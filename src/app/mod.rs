// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three screens.
//!
//! The `App` struct wires together the overview page, the leaderboard and
//! the quiz, and translates their events into side effects like opening
//! links or raising toasts. Startup resolves the configuration, the locale
//! and the clip catalog once; nothing is written back to disk.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::catalog::{self as catalog_source, CatalogSelection};
use crate::ui::leaderboard;
use crate::ui::notifications::{self, Notification};
use crate::ui::overview;
use crate::ui::quiz::{self, PlaybackOptions};
use crate::ui::theming::ThemeMode;
use crate::video_player::ffmpeg_transport;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    overview: overview::State,
    leaderboard: leaderboard::State,
    quiz: quiz::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("quiz", &self.quiz)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the clip catalog from CLI flags first, then the config file.
fn select_catalog(flags: &Flags, config: &config::Config) -> CatalogSelection {
    let catalog_path = flags
        .catalog
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.quiz.catalog_path.clone());
    let media_dir = flags
        .media_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.quiz.media_dir.clone());

    // The default data directory only serves as a base for relative paths;
    // it is never scanned implicitly.
    let scan_dir = media_dir.as_deref();
    let mut selection = catalog_source::select(catalog_path.as_deref(), scan_dir)
        .expect("bundled catalog is valid");
    if selection.media_dir.is_none() {
        selection.media_dir = paths::default_media_dir();
    }
    selection
}

impl App {
    /// Builds the application state from the CLI flags, the config file and
    /// the selected catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let selection = select_catalog(&flags, &config);
        tracing::info!(
            source = ?selection.source,
            clips = selection.catalog.len(),
            "quiz catalog ready"
        );

        let options = PlaybackOptions {
            speed: config.quiz.speed(),
            autoplay: config.quiz.autoplay(),
            wheel_step: config.zoom.wheel_step(),
        };

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, selection.warning].into_iter().flatten() {
            notifications.push(Notification::warning(key));
        }

        let app = App {
            i18n,
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            overview: overview::State::new(),
            leaderboard: leaderboard::State::new(),
            quiz: quiz::State::new(
                selection.catalog,
                selection.media_dir,
                options,
                Box::new(ffmpeg_transport),
            ),
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.quiz.needs_tick(),
            self.overview.needs_tick() || self.notifications.has_notifications(),
        );
        let gesture_sub = subscription::create_gesture_subscription(self.quiz.gesture_active());

        Subscription::batch([tick_sub, gesture_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            overview: &mut self.overview,
            leaderboard: &mut self.leaderboard,
            quiz: &mut self.quiz,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Header(message) => update::handle_header_message(&mut ctx, message),
            Message::Overview(message) => update::handle_overview_message(&mut ctx, message),
            Message::Leaderboard(message) => {
                update::handle_leaderboard_message(&mut ctx, message)
            }
            Message::Quiz(message) => update::handle_quiz_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            overview: &self.overview,
            leaderboard: &self.leaderboard,
            quiz: &self.quiz,
            notifications: &self.notifications,
        })
    }
}
