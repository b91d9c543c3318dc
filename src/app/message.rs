// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::header;
use crate::ui::leaderboard;
use crate::ui::notifications;
use crate::ui::overview;
use crate::ui::quiz;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Overview(overview::Message),
    Leaderboard(leaderboard::Message),
    Quiz(quiz::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving playback polling and timed feedback.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DICEBENCH_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Catalog TOML file replacing the bundled clip list.
    pub catalog: Option<String>,
    /// Directory holding the clips, scanned when no catalog is given.
    pub media_dir: Option<String>,
}
