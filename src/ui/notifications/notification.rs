// SPDX-License-Identifier: MPL-2.0
//! Notification data: an i18n key, a severity and a creation time.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity decides the accent color and how long the toast stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::ACCENT_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    /// The key is resolved through the i18n bundle at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Whether the toast has outlived its severity's display time at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(
            Notification::info("a").id(),
            Notification::info("a").id()
        );
    }

    #[test]
    fn errors_never_expire() {
        let notification = Notification::error("boom");
        assert!(!notification.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn warnings_expire_after_their_duration() {
        let notification = Notification::warning("careful");
        assert!(!notification.is_expired(notification.created_at));
        assert!(notification.is_expired(notification.created_at + Duration::from_secs(6)));
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
    }
}
