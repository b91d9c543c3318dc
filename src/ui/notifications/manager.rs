// SPDX-License-Identifier: MPL-2.0
//! Notification queue with a cap on visible toasts.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it when the screen is full.
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(key = notification.message_key(), "notification");
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        assert!(!Manager::new().has_notifications());
    }

    #[test]
    fn overflow_is_queued_then_promoted() {
        let mut manager = Manager::new();
        for i in 0..4 {
            manager.push(Notification::error(format!("key-{i}")));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);

        let first = manager.visible().next().map(Notification::id).unwrap();
        assert!(manager.dismiss(first));
        let keys: Vec<_> = manager.visible().map(|n| n.message_key().to_string()).collect();
        assert_eq!(keys, vec!["key-1", "key-2", "key-3"]);
    }

    #[test]
    fn tick_removes_expired_warnings_only() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("config"));
        manager.push(Notification::error("video"));

        manager.tick(Instant::now() + Duration::from_secs(10));
        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["video"]);
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut manager = Manager::new();
        let notification = Notification::info("hello");
        let id = notification.id();
        manager.push(notification);
        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
