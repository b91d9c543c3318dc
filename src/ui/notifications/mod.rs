// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for startup warnings and playback errors.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - queue and expiry
//! - [`toast`] - rendering
//!
//! Warnings expire after a few seconds; errors stay until dismissed. At most
//! three toasts are shown, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
