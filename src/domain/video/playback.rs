// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! ```text
//! Unloaded -> Loading -> Ready <-> Playing <-> Paused
//!                |         |          |          |
//!                +---------+----------+----------+--> Error
//! ```
//!
//! `Error` is terminal for the clip until it is loaded again.

/// Current playback status of the displayed clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No clip assigned.
    #[default]
    Unloaded,
    /// Clip opened, waiting for metadata.
    Loading,
    /// Metadata known, never played.
    Ready,
    /// Frames are advancing.
    Playing,
    /// Stopped at the current position.
    Paused,
    /// The clip could not be opened or decoded.
    Error,
}

impl PlaybackStatus {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns true once metadata is known and the clip has not failed.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::Ready | Self::Playing | Self::Paused)
    }

    /// Returns true if the transport accepts play/pause/seek.
    #[must_use]
    pub fn accepts_transport_commands(self) -> bool {
        self.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unloaded() {
        assert_eq!(PlaybackStatus::default(), PlaybackStatus::Unloaded);
    }

    #[test]
    fn state_checks() {
        assert!(PlaybackStatus::Playing.is_playing());
        assert!(!PlaybackStatus::Paused.is_playing());

        assert!(PlaybackStatus::Paused.is_paused());
        assert!(PlaybackStatus::Loading.is_loading());
        assert!(PlaybackStatus::Error.is_error());
    }

    #[test]
    fn loaded_states_accept_commands() {
        for status in [
            PlaybackStatus::Ready,
            PlaybackStatus::Playing,
            PlaybackStatus::Paused,
        ] {
            assert!(status.accepts_transport_commands());
        }
        for status in [
            PlaybackStatus::Unloaded,
            PlaybackStatus::Loading,
            PlaybackStatus::Error,
        ] {
            assert!(!status.accepts_transport_commands());
        }
    }
}
