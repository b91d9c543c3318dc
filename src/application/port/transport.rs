// SPDX-License-Identifier: MPL-2.0
//! Media transport port definition.
//!
//! This module defines the [`MediaTransport`] trait, the small surface the
//! playback controller drives. The FFmpeg adapter in `video_player`
//! implements it in production, tests plug in a scripted mock.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget; outcomes come back as [`MediaEvent`]s
//! - Events are drained with [`MediaTransport::poll_events`] from the UI tick
//! - One transport instance serves exactly one clip

use crate::domain::video::{PlaybackSpeed, VideoFrame, VideoMetadata};
use crate::error::VideoError;
use std::path::Path;
use std::time::Duration;

/// Lifecycle notifications emitted by a transport.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Metadata is known; the first frame follows.
    Loaded(VideoMetadata),
    /// A new frame is ready for display.
    Frame(VideoFrame),
    /// Playback reached the end of the stream.
    Ended,
    /// Opening or decoding failed.
    Error(VideoError),
}

/// Port for driving playback of one clip.
///
/// # Lifecycle
///
/// 1. `load()` opens the clip; `Loaded` or `Error` follows
/// 2. `play()`/`pause()`/`seek()`/`set_rate()` drive playback
/// 3. `poll_events()` drains pending events, oldest first
/// 4. Dropping the transport releases the clip
pub trait MediaTransport: Send {
    /// Opens `path`. Any previously loaded clip is discarded.
    fn load(&mut self, path: &Path) -> Result<(), VideoError>;

    fn play(&mut self) -> Result<(), VideoError>;

    fn pause(&mut self) -> Result<(), VideoError>;

    /// Moves to `position` and emits the frame found there.
    fn seek(&mut self, position: Duration) -> Result<(), VideoError>;

    fn set_rate(&mut self, speed: PlaybackSpeed) -> Result<(), VideoError>;

    /// Returns all events produced since the last call.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

/// Creates a fresh transport for each displayed clip.
pub trait TransportFactory {
    fn create(&self) -> Box<dyn MediaTransport>;
}

impl<F> TransportFactory for F
where
    F: Fn() -> Box<dyn MediaTransport>,
{
    fn create(&self) -> Box<dyn MediaTransport> {
        self()
    }
}
