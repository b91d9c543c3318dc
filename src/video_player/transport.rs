// SPDX-License-Identifier: MPL-2.0
//! FFmpeg-backed [`MediaTransport`].

use super::decoder::{DecoderCommand, DecoderHandle};
use crate::application::port::{MediaEvent, MediaTransport};
use crate::domain::video::PlaybackSpeed;
use crate::error::VideoError;
use std::path::Path;
use std::time::Duration;

/// Production transport: one decoder thread per loaded clip.
#[derive(Default)]
pub struct FfmpegTransport {
    decoder: Option<DecoderHandle>,
    speed: PlaybackSpeed,
}

impl FfmpegTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn send(&self, command: DecoderCommand) -> Result<(), VideoError> {
        self.decoder
            .as_ref()
            .ok_or(VideoError::TransportClosed)?
            .send(command)
    }
}

impl MediaTransport for FfmpegTransport {
    fn load(&mut self, path: &Path) -> Result<(), VideoError> {
        // Dropping the previous handle stops its thread.
        self.decoder = None;
        self.decoder = Some(DecoderHandle::spawn(path, self.speed)?);
        tracing::debug!(path = %path.display(), "clip loading");
        Ok(())
    }

    fn play(&mut self) -> Result<(), VideoError> {
        self.send(DecoderCommand::Play)
    }

    fn pause(&mut self) -> Result<(), VideoError> {
        self.send(DecoderCommand::Pause)
    }

    fn seek(&mut self, position: Duration) -> Result<(), VideoError> {
        self.send(DecoderCommand::Seek { target: position })
    }

    fn set_rate(&mut self, speed: PlaybackSpeed) -> Result<(), VideoError> {
        self.speed = speed;
        match &self.decoder {
            Some(decoder) => decoder.send(DecoderCommand::SetRate(speed)),
            // Applied when the next clip loads.
            None => Ok(()),
        }
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        self.decoder
            .as_mut()
            .map(DecoderHandle::drain)
            .unwrap_or_default()
    }
}

/// Transport factory used by the application.
#[must_use]
pub fn ffmpeg_transport() -> Box<dyn MediaTransport> {
    Box::new(FfmpegTransport::new())
}
