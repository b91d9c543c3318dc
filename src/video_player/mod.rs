// SPDX-License-Identifier: MPL-2.0
//! Video playback engine for DiceBench.
//!
//! This module provides clip playback using FFmpeg for decoding on a
//! background thread, and the controller that drives it from the UI.

pub mod controller;
mod decoder;
pub mod transport;

pub use controller::PlaybackController;
pub use decoder::{DecoderCommand, EVENT_CHANNEL_CAPACITY};
pub use transport::{ffmpeg_transport, FfmpegTransport};
