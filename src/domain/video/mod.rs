// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod frame;
pub mod newtypes;
pub mod playback;
pub mod zoom;

pub use frame::{VideoFrame, VideoMetadata};
pub use newtypes::{PlaybackSpeed, WheelZoomStep, ZoomScale, FRAME_STEP};
pub use playback::PlaybackStatus;
pub use zoom::{NormPoint, ZoomTransform};
