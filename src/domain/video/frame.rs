// SPDX-License-Identifier: MPL-2.0
//! Decoded frames and clip metadata.

use std::sync::Arc;
use std::time::Duration;

/// One decoded RGBA frame with its presentation time.
///
/// Pixel data is shared so cloning a frame into a message is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
    pts: Duration,
}

impl VideoFrame {
    /// Creates a frame, returning `None` if the buffer does not hold
    /// exactly `width * height` RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>, pts: Duration) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        (rgba_bytes.len() == expected_len).then(|| Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
            pts,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Presentation timestamp.
    #[must_use]
    pub fn pts(&self) -> Duration {
        self.pts
    }
}

/// Properties of an opened clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
    pub fps: f64,
}

impl VideoMetadata {
    #[must_use]
    pub fn new(width: u32, height: u32, duration: Duration, fps: f64) -> Self {
        Self {
            width,
            height,
            duration,
            fps,
        }
    }

    /// Width over height, 1.0 when the height is unknown.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
