// SPDX-License-Identifier: MPL-2.0
//! FFmpeg setup and clip probing.

use crate::domain::video::VideoMetadata;
use crate::error::VideoError;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times; initialization only happens once. The log
/// level is set to ERROR so container warnings do not flood stderr.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(VideoError::Other(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Reads dimensions, duration and frame rate of the best video stream.
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<VideoMetadata, VideoError> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::from_message(&format!("Failed to open video file: {e}")))?;

    let stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;

    let context = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
        .map_err(|e| VideoError::from_message(&format!("Failed to create codec context: {e}")))?;
    let decoder = context
        .decoder()
        .video()
        .map_err(|e| VideoError::from_message(&format!("Failed to create video decoder: {e}")))?;

    let (width, height) = (decoder.width(), decoder.height());
    if width == 0 || height == 0 {
        return Err(VideoError::CorruptedFile);
    }

    let duration_secs = if stream.duration() > 0 {
        let time_base = stream.time_base();
        stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        // Fallback to container duration
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    let fps = {
        let rate = stream.avg_frame_rate();
        if rate.denominator() == 0 {
            0.0
        } else {
            f64::from(rate.numerator()) / f64::from(rate.denominator())
        }
    };

    Ok(VideoMetadata::new(
        width,
        height,
        Duration::from_secs_f64(duration_secs.max(0.0)),
        fps,
    ))
}
