// SPDX-License-Identifier: MPL-2.0
//! Background video frame decoder using FFmpeg.
//!
//! One decoder thread serves one clip. The UI side sends [`DecoderCommand`]s
//! over an unbounded channel and receives [`MediaEvent`]s over a bounded one,
//! so a slow UI applies backpressure instead of piling up frames.

use crate::application::port::MediaEvent;
use crate::domain::video::{PlaybackSpeed, VideoFrame, VideoMetadata};
use crate::error::VideoError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Capacity of the event channel. Two frames keep playback smooth while
/// bounding memory during rapid seeks.
pub const EVENT_CHANNEL_CAPACITY: usize = 2;

/// Idle sleep while paused, avoids busy-waiting on the command channel.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Commands sent to the decoder thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecoderCommand {
    Play,
    Pause,
    /// Seek to the frame at or after `target` and show it.
    Seek { target: Duration },
    SetRate(PlaybackSpeed),
    Stop,
}

/// Handle to a running decoder thread.
pub struct DecoderHandle {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    event_rx: mpsc::Receiver<MediaEvent>,
}

impl DecoderHandle {
    /// Spawns a decoder thread for `path`.
    ///
    /// The thread emits `Loaded` and the first frame, or a single `Error`.
    pub fn spawn(path: &Path, speed: PlaybackSpeed) -> Result<Self, VideoError> {
        let path = path.to_path_buf();
        if !path.exists() {
            return Err(VideoError::IoError(format!(
                "Video file not found: {}",
                path.display()
            )));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        std::thread::Builder::new()
            .name("dicebench-decoder".into())
            .spawn(move || decoder_thread(path, speed, command_rx, event_tx))
            .map_err(|e| VideoError::Other(format!("Failed to spawn decoder thread: {e}")))?;

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    pub fn send(&self, command: DecoderCommand) -> Result<(), VideoError> {
        self.command_tx
            .send(command)
            .map_err(|_| VideoError::TransportClosed)
    }

    /// Drains every event currently queued, without blocking.
    pub fn drain(&mut self) -> Vec<MediaEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Drop for DecoderHandle {
    fn drop(&mut self) {
        // The thread also exits once the channels close; Stop just makes it prompt.
        let _ = self.command_tx.send(DecoderCommand::Stop);
    }
}

fn decoder_thread(
    path: PathBuf,
    speed: PlaybackSpeed,
    command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: mpsc::Sender<MediaEvent>,
) {
    let session = match DecodeSession::open(&path) {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to open clip");
            let _ = event_tx.blocking_send(MediaEvent::Error(err));
            return;
        }
    };

    tracing::debug!(
        path = %path.display(),
        width = session.metadata.width,
        height = session.metadata.height,
        "decoder opened clip"
    );

    if event_tx
        .blocking_send(MediaEvent::Loaded(session.metadata))
        .is_err()
    {
        return;
    }

    let mut player = DecodeLoop::new(session, speed, command_rx, event_tx);
    player.run();
}

/// Open FFmpeg state for one clip.
struct DecodeSession {
    ictx: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    stream_index: usize,
    time_base: f64,
    metadata: VideoMetadata,
    eof_sent: bool,
}

impl DecodeSession {
    fn open(path: &Path) -> Result<Self, VideoError> {
        crate::media::video::init_ffmpeg()?;
        let metadata = crate::media::video::read_metadata(path)?;

        let ictx = ffmpeg_next::format::input(&path)
            .map_err(|e| VideoError::from_message(&format!("Failed to open video: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;
        let stream_index = input.index();
        let time_base = f64::from(input.time_base().numerator())
            / f64::from(input.time_base().denominator());

        let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
            .map_err(|e| {
                VideoError::from_message(&format!("Failed to create codec context: {e}"))
            })?;
        let decoder = context.decoder().video().map_err(|e| {
            VideoError::from_message(&format!("Failed to create video decoder: {e}"))
        })?;

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            ffmpeg_next::format::Pixel::RGBA,
            decoder.width(),
            decoder.height(),
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to create scaler: {e}")))?;

        Ok(Self {
            ictx,
            decoder,
            scaler,
            stream_index,
            time_base,
            metadata,
            eof_sent: false,
        })
    }

    /// Decodes the next frame, `Ok(None)` at end of stream.
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, VideoError> {
        let mut decoded = ffmpeg_next::frame::Video::empty();

        if self.decoder.receive_frame(&mut decoded).is_ok() {
            return self.convert(&decoded).map(Some);
        }

        let mut received = false;
        for (stream, packet) in self.ictx.packets() {
            if stream.index() != self.stream_index {
                continue;
            }
            self.decoder.send_packet(&packet).map_err(|e| {
                VideoError::DecodingFailed(format!("Packet send failed: {e}"))
            })?;
            if self.decoder.receive_frame(&mut decoded).is_ok() {
                received = true;
                break;
            }
        }
        if received {
            return self.convert(&decoded).map(Some);
        }

        // Container exhausted: flush frames still buffered in the codec.
        if !self.eof_sent {
            self.eof_sent = true;
            let _ = self.decoder.send_eof();
        }
        if self.decoder.receive_frame(&mut decoded).is_ok() {
            return self.convert(&decoded).map(Some);
        }
        Ok(None)
    }

    /// Decodes forward until the first frame at or after `target`.
    fn frame_at(&mut self, target: Duration) -> Result<Option<VideoFrame>, VideoError> {
        let micros = i64::try_from(target.as_micros()).unwrap_or(i64::MAX);
        // RangeTo lets FFmpeg land on the keyframe before the target
        self.ictx
            .seek(micros, ..micros)
            .map_err(|e| VideoError::DecodingFailed(format!("Seek failed: {e}")))?;
        self.decoder.flush();
        self.eof_sent = false;

        // Half a frame of tolerance so rounding never skips the wanted frame.
        let threshold = target.saturating_sub(Duration::from_millis(16));
        let mut last = None;
        while let Some(frame) = self.next_frame()? {
            if frame.pts() >= threshold {
                return Ok(Some(frame));
            }
            last = Some(frame);
        }
        // Target past the last frame: show the final one.
        Ok(last)
    }

    fn convert(&mut self, decoded: &ffmpeg_next::frame::Video) -> Result<VideoFrame, VideoError> {
        let mut rgba = ffmpeg_next::frame::Video::empty();
        self.scaler
            .run(decoded, &mut rgba)
            .map_err(|e| VideoError::DecodingFailed(format!("Scaling failed: {e}")))?;

        let pts_secs = decoded
            .timestamp()
            .map_or(0.0, |pts| pts as f64 * self.time_base)
            .max(0.0);

        VideoFrame::from_rgba(
            rgba.width(),
            rgba.height(),
            extract_rgba_data(&rgba),
            Duration::from_secs_f64(pts_secs),
        )
        .ok_or_else(|| VideoError::DecodingFailed("Frame buffer size mismatch".into()))
    }
}

/// Playback state of the decoder thread.
struct DecodeLoop {
    session: DecodeSession,
    command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: mpsc::Sender<MediaEvent>,
    is_playing: bool,
    rate: f64,
    /// Wall clock and stream time of the first frame since the last
    /// play/seek/rate change, used for frame pacing.
    anchor: Option<(Instant, Duration)>,
}

impl DecodeLoop {
    fn new(
        session: DecodeSession,
        speed: PlaybackSpeed,
        command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<MediaEvent>,
    ) -> Self {
        Self {
            session,
            command_rx,
            event_tx,
            is_playing: false,
            rate: speed.value(),
            anchor: None,
        }
    }

    fn run(&mut self) {
        // Show the first frame right away.
        if !self.emit_seek(Duration::ZERO) {
            return;
        }

        loop {
            match self.command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    self.is_playing = true;
                    self.anchor = None;
                }
                Ok(DecoderCommand::Pause) => {
                    self.is_playing = false;
                    self.anchor = None;
                }
                Ok(DecoderCommand::Seek { target }) => {
                    self.anchor = None;
                    if !self.emit_seek(target) {
                        break;
                    }
                    continue;
                }
                Ok(DecoderCommand::SetRate(speed)) => {
                    self.rate = speed.value();
                    self.anchor = None;
                }
                Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !self.is_playing {
                std::thread::sleep(IDLE_POLL);
                continue;
            }

            match self.session.next_frame() {
                Ok(Some(frame)) => {
                    self.pace(frame.pts());
                    if self.event_tx.blocking_send(MediaEvent::Frame(frame)).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    self.is_playing = false;
                    self.anchor = None;
                    if self.event_tx.blocking_send(MediaEvent::Ended).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "decoding failed");
                    let _ = self.event_tx.blocking_send(MediaEvent::Error(err));
                    break;
                }
            }
        }
    }

    /// Seeks and sends the resulting frame. Returns false once the UI is gone.
    fn emit_seek(&mut self, target: Duration) -> bool {
        let event = match self.session.frame_at(target) {
            Ok(Some(frame)) => MediaEvent::Frame(frame),
            Ok(None) => return true,
            Err(err) => MediaEvent::Error(err),
        };
        self.event_tx.blocking_send(event).is_ok()
    }

    /// Sleeps until `pts` is due at the current rate.
    fn pace(&mut self, pts: Duration) {
        let (start, first_pts) = *self.anchor.get_or_insert((Instant::now(), pts));
        let stream_delay = pts.saturating_sub(first_pts).as_secs_f64();
        let due = start + Duration::from_secs_f64(stream_delay / self.rate);
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
    }
}

/// Extracts RGBA data from a decoded frame, handling stride correctly.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
    }
    rgba_bytes
}
