// SPDX-License-Identifier: MPL-2.0
//! Playback controller for the displayed clip.
//!
//! The controller owns the transport of one clip and mirrors its state for
//! the UI: status, position, speed, scrub preview and zoom. Commands go
//! straight to the transport; their effects come back as [`MediaEvent`]s
//! drained by [`PlaybackController::poll`].

use crate::application::port::{MediaEvent, MediaTransport};
use crate::domain::video::{
    NormPoint, PlaybackSpeed, PlaybackStatus, VideoFrame, VideoMetadata, WheelZoomStep,
    ZoomScale, ZoomTransform, FRAME_STEP,
};
use crate::error::VideoError;
use std::path::Path;
use std::time::Duration;

pub struct PlaybackController {
    transport: Box<dyn MediaTransport>,
    status: PlaybackStatus,
    metadata: Option<VideoMetadata>,
    position: Duration,
    duration: Duration,
    speed: PlaybackSpeed,
    /// Slider preview while the user drags the seek bar.
    scrub: Option<Duration>,
    at_end: bool,
    autoplay: bool,
    frame: Option<VideoFrame>,
    error: Option<VideoError>,
    zoom: ZoomTransform,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("status", &self.status)
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("speed", &self.speed)
            .finish_non_exhaustive()
    }
}

impl PlaybackController {
    #[must_use]
    pub fn new(transport: Box<dyn MediaTransport>) -> Self {
        Self {
            transport,
            status: PlaybackStatus::Unloaded,
            metadata: None,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            speed: PlaybackSpeed::default(),
            scrub: None,
            at_end: false,
            autoplay: false,
            frame: None,
            error: None,
            zoom: ZoomTransform::default(),
        }
    }

    /// Starts playback automatically once the clip is ready.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Initial speed, applied to the transport before loading.
    #[must_use]
    pub fn with_speed(mut self, speed: PlaybackSpeed) -> Self {
        self.change_speed(speed);
        self
    }

    /// Opens `path`, discarding everything known about the previous clip.
    pub fn load(&mut self, path: &Path) {
        self.status = PlaybackStatus::Loading;
        self.metadata = None;
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.scrub = None;
        self.at_end = false;
        self.frame = None;
        self.error = None;
        self.zoom.reset();

        if let Err(err) = self.transport.load(path) {
            tracing::warn!(path = %path.display(), error = %err, "failed to load clip");
            self.fail(err);
        }
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Play when ready or paused, pause when playing. Paused at the end,
    /// playback restarts from the beginning.
    pub fn toggle_play(&mut self) {
        match self.status {
            PlaybackStatus::Ready | PlaybackStatus::Paused => {
                if self.at_end {
                    self.seek(Duration::ZERO);
                }
                self.command(|t| t.play());
                self.status = PlaybackStatus::Playing;
            }
            PlaybackStatus::Playing => self.pause(),
            PlaybackStatus::Unloaded | PlaybackStatus::Loading | PlaybackStatus::Error => {}
        }
    }

    pub fn pause(&mut self) {
        if self.status.is_playing() {
            self.command(|t| t.pause());
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Moves one frame forward or backward, pausing first.
    pub fn step_frame(&mut self, forward: bool) {
        if !self.status.accepts_transport_commands() {
            return;
        }
        self.pause();
        let target = if forward {
            self.position.saturating_add(FRAME_STEP)
        } else {
            self.position.saturating_sub(FRAME_STEP)
        };
        self.seek(target);
    }

    pub fn change_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
        self.command(|t| t.set_rate(speed));
    }

    /// Jumps to `position`, clamped to the clip.
    pub fn seek(&mut self, position: Duration) {
        if !self.status.accepts_transport_commands() {
            return;
        }
        let target = self.clamp_position(position);
        self.position = target;
        self.at_end = false;
        self.command(|t| t.seek(target));
    }

    // =========================================================================
    // Scrubbing
    // =========================================================================

    pub fn begin_scrub(&mut self) {
        if self.status.accepts_transport_commands() && self.scrub.is_none() {
            self.scrub = Some(self.position);
        }
    }

    /// Previews `position` on the seek bar. Starts a scrub if needed.
    pub fn scrub_to(&mut self, position: Duration) {
        self.begin_scrub();
        if self.scrub.is_some() {
            self.scrub = Some(self.clamp_position(position));
        }
    }

    /// Commits the previewed position.
    pub fn end_scrub(&mut self) {
        if let Some(target) = self.scrub.take() {
            self.seek(target);
        }
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_some()
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    /// Sets the zoom scale keeping the content under `focal` in place.
    pub fn set_zoom(&mut self, scale: ZoomScale, focal: NormPoint) {
        self.zoom.zoom_to(scale, focal);
    }

    /// Wheel zoom by `notches` (positive zooms in).
    pub fn zoom_wheel(&mut self, notches: f32, focal: NormPoint, step: WheelZoomStep) {
        self.zoom.zoom_by(step.factor_for(notches), focal);
    }

    /// Pinch zoom by the ratio of finger distances.
    pub fn zoom_pinch(&mut self, ratio: f32, focal: NormPoint) {
        self.zoom.zoom_by(ratio, focal);
    }

    pub fn pan_by(&mut self, delta: NormPoint) {
        self.zoom.pan_by(delta);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomTransform {
        &self.zoom
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Drains and applies transport events. Returns true if any arrived.
    pub fn poll(&mut self) -> bool {
        let events = self.transport.poll_events();
        let changed = !events.is_empty();
        for event in events {
            self.handle_event(event);
        }
        changed
    }

    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Loaded(metadata) => {
                if !self.status.is_loading() {
                    return;
                }
                self.metadata = Some(metadata);
                self.duration = metadata.duration;
                self.status = PlaybackStatus::Ready;
                if self.autoplay {
                    self.toggle_play();
                }
            }
            MediaEvent::Frame(frame) => {
                if self.status.is_error() {
                    return;
                }
                let pts = frame.pts();
                // Streams without a declared duration grow it as they play.
                if pts > self.duration {
                    self.duration = pts;
                }
                if self.scrub.is_none() {
                    self.position = pts;
                }
                self.frame = Some(frame);
            }
            MediaEvent::Ended => {
                if self.status.is_loaded() {
                    self.status = PlaybackStatus::Paused;
                    self.position = self.duration;
                    self.at_end = true;
                }
            }
            MediaEvent::Error(err) => {
                tracing::warn!(error = %err, "playback error");
                self.fail(err);
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Position shown on the seek bar: the scrub preview while dragging.
    #[must_use]
    pub fn displayed_position(&self) -> Duration {
        self.scrub.unwrap_or(self.position)
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    #[must_use]
    pub fn frame(&self) -> Option<&VideoFrame> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    fn clamp_position(&self, position: Duration) -> Duration {
        if self.duration.is_zero() {
            position
        } else {
            position.min(self.duration)
        }
    }

    fn fail(&mut self, err: VideoError) {
        self.status = PlaybackStatus::Error;
        self.scrub = None;
        self.error = Some(err);
    }

    fn command<F>(&mut self, f: F)
    where
        F: FnOnce(&mut dyn MediaTransport) -> Result<(), VideoError>,
    {
        if let Err(err) = f(self.transport.as_mut()) {
            // Before the first load there is nothing to command.
            if self.status != PlaybackStatus::Unloaded {
                tracing::warn!(error = %err, "transport command failed");
                self.fail(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockTransport, TransportLog};

    const CLIP: Duration = Duration::from_secs(2);

    fn frame(pts: Duration) -> MediaEvent {
        MediaEvent::Frame(VideoFrame::from_rgba(1, 1, vec![0; 4], pts).unwrap())
    }

    fn loaded_controller() -> (PlaybackController, TransportLog) {
        let (transport, log) = MockTransport::new();
        let mut controller = PlaybackController::new(Box::new(transport));
        controller.load(Path::new("clip.webm"));
        controller.handle_event(MediaEvent::Loaded(VideoMetadata::new(4, 4, CLIP, 30.0)));
        controller.handle_event(frame(Duration::ZERO));
        (controller, log)
    }

    #[test]
    fn load_moves_to_loading_then_ready() {
        let (transport, log) = MockTransport::new();
        let mut controller = PlaybackController::new(Box::new(transport));
        assert_eq!(controller.status(), PlaybackStatus::Unloaded);

        controller.load(Path::new("clip.webm"));
        assert_eq!(controller.status(), PlaybackStatus::Loading);
        assert_eq!(log.commands(), vec!["load clip.webm"]);

        controller.handle_event(MediaEvent::Loaded(VideoMetadata::new(4, 4, CLIP, 30.0)));
        assert_eq!(controller.status(), PlaybackStatus::Ready);
        assert_eq!(controller.duration(), CLIP);
    }

    #[test]
    fn toggle_has_no_effect_before_ready() {
        let (transport, log) = MockTransport::new();
        let mut controller = PlaybackController::new(Box::new(transport));
        controller.toggle_play();
        assert_eq!(controller.status(), PlaybackStatus::Unloaded);

        controller.load(Path::new("clip.webm"));
        controller.toggle_play();
        assert_eq!(controller.status(), PlaybackStatus::Loading);
        assert!(!log.commands().contains(&"play".to_string()));
    }

    #[test]
    fn toggle_play_and_pause() {
        let (mut controller, log) = loaded_controller();
        controller.toggle_play();
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        controller.toggle_play();
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        controller.toggle_play();
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert_eq!(
            log.commands()[1..],
            ["play".to_string(), "pause".to_string(), "play".to_string()]
        );
    }

    #[test]
    fn toggle_at_end_restarts_from_zero() {
        let (mut controller, log) = loaded_controller();
        controller.toggle_play();
        controller.handle_event(MediaEvent::Ended);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(controller.position(), CLIP);
        assert!(controller.is_at_end());

        controller.toggle_play();
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert_eq!(controller.position(), Duration::ZERO);
        let commands = log.commands();
        assert_eq!(commands[commands.len() - 2..], ["seek 0".to_string(), "play".to_string()]);
    }

    #[test]
    fn step_frame_pauses_and_moves_one_frame() {
        let (mut controller, log) = loaded_controller();
        controller.toggle_play();
        controller.handle_event(frame(Duration::from_millis(500)));

        controller.step_frame(true);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(
            controller.position(),
            Duration::from_millis(500) + FRAME_STEP
        );
        assert!(log.commands().contains(&"pause".to_string()));

        controller.step_frame(false);
        controller.step_frame(false);
        assert_eq!(
            controller.position(),
            Duration::from_millis(500) - FRAME_STEP
        );
    }

    #[test]
    fn step_frame_clamps_to_clip() {
        let (mut controller, _log) = loaded_controller();
        controller.step_frame(false);
        assert_eq!(controller.position(), Duration::ZERO);

        controller.seek(CLIP);
        controller.step_frame(true);
        assert_eq!(controller.position(), CLIP);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let (mut controller, log) = loaded_controller();
        controller.seek(Duration::from_secs(60));
        assert_eq!(controller.position(), CLIP);
        assert_eq!(log.commands().last().map(String::as_str), Some("seek 2000"));
    }

    #[test]
    fn scrub_ignores_playback_positions_until_released() {
        let (mut controller, log) = loaded_controller();
        controller.toggle_play();

        controller.scrub_to(Duration::from_millis(1500));
        assert!(controller.is_scrubbing());
        controller.handle_event(frame(Duration::from_millis(100)));
        assert_eq!(
            controller.displayed_position(),
            Duration::from_millis(1500)
        );
        assert_eq!(controller.position(), Duration::ZERO);

        controller.end_scrub();
        assert!(!controller.is_scrubbing());
        assert_eq!(controller.position(), Duration::from_millis(1500));
        assert_eq!(log.commands().last().map(String::as_str), Some("seek 1500"));
    }

    #[test]
    fn change_speed_reaches_transport() {
        let (mut controller, log) = loaded_controller();
        controller.change_speed(PlaybackSpeed::new(0.25));
        assert_eq!(controller.speed().value(), 0.25);
        assert_eq!(log.commands().last().map(String::as_str), Some("rate 0.25"));
    }

    #[test]
    fn error_event_is_terminal_until_reload() {
        let (mut controller, _log) = loaded_controller();
        controller.handle_event(MediaEvent::Error(VideoError::CorruptedFile));
        assert_eq!(controller.status(), PlaybackStatus::Error);
        assert_eq!(controller.error(), Some(&VideoError::CorruptedFile));

        controller.toggle_play();
        controller.handle_event(frame(Duration::from_millis(300)));
        assert_eq!(controller.status(), PlaybackStatus::Error);
        assert_eq!(controller.position(), Duration::ZERO);

        controller.load(Path::new("other.webm"));
        assert_eq!(controller.status(), PlaybackStatus::Loading);
        assert!(controller.error().is_none());
    }

    #[test]
    fn failed_load_command_sets_error() {
        let (transport, _log) = MockTransport::failing_load();
        let mut controller = PlaybackController::new(Box::new(transport));
        controller.load(Path::new("missing.webm"));
        assert_eq!(controller.status(), PlaybackStatus::Error);
        assert!(matches!(controller.error(), Some(VideoError::IoError(_))));
    }

    #[test]
    fn autoplay_starts_when_ready() {
        let (transport, log) = MockTransport::new();
        let mut controller = PlaybackController::new(Box::new(transport)).with_autoplay(true);
        controller.load(Path::new("clip.webm"));
        controller.handle_event(MediaEvent::Loaded(VideoMetadata::new(4, 4, CLIP, 30.0)));
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert!(log.commands().contains(&"play".to_string()));
    }

    #[test]
    fn poll_applies_queued_events() {
        let (transport, log) = MockTransport::new();
        let mut controller = PlaybackController::new(Box::new(transport));
        controller.load(Path::new("clip.webm"));

        log.push_event(MediaEvent::Loaded(VideoMetadata::new(4, 4, CLIP, 30.0)));
        log.push_event(frame(Duration::from_millis(40)));
        assert!(controller.poll());
        assert_eq!(controller.status(), PlaybackStatus::Ready);
        assert!(controller.frame().is_some());
        assert!(!controller.poll());
    }

    #[test]
    fn zoom_operations_stay_in_bounds() {
        let (mut controller, _log) = loaded_controller();
        controller.zoom_wheel(40.0, NormPoint::CENTER, WheelZoomStep::default());
        assert!(controller.zoom().scale().is_max());

        controller.pan_by(NormPoint::new(5.0, 5.0));
        assert_eq!(controller.zoom().offset(), NormPoint::new(0.0, 0.0));

        controller.zoom_pinch(0.5, NormPoint::CENTER);
        assert_eq!(controller.zoom().scale().value(), 2.0);

        controller.set_zoom(ZoomScale::new(3.0), NormPoint::new(0.1, 0.1));
        assert_eq!(controller.zoom().scale().value(), 3.0);

        controller.reset_zoom();
        assert!(controller.zoom().is_identity());
    }

    #[test]
    fn loading_new_clip_resets_zoom_and_position() {
        let (mut controller, _log) = loaded_controller();
        controller.zoom_pinch(2.0, NormPoint::CENTER);
        controller.seek(Duration::from_secs(1));

        controller.load(Path::new("next.webm"));
        assert!(controller.zoom().is_identity());
        assert_eq!(controller.position(), Duration::ZERO);
        assert!(controller.frame().is_none());
    }
}
