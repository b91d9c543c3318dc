// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a scripted media transport.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{MediaEvent, MediaTransport};
use crate::domain::video::PlaybackSpeed;
use crate::error::VideoError;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct LogInner {
    commands: Vec<String>,
    events: Vec<MediaEvent>,
}

/// Shared view into a [`MockTransport`]: the commands it received and the
/// events it will hand out on the next poll.
#[derive(Debug, Clone, Default)]
pub struct TransportLog(Arc<Mutex<LogInner>>);

impl TransportLog {
    pub fn commands(&self) -> Vec<String> {
        self.0.lock().unwrap().commands.clone()
    }

    pub fn push_event(&self, event: MediaEvent) {
        self.0.lock().unwrap().events.push(event);
    }

    fn record(&self, command: String) {
        self.0.lock().unwrap().commands.push(command);
    }
}

/// Transport that records commands and replays queued events.
pub struct MockTransport {
    log: TransportLog,
    fail_load: bool,
}

impl MockTransport {
    pub fn new() -> (Self, TransportLog) {
        let log = TransportLog::default();
        (
            Self {
                log: log.clone(),
                fail_load: false,
            },
            log,
        )
    }

    /// A transport whose `load` always fails with an I/O error.
    pub fn failing_load() -> (Self, TransportLog) {
        let (mut transport, log) = Self::new();
        transport.fail_load = true;
        (transport, log)
    }
}

impl MediaTransport for MockTransport {
    fn load(&mut self, path: &Path) -> Result<(), VideoError> {
        self.log.record(format!("load {}", path.display()));
        if self.fail_load {
            return Err(VideoError::IoError("mock load failure".into()));
        }
        Ok(())
    }

    fn play(&mut self) -> Result<(), VideoError> {
        self.log.record("play".into());
        Ok(())
    }

    fn pause(&mut self) -> Result<(), VideoError> {
        self.log.record("pause".into());
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<(), VideoError> {
        self.log.record(format!("seek {}", position.as_millis()));
        Ok(())
    }

    fn set_rate(&mut self, speed: PlaybackSpeed) -> Result<(), VideoError> {
        self.log.record(format!("rate {}", speed.value()));
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.log.0.lock().unwrap().events)
    }
}
