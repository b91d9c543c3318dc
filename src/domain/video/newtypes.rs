// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

/// One frame at 30 fps, the granularity of frame stepping.
pub const FRAME_STEP: Duration = Duration::from_nanos(33_333_333);

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed presets offered by the speed selector.
pub mod speed_bounds {
    /// Selectable multipliers, ascending.
    pub const PRESETS: [f64; 5] = [0.1, 0.25, 0.5, 1.0, 2.0];
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Playback speed, always one of [`speed_bounds::PRESETS`].
///
/// Arbitrary values snap to the nearest preset, so an unsupported
/// multiplier can never reach the transport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a playback speed from the nearest preset.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if !speed.is_finite() {
            return Self::default();
        }
        let nearest = speed_bounds::PRESETS
            .iter()
            .copied()
            .min_by(|a, b| (a - speed).abs().total_cmp(&(b - speed).abs()))
            .unwrap_or(speed_bounds::DEFAULT);
        Self(nearest)
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// All selectable speeds, ascending.
    pub fn presets() -> impl Iterator<Item = PlaybackSpeed> {
        speed_bounds::PRESETS.into_iter().map(PlaybackSpeed)
    }

    /// Returns the next higher preset, or self at maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        speed_bounds::PRESETS
            .iter()
            .find(|&&s| s > self.0 + 0.001)
            .map_or(self, |&s| Self(s))
    }

    /// Returns the next lower preset, or self at minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        speed_bounds::PRESETS
            .iter()
            .rev()
            .find(|&&s| s < self.0 - 0.001)
            .map_or(self, |&s| Self(s))
    }

    /// Returns true if this is the slowest preset.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= speed_bounds::PRESETS[0]
    }

    /// Returns true if this is the fastest preset.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= speed_bounds::PRESETS[speed_bounds::PRESETS.len() - 1]
    }

    /// Short label such as `0.25x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", self.0)
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale bounds for the clip viewport.
pub mod zoom_bounds {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 4.0;
}

/// Magnification of the clip, guaranteed to be within 1x to 4x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new zoom scale, clamping to valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self(scale.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when not magnified.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(zoom_bounds::MIN)
    }
}

// =============================================================================
// WheelZoomStep
// =============================================================================

/// Wheel zoom step bounds (multiplicative factor per notch).
pub mod wheel_step_bounds {
    pub const MIN: f32 = 1.05;
    pub const MAX: f32 = 2.0;
    pub const DEFAULT: f32 = 1.1;
}

/// Multiplicative zoom factor applied for each mouse wheel notch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelZoomStep(f32);

impl WheelZoomStep {
    /// Creates a new wheel step, clamping to valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_nan() {
            return Self::default();
        }
        Self(step.clamp(wheel_step_bounds::MIN, wheel_step_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Zoom factor for a wheel delta measured in notches.
    /// Positive deltas zoom in.
    #[must_use]
    pub fn factor_for(self, notches: f32) -> f32 {
        self.0.powf(notches)
    }
}

impl Default for WheelZoomStep {
    fn default() -> Self {
        Self(wheel_step_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn frame_step_is_one_thirtieth() {
        assert_abs_diff_eq!(FRAME_STEP.as_secs_f64(), 1.0 / 30.0, epsilon = 1e-6);
    }

    #[test]
    fn speed_snaps_to_nearest_preset() {
        assert_eq!(PlaybackSpeed::new(0.3).value(), 0.25);
        assert_eq!(PlaybackSpeed::new(0.74).value(), 0.5);
        assert_eq!(PlaybackSpeed::new(1.6).value(), 2.0);
        assert_eq!(PlaybackSpeed::new(100.0).value(), 2.0);
        assert_eq!(PlaybackSpeed::new(-3.0).value(), 0.1);
    }

    #[test]
    fn speed_non_finite_falls_back_to_default() {
        assert_eq!(PlaybackSpeed::new(f64::NAN), PlaybackSpeed::default());
        assert_eq!(PlaybackSpeed::new(f64::INFINITY), PlaybackSpeed::default());
    }

    #[test]
    fn speed_default_is_normal() {
        assert_eq!(PlaybackSpeed::default().value(), 1.0);
    }

    #[test]
    fn speed_increase_and_decrease() {
        let speed = PlaybackSpeed::new(0.5);
        assert_eq!(speed.increase().value(), 1.0);
        assert_eq!(speed.decrease().value(), 0.25);
        assert!(PlaybackSpeed::new(2.0).increase().is_max());
        assert!(PlaybackSpeed::new(0.1).decrease().is_min());
    }

    #[test]
    fn speed_presets_cover_selector() {
        let labels: Vec<String> = PlaybackSpeed::presets().map(PlaybackSpeed::label).collect();
        assert_eq!(labels, vec!["0.1x", "0.25x", "0.5x", "1x", "2x"]);
    }

    #[test]
    fn zoom_scale_clamps_to_valid_range() {
        assert_eq!(ZoomScale::new(0.2).value(), zoom_bounds::MIN);
        assert_eq!(ZoomScale::new(9.0).value(), zoom_bounds::MAX);
        assert_eq!(ZoomScale::new(2.5).value(), 2.5);
        assert!(ZoomScale::new(f32::NAN).is_min());
    }

    #[test]
    fn wheel_step_clamps_and_computes_factor() {
        assert_eq!(WheelZoomStep::new(1.0).value(), wheel_step_bounds::MIN);
        assert_eq!(WheelZoomStep::new(5.0).value(), wheel_step_bounds::MAX);

        let step = WheelZoomStep::new(1.5);
        assert_abs_diff_eq!(step.factor_for(2.0), 2.25, epsilon = 1e-6);
        assert_abs_diff_eq!(step.factor_for(-1.0), 1.0 / 1.5, epsilon = 1e-6);
    }
}
