// SPDX-License-Identifier: MPL-2.0
//! Default values of the configuration.
//!
//! Bounds of clamped values live next to their newtypes in
//! `domain::video::newtypes`; this module only re-exposes the defaults.

use crate::domain::video::newtypes::{speed_bounds, wheel_step_bounds};

/// Playback speed of a freshly loaded clip.
pub const DEFAULT_PLAYBACK_SPEED: f64 = speed_bounds::DEFAULT;

/// Clips wait for the play button unless enabled.
pub const DEFAULT_AUTOPLAY: bool = false;

/// Zoom multiplier applied per mouse wheel notch.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = wheel_step_bounds::DEFAULT;

pub const MIN_WHEEL_ZOOM_STEP: f32 = wheel_step_bounds::MIN;
pub const MAX_WHEEL_ZOOM_STEP: f32 = wheel_step_bounds::MAX;
