// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core quiz and benchmark logic.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Its only external dependency is `rand`, for the injected random source of
//! the quiz shuffle.
//!
//! # Modules
//!
//! - [`catalog`]: Clip catalog ([`DieFace`](catalog::DieFace),
//!   [`VideoItem`](catalog::VideoItem), [`Catalog`](catalog::Catalog))
//! - [`leaderboard`]: Benchmark results and sorting
//! - [`quiz`]: Session state machine and shuffle
//! - [`video`]: Video playback types ([`PlaybackStatus`](video::PlaybackStatus),
//!   [`PlaybackSpeed`](video::PlaybackSpeed), [`ZoomScale`](video::ZoomScale))

pub mod catalog;
pub mod leaderboard;
pub mod quiz;
pub mod video;
