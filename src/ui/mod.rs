// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an optional `Event` for the parent, and a `view`
//! taking a `ViewContext`.
//!
//! # Screens
//!
//! - [`overview`] - Benchmark prose, table of contents, contact and citation
//! - [`leaderboard`] - Sortable results table
//! - [`quiz`] - Dice clip quiz with playback controls
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Brand and navigation bar
//! - [`citation`] - BibTeX block with copy to clipboard
//! - [`video_controls`] - Playback toolbar
//! - [`notifications`] - Toasts for warnings and errors
//! - [`links`] - Outbound URLs
//! - [`state`] - Pointer gesture tracking
//! - [`widgets`] - Clip canvas and loading spinner
//! - [`styles`] - Button, container and tooltip styles
//! - [`design_tokens`] - Colors, spacing, sizing, typography
//! - [`theming`] - Light/Dark/System theme mode

pub mod citation;
pub mod design_tokens;
pub mod header;
pub mod leaderboard;
pub mod links;
pub mod notifications;
pub mod overview;
pub mod quiz;
pub mod state;
pub mod styles;
pub mod theming;
pub mod video_controls;
pub mod widgets;
