// SPDX-License-Identifier: MPL-2.0
//! `dicebench` presents DiceBench, a post-human level benchmark, as an Iced
//! desktop application.
//!
//! Three screens share one window: an overview of the benchmark with its
//! citation, a sortable leaderboard, and a quiz where the user watches dice
//! clips cut two bounces into the throw and predicts the final face.
//! Playback runs on FFmpeg behind the [`application::port::MediaTransport`]
//! port so the quiz logic can be driven without a decoder.

#![doc(html_root_url = "https://docs.rs/dicebench/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub mod test_utils;
