// SPDX-License-Identifier: MPL-2.0
//! Clip sources and FFmpeg access.
//!
//! - [`catalog`]: where the quiz clips come from
//! - [`video`]: FFmpeg initialization and probing

pub mod catalog;
pub mod video;

pub use catalog::{resolve_media_path, CatalogSelection, CatalogSource};
