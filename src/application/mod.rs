// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the domain and infrastructure.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer (`video_player`) implements application layer ports
//! - Presentation layer (`ui`, `app`) drives the ports through the playback controller

pub mod port;
