// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`transport`]: Clip loading and playback control

pub mod transport;

pub use transport::{MediaEvent, MediaTransport, TransportFactory};
