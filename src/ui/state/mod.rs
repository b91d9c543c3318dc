// SPDX-License-Identifier: MPL-2.0
//! UI state that outlives a single view call.

pub mod gesture;

pub use gesture::{GestureUpdate, PointerGesture, PointerId};
