// SPDX-License-Identifier: MPL-2.0
pub mod clip_canvas;
pub mod loading_spinner;

pub use clip_canvas::ClipCanvas;
pub use loading_spinner::LoadingSpinner;
