// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files live in `assets/i18n/` and are embedded at build time.
//! The locale comes from `--lang`, then `[general] language`, then the OS
//! locale; missing keys fall back to `en-US`.

pub mod fluent;
