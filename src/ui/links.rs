// SPDX-License-Identifier: MPL-2.0
//! Outbound links, opened with the platform's default handler.

use crate::error::Result;
use std::io;

pub const GITHUB_URL: &str = "https://github.com/mrconter1/dice-bench";
pub const H_MATCHED_URL: &str = "https://h-matched.vercel.app/";
pub const CONTACT_MAILTO: &str = "mailto:rasmus.lindahl1996@gmail.com";

/// Hands `url` to the desktop opener without waiting for it.
pub fn open(url: &str) -> Result<()> {
    open_with(url, |u| ::open::that_detached(u))
}

/// Opens `url` through `opener`, logging the outcome.
pub fn open_with<F>(url: &str, opener: F) -> Result<()>
where
    F: FnOnce(&str) -> io::Result<()>,
{
    opener(url)?;
    tracing::info!(url, "opened link");
    Ok(())
}
