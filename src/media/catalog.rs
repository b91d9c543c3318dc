// SPDX-License-Identifier: MPL-2.0
//! Catalog sources: bundled list, external TOML file, or a scanned folder.
//!
//! # Resolution Order
//!
//! 1. Catalog file (`--catalog` or `[quiz] catalog_path`)
//! 2. Media directory scan (`--media-dir` or `[quiz] media_dir`), outcomes
//!    derived from file name prefixes
//! 3. The bundled catalog of public clips
//!
//! A source that fails falls through to the bundled catalog and reports a
//! warning key for the status line.

use crate::domain::catalog::{Catalog, DieFace, VideoItem};
use crate::error::{CatalogError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Bundled catalog of the public clips.
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog/public.toml");

/// Video file extensions picked up by directory scans.
pub const VIDEO_EXTENSIONS: &[&str] = &["webm", "mp4", "mkv", "mov"];

/// Warning key when the requested catalog could not be used.
pub const CATALOG_FALLBACK_KEY: &str = "notification-catalog-fallback";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    video: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: u32,
    path: String,
    outcome: i64,
}

/// Where the active catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Directory(PathBuf),
    Bundled,
}

/// Catalog chosen at startup with the directory its paths resolve against.
#[derive(Debug, Clone)]
pub struct CatalogSelection {
    pub catalog: Catalog,
    pub source: CatalogSource,
    pub media_dir: Option<PathBuf>,
    /// i18n key describing why a requested source was skipped.
    pub warning: Option<String>,
}

/// Parses catalog TOML text.
pub fn parse_catalog(content: &str) -> std::result::Result<Catalog, CatalogError> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| CatalogError::Malformed(e.to_string()))?;
    Catalog::from_raw(
        file.video
            .into_iter()
            .map(|entry| (entry.id, entry.path, entry.outcome)),
    )
}

/// Loads a catalog TOML file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    Ok(parse_catalog(&content)?)
}

/// The catalog compiled into the binary.
pub fn bundled_catalog() -> Result<Catalog> {
    Ok(parse_catalog(BUNDLED_CATALOG)?)
}

/// Derives the outcome from a clip file name.
///
/// Prefixes are matched case-insensitively, longest first where they
/// overlap: `FE` five, `FY` four, `S` six, `TV` two, `T` three, `E` one.
#[must_use]
pub fn outcome_for_filename(name: &str) -> Option<DieFace> {
    let upper = name.to_uppercase();
    let value = if upper.starts_with("FE") {
        5
    } else if upper.starts_with("FY") {
        4
    } else if upper.starts_with('S') {
        6
    } else if upper.starts_with("TV") {
        2
    } else if upper.starts_with('T') {
        3
    } else if upper.starts_with('E') {
        1
    } else {
        return None;
    };
    DieFace::new(value)
}

fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Builds a catalog from the video files in `dir`.
///
/// Files are taken in name order and numbered from 1. Files whose name has
/// no known prefix are skipped.
pub fn scan_media_dir(dir: &Path) -> Result<Catalog> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_video_file(&path) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    let mut items = Vec::new();
    for name in names {
        match outcome_for_filename(&name) {
            Some(outcome) => {
                let id = u32::try_from(items.len() + 1)
                    .map_err(|_| Error::Catalog(CatalogError::Malformed("too many clips".into())))?;
                items.push(VideoItem::new(id, name, outcome));
            }
            None => tracing::debug!(file = %name, "skipping clip with unknown prefix"),
        }
    }

    Ok(Catalog::new(items)?)
}

/// Picks the catalog according to the resolution order.
pub fn select(catalog_path: Option<&Path>, media_dir: Option<&Path>) -> Result<CatalogSelection> {
    let mut warning = None;

    if let Some(path) = catalog_path {
        match load_catalog_file(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), clips = catalog.len(), "catalog loaded");
                return Ok(CatalogSelection {
                    catalog,
                    source: CatalogSource::File(path.to_path_buf()),
                    // Relative clip paths resolve against the catalog's folder by default.
                    media_dir: media_dir
                        .map(Path::to_path_buf)
                        .or_else(|| path.parent().map(Path::to_path_buf)),
                    warning: None,
                });
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "catalog file rejected");
                warning = Some(CATALOG_FALLBACK_KEY.to_string());
            }
        }
    } else if let Some(dir) = media_dir {
        match scan_media_dir(dir) {
            Ok(catalog) => {
                tracing::info!(dir = %dir.display(), clips = catalog.len(), "media directory scanned");
                return Ok(CatalogSelection {
                    catalog,
                    source: CatalogSource::Directory(dir.to_path_buf()),
                    media_dir: Some(dir.to_path_buf()),
                    warning: None,
                });
            }
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "media directory scan failed");
                warning = Some(CATALOG_FALLBACK_KEY.to_string());
            }
        }
    }

    Ok(CatalogSelection {
        catalog: bundled_catalog()?,
        source: CatalogSource::Bundled,
        media_dir: media_dir.map(Path::to_path_buf),
        warning,
    })
}

/// Resolves a clip locator against the media directory.
#[must_use]
pub fn resolve_media_path(item: &VideoItem, media_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(&item.path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match media_dir {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}
