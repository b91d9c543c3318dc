// SPDX-License-Identifier: MPL-2.0
//! Video catalog value objects.
//!
//! A catalog is the answer key of the quiz: every clip with the face the die
//! finally shows. Catalogs are validated once on construction and are
//! immutable afterwards.

use crate::error::CatalogError;
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// DieFace
// =============================================================================

/// Die face bounds.
pub mod face_bounds {
    /// Lowest face value.
    pub const MIN: u8 = 1;
    /// Highest face value.
    pub const MAX: u8 = 6;
}

/// Outcome of a die throw, guaranteed to be within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieFace(u8);

impl DieFace {
    /// Creates a die face, returning `None` when out of range.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (face_bounds::MIN..=face_bounds::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Returns the face value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// All six faces in ascending order.
    pub fn all() -> impl Iterator<Item = DieFace> {
        (face_bounds::MIN..=face_bounds::MAX).map(DieFace)
    }
}

impl TryFrom<i64> for DieFace {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(DieFace::new)
            .ok_or(value)
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// VideoItem
// =============================================================================

/// One clip of the quiz with its known outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoItem {
    pub id: u32,
    /// Media locator, relative paths resolve against the media directory.
    pub path: String,
    pub outcome: DieFace,
}

impl VideoItem {
    #[must_use]
    pub fn new(id: u32, path: impl Into<String>, outcome: DieFace) -> Self {
        Self {
            id,
            path: path.into(),
            outcome,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Non-empty list of clips with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<VideoItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists and duplicate ids.
    pub fn new(items: Vec<VideoItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    /// Builds a catalog from raw `(id, path, outcome)` triples.
    pub fn from_raw<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (u32, S, i64)>,
        S: Into<String>,
    {
        let items = entries
            .into_iter()
            .map(|(id, path, outcome)| {
                DieFace::try_from(outcome)
                    .map(|face| VideoItem::new(id, path, face))
                    .map_err(|outcome| CatalogError::OutcomeOutOfRange { id, outcome })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    #[must_use]
    pub fn items(&self) -> &[VideoItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false, kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&VideoItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(value: u8) -> DieFace {
        DieFace::new(value).expect("valid face")
    }

    #[test]
    fn die_face_accepts_one_to_six() {
        for value in 1..=6 {
            assert_eq!(DieFace::new(value).map(DieFace::value), Some(value));
        }
    }

    #[test]
    fn die_face_rejects_out_of_range() {
        assert!(DieFace::new(0).is_none());
        assert!(DieFace::new(7).is_none());
        assert_eq!(DieFace::try_from(-1), Err(-1));
        assert_eq!(DieFace::try_from(300), Err(300));
    }

    #[test]
    fn die_face_all_lists_six_faces() {
        let faces: Vec<u8> = DieFace::all().map(DieFace::value).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn catalog_rejects_empty() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let items = vec![
            VideoItem::new(1, "a.webm", face(5)),
            VideoItem::new(1, "b.webm", face(3)),
        ];
        assert_eq!(Catalog::new(items), Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn catalog_from_raw_validates_outcome() {
        let result = Catalog::from_raw([(1, "a.webm", 5), (2, "b.webm", 9)]);
        assert_eq!(
            result,
            Err(CatalogError::OutcomeOutOfRange { id: 2, outcome: 9 })
        );
    }

    #[test]
    fn catalog_keeps_order_and_lookup() {
        let catalog = Catalog::from_raw([(2, "b.webm", 3), (1, "a.webm", 5)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].id, 2);
        assert_eq!(catalog.get(1).map(|item| item.outcome), Some(face(5)));
        assert!(catalog.get(3).is_none());
    }
}
