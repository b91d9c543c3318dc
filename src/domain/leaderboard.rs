// SPDX-License-Identifier: MPL-2.0
//! Benchmark leaderboard rows and their sort order.

use std::cmp::Ordering;

/// One row of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    /// Accuracy in percent.
    pub accuracy: f64,
    /// i18n key of the row tooltip.
    pub description_key: &'static str,
}

/// Published results. Presentation data only.
pub const ENTRIES: [LeaderboardEntry; 4] = [
    LeaderboardEntry {
        name: "Random Baseline",
        accuracy: 16.67,
        description_key: "leaderboard-desc-random",
    },
    LeaderboardEntry {
        name: "Human Performance",
        accuracy: 21.3,
        description_key: "leaderboard-desc-human",
    },
    LeaderboardEntry {
        name: "Gemini 1.5 Pro",
        accuracy: 19.8,
        description_key: "leaderboard-desc-gemini",
    },
    LeaderboardEntry {
        name: "GPT-4V",
        accuracy: 18.2,
        description_key: "leaderboard-desc-gpt4v",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Accuracy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Accuracy,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    /// Header click: the active column flips direction, another column
    /// becomes active in ascending order.
    pub fn request(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Returns `entries` ordered by this config. Ties keep input order.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [LeaderboardEntry]) -> Vec<&'a LeaderboardEntry> {
        let mut rows: Vec<&LeaderboardEntry> = entries.iter().collect();
        rows.sort_by(|a, b| {
            let ord = compare(self.key, a, b);
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        rows
    }
}

fn compare(key: SortKey, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Accuracy => a.accuracy.total_cmp(&b.accuracy),
    }
}

/// Formats an accuracy with one decimal and a percent sign.
#[must_use]
pub fn format_accuracy(percent: f64) -> String {
    format!("{percent:.1}%")
}
