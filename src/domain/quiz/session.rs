// SPDX-License-Identifier: MPL-2.0
//! Quiz session state machine.
//!
//! A session walks a shuffled copy of the catalog one clip at a time. The
//! visitor stages a face for the current clip and confirms it; confirming
//! records exactly one guess per clip and moves on.
//!
//! ```text
//! NotStarted --start--> InProgress --confirm (last)--> Completed
//!      ^                    |                              |
//!      +------restart-------+------------restart-----------+
//! ```

use super::shuffle::shuffle;
use crate::domain::catalog::{Catalog, DieFace, VideoItem};
use rand::Rng;
use std::collections::HashMap;

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// What happened after a successful confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Cursor moved to the clip at `index`.
    Advanced { index: usize },
    /// The last clip was answered.
    Completed,
}

/// A confirmed guess next to the actual outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub item: VideoItem,
    pub guess: DieFace,
}

impl GuessResult {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.guess == self.item.outcome
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    state: QuizState,
    sequence: Vec<VideoItem>,
    cursor: usize,
    guesses: HashMap<u32, DieFace>,
    staged: Option<DieFace>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a fresh session over a new shuffle of `catalog`.
    pub fn start<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        self.sequence = shuffle(catalog.items(), rng);
        self.cursor = 0;
        self.guesses.clear();
        self.staged = None;
        self.state = QuizState::InProgress;
    }

    /// Stages `face` for the current clip, replacing any earlier choice.
    pub fn select_answer(&mut self, face: DieFace) {
        if self.state == QuizState::InProgress {
            self.staged = Some(face);
        }
    }

    /// Commits the staged answer. Returns `None` when nothing is staged.
    pub fn confirm(&mut self) -> Option<ConfirmOutcome> {
        if self.state != QuizState::InProgress {
            return None;
        }
        let face = self.staged?;
        let item = self.sequence.get(self.cursor)?;

        self.guesses.insert(item.id, face);
        self.staged = None;

        if self.cursor + 1 < self.sequence.len() {
            self.cursor += 1;
            Some(ConfirmOutcome::Advanced {
                index: self.cursor,
            })
        } else {
            self.state = QuizState::Completed;
            Some(ConfirmOutcome::Completed)
        }
    }

    /// Percentage of correct guesses, defined once the session is complete.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        if self.state != QuizState::Completed || self.sequence.is_empty() {
            return None;
        }
        let matches = self
            .sequence
            .iter()
            .filter(|item| self.guesses.get(&item.id) == Some(&item.outcome))
            .count();
        Some(100.0 * matches as f64 / self.sequence.len() as f64)
    }

    /// Drops all session data and returns to `NotStarted`.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    /// The clip being answered, only while in progress.
    #[must_use]
    pub fn current_item(&self) -> Option<&VideoItem> {
        match self.state {
            QuizState::InProgress => self.sequence.get(self.cursor),
            _ => None,
        }
    }

    /// Zero-based cursor and total number of clips.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.sequence.len())
    }

    #[must_use]
    pub fn staged(&self) -> Option<DieFace> {
        self.staged
    }

    /// Number of confirmed guesses so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.guesses.len()
    }

    /// Per-clip results in play order, available once complete.
    #[must_use]
    pub fn results(&self) -> Option<Vec<GuessResult>> {
        if self.state != QuizState::Completed {
            return None;
        }
        self.sequence
            .iter()
            .map(|item| {
                self.guesses.get(&item.id).map(|&guess| GuessResult {
                    item: item.clone(),
                    guess,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn face(value: u8) -> DieFace {
        DieFace::new(value).expect("valid face")
    }

    fn two_item_catalog() -> Catalog {
        Catalog::from_raw([(1, "/a.webm", 5), (2, "/b.webm", 3)]).unwrap()
    }

    fn started(catalog: &Catalog) -> QuizSession {
        let mut session = QuizSession::new();
        session.start(catalog, &mut StdRng::seed_from_u64(11));
        session
    }

    /// Answers every clip through `pick`, which sees the current item.
    fn answer_all(session: &mut QuizSession, pick: impl Fn(&VideoItem) -> DieFace) {
        while let Some(item) = session.current_item().cloned() {
            session.select_answer(pick(&item));
            session.confirm().expect("staged answer confirms");
        }
    }

    #[test]
    fn new_session_is_not_started() {
        let session = QuizSession::new();
        assert_eq!(session.state(), QuizState::NotStarted);
        assert!(session.current_item().is_none());
        assert!(session.accuracy().is_none());
        assert_eq!(session.progress(), (0, 0));
    }

    #[test]
    fn start_resets_cursor_and_guesses() {
        let catalog = two_item_catalog();
        let session = started(&catalog);
        assert_eq!(session.state(), QuizState::InProgress);
        assert_eq!(session.progress(), (0, 2));
        assert_eq!(session.answered(), 0);
        assert!(session.staged().is_none());
    }

    #[test]
    fn select_outside_progress_is_ignored() {
        let mut session = QuizSession::new();
        session.select_answer(face(2));
        assert!(session.staged().is_none());
    }

    #[test]
    fn confirm_without_staged_is_noop() {
        let catalog = two_item_catalog();
        let mut session = started(&catalog);
        assert_eq!(session.confirm(), None);
        assert_eq!(session.progress(), (0, 2));
        assert_eq!(session.answered(), 0);
    }

    #[test]
    fn reselect_replaces_staged_without_duplicates() {
        let catalog = two_item_catalog();
        let mut session = started(&catalog);
        session.select_answer(face(1));
        session.select_answer(face(4));
        assert_eq!(session.staged(), Some(face(4)));

        assert_eq!(
            session.confirm(),
            Some(ConfirmOutcome::Advanced { index: 1 })
        );
        assert_eq!(session.answered(), 1);
        assert!(session.staged().is_none());
    }

    #[test]
    fn all_correct_scores_hundred() {
        let catalog = two_item_catalog();
        let mut session = started(&catalog);
        answer_all(&mut session, |item| item.outcome);

        assert_eq!(session.state(), QuizState::Completed);
        assert_eq!(session.accuracy(), Some(100.0));
    }

    #[test]
    fn half_correct_scores_fifty() {
        let catalog = two_item_catalog();
        let mut session = started(&catalog);
        // Guess 1 for the clip showing 5, 3 for the clip showing 3.
        answer_all(&mut session, |item| {
            if item.id == 1 {
                face(1)
            } else {
                face(3)
            }
        });
        assert_eq!(session.accuracy(), Some(50.0));
    }

    #[test]
    fn accuracy_undefined_mid_session() {
        let catalog = two_item_catalog();
        let mut session = started(&catalog);
        session.select_answer(face(5));
        session.confirm();
        assert!(session.accuracy().is_none());
        assert!(session.results().is_none());
    }

    #[test]
    fn results_follow_play_order() {
        let catalog = Catalog::from_raw((1..=5).map(|id| (id, format!("/{id}.webm"), 2))).unwrap();
        let mut session = started(&catalog);
        let mut order = Vec::new();
        while let Some(item) = session.current_item().cloned() {
            order.push(item.id);
            session.select_answer(face(2));
            session.confirm();
        }

        let results = session.results().expect("complete");
        let result_ids: Vec<u32> = results.iter().map(|r| r.item.id).collect();
        assert_eq!(result_ids, order);
        assert!(results.iter().all(GuessResult::is_correct));
    }

    #[test]
    fn confirm_after_completion_is_noop() {
        let catalog = two_item_catalog();
        let mut session = started(&catalog);
        answer_all(&mut session, |item| item.outcome);
        session.select_answer(face(1));
        assert!(session.staged().is_none());
        assert_eq!(session.confirm(), None);
    }

    #[test]
    fn restart_clears_everything() {
        let catalog = two_item_catalog();
        let mut session = started(&catalog);
        answer_all(&mut session, |item| item.outcome);

        session.restart();
        assert_eq!(session.state(), QuizState::NotStarted);
        assert_eq!(session.answered(), 0);
        assert_eq!(session.progress(), (0, 0));

        session.start(&catalog, &mut StdRng::seed_from_u64(99));
        assert_eq!(session.state(), QuizState::InProgress);
        assert_eq!(session.progress(), (0, 2));
    }

    #[test]
    fn single_item_catalog_completes_on_first_confirm() {
        let catalog = Catalog::from_raw([(1, "/a.webm", 6)]).unwrap();
        let mut session = started(&catalog);
        session.select_answer(face(6));
        assert_eq!(session.confirm(), Some(ConfirmOutcome::Completed));
        assert_eq!(session.accuracy(), Some(100.0));
    }
}
