// SPDX-License-Identifier: MPL-2.0
//! Quiz sequencing and scoring.

pub mod session;
pub mod shuffle;

pub use session::{ConfirmOutcome, GuessResult, QuizSession, QuizState};
pub use shuffle::shuffle;
