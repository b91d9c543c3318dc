// SPDX-License-Identifier: MPL-2.0
//! Unbiased permutation of quiz items.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a uniformly random permutation of `items` (Fisher-Yates through
/// [`SliceRandom::shuffle`]). The input slice is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
