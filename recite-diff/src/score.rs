//! Accuracy scoring over classified characters

use crate::models::{DiffEntry, DiffStatus};

/// Percentage of scored characters that are correct, rounded half up.
///
/// Punctuation and not-yet-read (`normal`) positions are excluded. Returns 0
/// when nothing is left to score.
pub fn accuracy(entries: &[DiffEntry]) -> u8 {
    let (correct, total) = entries
        .iter()
        .filter(|e| e.status.is_scored())
        .fold((0usize, 0usize), |(correct, total), e| {
            let hit = usize::from(e.status == DiffStatus::Correct);
            (correct + hit, total + 1)
        });

    if total == 0 {
        return 0;
    }

    // Integer round-half-up of 100 * correct / total
    ((correct * 200 + total) / (total * 2)) as u8
}
