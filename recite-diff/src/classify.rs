//! Per-character classification of the reference text

use std::collections::HashSet;

use crate::models::{DiffEntry, DiffStatus};
use crate::normalize::{is_punctuation, NormalizedText};

/// Map every reference character to a status.
///
/// With `tail_tolerant` set and at least one match, unmatched characters
/// after the highest matched index become [`DiffStatus::Normal`]; unmatched
/// characters at or before it stay [`DiffStatus::Missing`].
pub fn classify(
    reference: &NormalizedText,
    matched: &HashSet<usize>,
    tail_tolerant: bool,
) -> Vec<DiffEntry> {
    let last_matched = if tail_tolerant {
        matched.iter().copied().max()
    } else {
        None
    };

    reference
        .all_chars
        .iter()
        .enumerate()
        .map(|(index, &ch)| {
            let status = if is_punctuation(ch) {
                DiffStatus::Punctuation
            } else if matched.contains(&index) {
                DiffStatus::Correct
            } else {
                match last_matched {
                    Some(last) if index > last => DiffStatus::Normal,
                    _ => DiffStatus::Missing,
                }
            };
            DiffEntry::new(ch, status)
        })
        .collect()
}
