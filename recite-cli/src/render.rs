//! Plain-text report rendering
//!
//! Missing characters are wrapped in `[ ]`, characters not yet reached in
//! `( )`; correct characters and punctuation are printed as-is.

use std::fmt::Write;

use recite_diff::{sentence_breakdown, DiffEntry, DiffStatus};

use crate::cli::CheckOutcome;

/// Reference text with per-character markup
pub fn mark_up(entries: &[DiffEntry]) -> String {
    let mut out = String::with_capacity(entries.len() * 4);
    let mut open: Option<DiffStatus> = None;

    for entry in entries {
        let status = match entry.status {
            DiffStatus::Missing | DiffStatus::Normal => Some(entry.status),
            DiffStatus::Correct | DiffStatus::Punctuation => None,
        };

        if status != open {
            if let Some(prev) = open {
                out.push(closing(prev));
            }
            if let Some(next) = status {
                out.push(opening(next));
            }
            open = status;
        }
        out.push(entry.ch);
    }

    if let Some(prev) = open {
        out.push(closing(prev));
    }
    out
}

fn opening(status: DiffStatus) -> char {
    if status == DiffStatus::Normal {
        '('
    } else {
        '['
    }
}

fn closing(status: DiffStatus) -> char {
    if status == DiffStatus::Normal {
        ')'
    } else {
        ']'
    }
}

/// Full text report: marked-up text, accuracy, optional sentence table
pub fn render_text(outcome: &CheckOutcome, sentences: bool) -> String {
    let mut out = String::new();
    out.push_str(&mark_up(&outcome.entries));
    out.push('\n');
    let _ = writeln!(out, "Accuracy: {}%", outcome.accuracy);

    let wrong = recite_diff::wrong_chars(&outcome.entries);
    if !wrong.is_empty() {
        let _ = writeln!(out, "Wrong: {}", wrong.iter().collect::<String>());
    }

    if sentences {
        for score in sentence_breakdown(&outcome.reference, &outcome.entries) {
            let accuracy = if score.reached {
                format!("{:>3}%", score.accuracy)
            } else {
                "   -".to_string()
            };
            let _ = writeln!(out, "{:>3}  {}  {}", score.index + 1, accuracy, score.text);
        }
    }

    out
}
