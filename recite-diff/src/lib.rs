//! # Recite Diff
//!
//! Homophone-tolerant character alignment for recitation practice.
//! Compares a speech-recognized transcript against the canonical text of a
//! classical Chinese passage and marks every reference character as
//! correct, missing, punctuation, or not yet read.
//!
//! ## Pipeline
//!
//! 1. **normalize**: drop punctuation/whitespace, keep original positions
//! 2. **phonetic**: characters match when identical or sharing a pinyin reading
//! 3. **align**: LCS dynamic programming under that equivalence
//! 4. **classify**: per-character status, optional tail tolerance
//! 5. **score**: accuracy percentage over scored characters
//!
//! ## Quick Start
//!
//! ```
//! use recite_diff::{accuracy, diff, DiffOptions, DiffStatus};
//!
//! let result = diff("甲乙丙丁", "甲乙", &DiffOptions::tail_tolerant());
//! assert_eq!(result[2].status, DiffStatus::Normal);
//! assert_eq!(accuracy(&result), 100);
//! ```

pub mod align;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod normalize;
pub mod phonetic;
pub mod report;
pub mod score;
pub mod sentence;

pub use config::DiffConfig;
pub use engine::{diff, DiffEngine};
pub use error::{DiffError, Result};
pub use models::{DiffEntry, DiffOptions, DiffStatus};
pub use normalize::{is_punctuation, normalize, FilteredChar, NormalizedText};
pub use phonetic::{PhoneticMatcher, PinyinLookup, PronunciationLookup, ReadingCache};
pub use report::{wrong_chars, PracticeMode, PracticeRecord, SentenceAttempt};
pub use score::accuracy;
pub use sentence::{sentence_breakdown, split_sentences, Sentence, SentenceScore};
