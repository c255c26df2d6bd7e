//! Data models shared by the diff, scoring and record modules

use serde::{Deserialize, Serialize};

/// Per-character outcome of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Matched (exactly or by sound) against the transcript
    Correct,
    /// Wrong, skipped, or not read
    Missing,
    /// Punctuation or whitespace, never scored
    Punctuation,
    /// After the last match with tail tolerance on: not reached yet
    Normal,
}

impl DiffStatus {
    /// Whether this position counts towards the accuracy score
    pub fn is_scored(&self) -> bool {
        matches!(self, DiffStatus::Correct | DiffStatus::Missing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStatus::Correct => "correct",
            DiffStatus::Missing => "missing",
            DiffStatus::Punctuation => "punctuation",
            DiffStatus::Normal => "normal",
        }
    }
}

/// One reference character with its status
///
/// Serializes as `{"char": "学", "status": "correct"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    #[serde(rename = "char")]
    pub ch: char,
    pub status: DiffStatus,
}

impl DiffEntry {
    pub fn new(ch: char, status: DiffStatus) -> Self {
        Self { ch, status }
    }
}

/// Options accepted by a single diff call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Treat unmatched content after the last match as not yet read
    #[serde(default, alias = "tailUnmatchedAsNormal")]
    pub tail_unmatched_as_normal: bool,
}

impl DiffOptions {
    pub fn tail_tolerant() -> Self {
        Self {
            tail_unmatched_as_normal: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let entry = DiffEntry::new('学', DiffStatus::Correct);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"char":"学","status":"correct"}"#);

        let parsed: DiffEntry = serde_json::from_str(r#"{"char":"，","status":"punctuation"}"#).unwrap();
        assert_eq!(parsed, DiffEntry::new('，', DiffStatus::Punctuation));
    }

    #[test]
    fn test_options_accept_camel_case() {
        let options: DiffOptions = serde_json::from_str(r#"{"tailUnmatchedAsNormal": true}"#).unwrap();
        assert!(options.tail_unmatched_as_normal);

        let options: DiffOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.tail_unmatched_as_normal);
    }

    #[test]
    fn test_scored_statuses() {
        assert!(DiffStatus::Correct.is_scored());
        assert!(DiffStatus::Missing.is_scored());
        assert!(!DiffStatus::Punctuation.is_scored());
        assert!(!DiffStatus::Normal.is_scored());
    }
}
