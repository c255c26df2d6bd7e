//! Practice results: wrong characters and the record payload handed to storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DiffEntry, DiffStatus};
use crate::score::accuracy;

/// Characters marked missing, in reference order, each listed once
pub fn wrong_chars(entries: &[DiffEntry]) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();
    for entry in entries.iter().filter(|e| e.status == DiffStatus::Missing) {
        if !chars.contains(&entry.ch) {
            chars.push(entry.ch);
        }
    }
    chars
}

/// How the text was practiced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    #[default]
    Recite,
    Dictation,
}

/// Sentence practiced in sentence mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceAttempt {
    pub index: usize,
    pub text: String,
    pub entries: Vec<DiffEntry>,
}

/// One practice attempt, ready to be stored verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub text_id: String,
    pub text_title: String,
    #[serde(default)]
    pub practice_mode: PracticeMode,
    #[serde(default)]
    pub hint_count: u32,
    #[serde(default)]
    pub duration_seconds: f64,
    #[serde(default)]
    pub recognized_text: String,
    #[serde(default)]
    pub diff_result: Vec<DiffEntry>,
    #[serde(default)]
    pub accuracy: u8,
    /// None for whole-text practice
    #[serde(default)]
    pub sentence_index: Option<usize>,
    #[serde(default)]
    pub sentence_text: String,
    #[serde(default)]
    pub sentence_accuracy: u8,
    #[serde(default)]
    pub wrong_chars: Vec<char>,
    #[serde(default)]
    pub attempt_no: u32,
    pub created_at: DateTime<Utc>,
}

impl PracticeRecord {
    /// Build a record from a whole-text diff; score and wrong chars are derived
    pub fn from_diff(
        text_id: impl Into<String>,
        text_title: impl Into<String>,
        recognized_text: impl Into<String>,
        diff_result: Vec<DiffEntry>,
    ) -> Self {
        Self {
            text_id: text_id.into(),
            text_title: text_title.into(),
            practice_mode: PracticeMode::default(),
            hint_count: 0,
            duration_seconds: 0.0,
            recognized_text: recognized_text.into(),
            accuracy: accuracy(&diff_result),
            wrong_chars: wrong_chars(&diff_result),
            diff_result,
            sentence_index: None,
            sentence_text: String::new(),
            sentence_accuracy: 0,
            attempt_no: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_mode(mut self, mode: PracticeMode) -> Self {
        self.practice_mode = mode;
        self
    }

    pub fn with_hints(mut self, hint_count: u32) -> Self {
        self.hint_count = hint_count;
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds.max(0.0);
        self
    }

    pub fn with_attempt(mut self, attempt_no: u32) -> Self {
        self.attempt_no = attempt_no;
        self
    }

    /// Attach a sentence-mode result; wrong chars then come from the sentence
    pub fn with_sentence(mut self, sentence: SentenceAttempt) -> Self {
        self.sentence_accuracy = accuracy(&sentence.entries);
        self.wrong_chars = wrong_chars(&sentence.entries);
        self.sentence_index = Some(sentence.index);
        self.sentence_text = sentence.text;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
