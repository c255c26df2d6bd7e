//! WebAssembly utilities for the recitation UI
//!
//! Exposes the diff engine to the mini-program / web front end. All results
//! are JSON strings in the shape the pages and the record store already use:
//! `[{"char": "学", "status": "correct"}, ...]`.
//!
//! ## Usage from JavaScript
//!
//! ```javascript
//! import { diff_chars, calc_accuracy, DiffSession } from 'recite-wasm-utils';
//!
//! const result = diff_chars(text.content, recognizedText, '{"tailUnmatchedAsNormal": true}');
//! const accuracy = calc_accuracy(result);
//!
//! const session = new DiffSession(true);
//! const again = JSON.parse(session.diff(text.content, recognizedText));
//! ```

use recite_diff::{
    accuracy, sentence_breakdown, split_sentences, DiffConfig, DiffEngine, DiffEntry, DiffOptions,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Errors raised while decoding or encoding JSON across the boundary
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("JSON parse error: {0}")]
    Parse(serde_json::Error),

    #[error("JSON serialize error: {0}")]
    Serialize(serde_json::Error),
}

impl From<BindingError> for JsValue {
    fn from(err: BindingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn parse_options(options_json: Option<&str>) -> Result<DiffOptions, BindingError> {
    match options_json.map(str::trim) {
        None | Some("") | Some("null") | Some("undefined") => Ok(DiffOptions::default()),
        Some(json) => serde_json::from_str(json).map_err(BindingError::Parse),
    }
}

fn parse_entries(diff_json: &str) -> Result<Vec<DiffEntry>, BindingError> {
    let trimmed = diff_json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).map_err(BindingError::Parse)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, BindingError> {
    serde_json::to_string(value).map_err(BindingError::Serialize)
}

/// Diff a fresh pair of texts and return the JSON entries
pub fn diff_to_json(
    engine: &mut DiffEngine,
    reference: Option<&str>,
    candidate: Option<&str>,
    options_json: Option<&str>,
) -> Result<String, BindingError> {
    let options = parse_options(options_json)?;
    let entries = engine.diff(
        reference.unwrap_or_default(),
        candidate.unwrap_or_default(),
        &options,
    );
    log::debug!("Diffed {} reference chars", entries.len());
    to_json(&entries)
}

/// Accuracy (0-100) of a JSON diff result
pub fn accuracy_from_json(diff_json: &str) -> Result<u8, BindingError> {
    Ok(accuracy(&parse_entries(diff_json)?))
}

/// Per-sentence scores of a whole-text JSON diff result
pub fn breakdown_to_json(text: &str, diff_json: &str) -> Result<String, BindingError> {
    let entries = parse_entries(diff_json)?;
    to_json(&sentence_breakdown(text, &entries))
}

/// Compare recited text against the reference
///
/// # Arguments
/// * `reference` - Canonical text (missing = empty)
/// * `candidate` - Recognized transcript (missing = empty)
/// * `options_json` - Optional `{"tailUnmatchedAsNormal": bool}`
///
/// # Returns
/// JSON array of `{char, status}`, one per reference character
#[wasm_bindgen]
pub fn diff_chars(
    reference: Option<String>,
    candidate: Option<String>,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let mut engine = DiffEngine::new();
    Ok(diff_to_json(
        &mut engine,
        reference.as_deref(),
        candidate.as_deref(),
        options_json.as_deref(),
    )?)
}

/// Accuracy percentage of a `diff_chars` result
#[wasm_bindgen]
pub fn calc_accuracy(diff_json: &str) -> Result<u8, JsValue> {
    Ok(accuracy_from_json(diff_json)?)
}

/// Split a text into practice sentences
///
/// # Returns
/// JSON array of `{index, start, end, text}` (char offsets)
#[wasm_bindgen]
pub fn sentences(text: &str) -> Result<String, JsValue> {
    Ok(to_json(&split_sentences(text))?)
}

/// Score each sentence of a whole-text `diff_chars` result
///
/// # Returns
/// JSON array of `{index, text, accuracy, reached, wrong_chars}`
#[wasm_bindgen]
pub fn sentence_scores(text: &str, diff_json: &str) -> Result<String, JsValue> {
    Ok(breakdown_to_json(text, diff_json)?)
}

/// Long-lived diff engine that keeps its pinyin cache between calls
#[wasm_bindgen]
pub struct DiffSession {
    engine: DiffEngine,
}

#[wasm_bindgen]
impl DiffSession {
    /// Create a session
    ///
    /// # Arguments
    /// * `homophones` - Match characters that share a pinyin reading
    #[wasm_bindgen(constructor)]
    pub fn new(homophones: bool) -> DiffSession {
        let config = DiffConfig {
            homophones,
            ..DiffConfig::default()
        };
        DiffSession {
            engine: DiffEngine::with_config(&config),
        }
    }

    /// Same as [`diff_chars`] but reusing this session's cache
    #[wasm_bindgen]
    pub fn diff(
        &mut self,
        reference: Option<String>,
        candidate: Option<String>,
        options_json: Option<String>,
    ) -> Result<String, JsValue> {
        Ok(diff_to_json(
            &mut self.engine,
            reference.as_deref(),
            candidate.as_deref(),
            options_json.as_deref(),
        )?)
    }

    /// Number of characters with memoized readings
    #[wasm_bindgen]
    pub fn cache_size(&self) -> usize {
        self.engine.matcher().cache().len()
    }

    #[wasm_bindgen]
    pub fn clear_cache(&mut self) {
        self.engine.matcher_mut().clear_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_to_json_shape() {
        let mut engine = DiffEngine::new();
        let json = diff_to_json(&mut engine, Some("学，而"), Some("学"), None).unwrap();
        assert_eq!(
            json,
            r#"[{"char":"学","status":"correct"},{"char":"，","status":"punctuation"},{"char":"而","status":"missing"}]"#
        );
    }

    #[test]
    fn test_missing_inputs_are_empty() {
        let mut engine = DiffEngine::new();
        assert_eq!(diff_to_json(&mut engine, None, Some("学"), None).unwrap(), "[]");
        let json = diff_to_json(&mut engine, Some("学"), None, Some("undefined")).unwrap();
        assert_eq!(accuracy_from_json(&json).unwrap(), 0);
    }

    #[test]
    fn test_tail_option_from_json() {
        let mut engine = DiffEngine::new();
        let json = diff_to_json(
            &mut engine,
            Some("甲乙丙丁"),
            Some("甲乙"),
            Some(r#"{"tailUnmatchedAsNormal": true}"#),
        )
        .unwrap();
        assert_eq!(accuracy_from_json(&json).unwrap(), 100);

        let json = diff_to_json(&mut engine, Some("甲乙丙丁"), Some("甲乙"), Some("{}")).unwrap();
        assert_eq!(accuracy_from_json(&json).unwrap(), 50);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let mut engine = DiffEngine::new();
        assert!(matches!(
            diff_to_json(&mut engine, Some("甲"), Some("甲"), Some("{not json")),
            Err(BindingError::Parse(_))
        ));
        assert!(accuracy_from_json("[{\"char\":\"甲\"}]").is_err());
        assert_eq!(accuracy_from_json("null").unwrap(), 0);
        assert_eq!(accuracy_from_json("").unwrap(), 0);
    }

    #[test]
    fn test_breakdown_to_json() {
        let mut engine = DiffEngine::new();
        let text = "甲乙。丙丁。";
        let diff_json = diff_to_json(&mut engine, Some(text), Some("甲乙丙"), None).unwrap();
        let json = breakdown_to_json(text, &diff_json).unwrap();
        let scores: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0]["accuracy"], 100);
        assert_eq!(scores[1]["accuracy"], 50);
        assert_eq!(scores[1]["wrong_chars"], serde_json::json!(["丁"]));
    }

    #[test]
    fn test_session_keeps_cache() {
        let mut session = DiffSession::new(true);
        session
            .diff(Some("做".to_string()), Some("作".to_string()), None)
            .unwrap();
        assert_eq!(session.cache_size(), 2);
        session.clear_cache();
        assert_eq!(session.cache_size(), 0);
    }
}
