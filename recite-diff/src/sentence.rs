//! Sentence segmentation for sentence-by-sentence practice and reporting

use serde::{Deserialize, Serialize};

use crate::models::DiffEntry;
use crate::normalize::is_punctuation;
use crate::report::wrong_chars;
use crate::score::accuracy;

const SENTENCE_TERMINATORS: &[char] = &['。', '！', '？', '；', '!', '?', ';'];

/// Closing marks that belong to the sentence they follow
const CLOSING_MARKS: &[char] = &['”', '’', '」', '』', '）', '》', '"', '\'', ')'];

/// A sentence of a text, located by char offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub index: usize,
    /// First char offset (inclusive)
    pub start: usize,
    /// Last char offset (exclusive)
    pub end: usize,
    pub text: String,
}

/// Score of one sentence within a whole-text diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceScore {
    pub index: usize,
    pub text: String,
    pub accuracy: u8,
    /// False when every scored char of the sentence was still unread
    pub reached: bool,
    pub wrong_chars: Vec<char>,
}

/// Split `text` after sentence-ending punctuation and at line breaks.
///
/// Terminators and any closing quotes right after them stay with their
/// sentence. Sentences without a single scorable character are dropped.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if start.is_none() {
            if ch.is_whitespace() {
                i += 1;
                continue;
            }
            start = Some(i);
        }

        let end = if ch == '\n' || ch == '\r' {
            Some(i)
        } else if SENTENCE_TERMINATORS.contains(&ch) {
            let mut end = i + 1;
            while end < chars.len() && CLOSING_MARKS.contains(&chars[end]) {
                end += 1;
            }
            Some(end)
        } else {
            None
        };

        match (start, end) {
            (Some(s), Some(e)) => {
                push_sentence(&mut sentences, &chars, s, e);
                start = None;
                i = e.max(i + 1);
            }
            _ => i += 1,
        }
    }

    if let Some(s) = start {
        push_sentence(&mut sentences, &chars, s, chars.len());
    }

    sentences
}

fn push_sentence(sentences: &mut Vec<Sentence>, chars: &[char], start: usize, end: usize) {
    let slice = &chars[start..end];
    // Trim trailing whitespace so offsets cover only the sentence itself
    let trimmed = slice.len() - slice.iter().rev().take_while(|c| c.is_whitespace()).count();
    let slice = &slice[..trimmed];

    if slice.iter().all(|&c| is_punctuation(c)) {
        return;
    }

    sentences.push(Sentence {
        index: sentences.len(),
        start,
        end: start + slice.len(),
        text: slice.iter().collect(),
    });
}

/// Score each sentence of `text` using a diff computed over the whole text.
///
/// `entries` must come from diffing `text` itself; sentences beyond the end
/// of `entries` are scored on whatever part of them is covered.
pub fn sentence_breakdown(text: &str, entries: &[DiffEntry]) -> Vec<SentenceScore> {
    split_sentences(text)
        .into_iter()
        .map(|sentence| {
            let start = sentence.start.min(entries.len());
            let end = sentence.end.min(entries.len());
            let slice = &entries[start..end];

            SentenceScore {
                index: sentence.index,
                accuracy: accuracy(slice),
                reached: slice.iter().any(|e| e.status.is_scored()),
                wrong_chars: wrong_chars(slice),
                text: sentence.text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::diff;
    use crate::models::DiffOptions;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_split_on_terminators() {
        let sentences = split_sentences("学而时习之，不亦说乎？有朋自远方来，不亦乐乎？");
        assert_eq!(
            texts(&sentences),
            vec!["学而时习之，不亦说乎？", "有朋自远方来，不亦乐乎？"]
        );
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[1].start, 11);
        assert_eq!(sentences[1].end, 23);
    }

    #[test]
    fn test_split_keeps_closing_quote() {
        let sentences = split_sentences("子曰：“学而时习之，不亦说乎？”人不知而不愠。");
        assert_eq!(
            texts(&sentences),
            vec!["子曰：“学而时习之，不亦说乎？”", "人不知而不愠。"]
        );
    }

    #[test]
    fn test_split_on_lines_and_trailing_text() {
        let sentences = split_sentences("  关关雎鸠，在河之洲\n\n窈窕淑女，君子好逑");
        assert_eq!(texts(&sentences), vec!["关关雎鸠，在河之洲", "窈窕淑女，君子好逑"]);
        assert_eq!(sentences[0].start, 2);
        assert_eq!(sentences[1].start, 13);
    }

    #[test]
    fn test_split_drops_punctuation_only() {
        assert!(split_sentences("。。！\n  \n").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_breakdown_with_tail_tolerance() {
        let text = "床前明月光，疑是地上霜。举头望明月，低头思故乡。";
        let entries = diff(text, "床前明月光疑是地上", &DiffOptions::tail_tolerant());
        let scores = sentence_breakdown(text, &entries);

        assert_eq!(scores.len(), 2);
        assert!(scores[0].reached);
        assert_eq!(scores[0].accuracy, 100);
        assert!(scores[0].wrong_chars.is_empty());
        assert!(!scores[1].reached);
        assert_eq!(scores[1].accuracy, 0);
    }

    #[test]
    fn test_breakdown_reports_wrong_chars() {
        let text = "甲乙丙。丁戊己。";
        let entries = diff(text, "甲丙丁戊己", &DiffOptions::default());
        let scores = sentence_breakdown(text, &entries);
        assert_eq!(scores[0].wrong_chars, vec!['乙']);
        assert_eq!(scores[0].accuracy, 67);
        assert!(scores[1].wrong_chars.is_empty());
        assert_eq!(scores[1].accuracy, 100);
    }
}
