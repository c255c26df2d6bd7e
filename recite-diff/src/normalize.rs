//! Punctuation filtering that keeps original character positions

/// CJK punctuation excluded from comparison and scoring
const CJK_PUNCTUATION: &[char] = &[
    '，', '。', '、', '；', '：', '？', '！', '“', '”', '‘', '’', '（', '）', '《', '》', '〈', '〉',
    '【', '】', '「', '」', '『', '』', '〔', '〕', '…', '—',
];

/// ASCII punctuation and brackets excluded from comparison and scoring
const ASCII_PUNCTUATION: &[char] = &[',', '.', ';', ':', '?', '!', '\'', '"', '(', ')', '[', ']', '{', '}'];

/// Byte-order mark left at the start of files saved by some editors
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Whether a character is punctuation or whitespace (never scored)
pub fn is_punctuation(ch: char) -> bool {
    ch.is_whitespace()
        || ch == BYTE_ORDER_MARK
        || CJK_PUNCTUATION.contains(&ch)
        || ASCII_PUNCTUATION.contains(&ch)
}

/// A scored character and its position in the unfiltered source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredChar {
    pub ch: char,
    /// Char offset in the source string (not a byte offset)
    pub index: usize,
}

/// Source text split into characters plus its punctuation-free view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub all_chars: Vec<char>,
    pub filtered: Vec<FilteredChar>,
}

impl NormalizedText {
    pub fn len(&self) -> usize {
        self.all_chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_chars.is_empty()
    }
}

/// Split `text` into characters and collect the non-punctuation ones with their indices
pub fn normalize(text: &str) -> NormalizedText {
    let all_chars: Vec<char> = text.chars().collect();
    let filtered = all_chars
        .iter()
        .enumerate()
        .filter(|(_, &ch)| !is_punctuation(ch))
        .map(|(index, &ch)| FilteredChar { ch, index })
        .collect();

    NormalizedText {
        all_chars,
        filtered,
    }
}
