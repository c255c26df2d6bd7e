//! Diff engine tying normalization, alignment and classification together

use tracing::debug;

use crate::align::align;
use crate::classify::classify;
use crate::config::DiffConfig;
use crate::models::{DiffEntry, DiffOptions};
use crate::normalize::normalize;
use crate::phonetic::{PhoneticMatcher, PinyinLookup, PronunciationLookup, ReadingCache};

/// Compares recited transcripts against reference texts.
///
/// Owns the phonetic matcher and its reading cache, so one engine can be kept
/// for a whole session to amortize pinyin lookups.
#[derive(Debug, Clone)]
pub struct DiffEngine<L = PinyinLookup> {
    matcher: PhoneticMatcher<L>,
}

impl DiffEngine<PinyinLookup> {
    pub fn new() -> Self {
        Self::with_lookup(PinyinLookup)
    }

    pub fn with_config(config: &DiffConfig) -> Self {
        let cache = match config.reading_cache_capacity {
            Some(capacity) => ReadingCache::with_capacity(capacity),
            None => ReadingCache::new(),
        };
        let matcher = PhoneticMatcher::with_cache(PinyinLookup, cache);
        let matcher = if config.homophones {
            matcher
        } else {
            matcher.exact_only()
        };
        Self { matcher }
    }
}

impl Default for DiffEngine<PinyinLookup> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: PronunciationLookup> DiffEngine<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            matcher: PhoneticMatcher::new(lookup),
        }
    }

    pub fn matcher(&self) -> &PhoneticMatcher<L> {
        &self.matcher
    }

    pub fn matcher_mut(&mut self) -> &mut PhoneticMatcher<L> {
        &mut self.matcher
    }

    /// Classify every character of `reference` against `candidate`.
    ///
    /// The result has exactly one entry per char of `reference`.
    pub fn diff(&mut self, reference: &str, candidate: &str, options: &DiffOptions) -> Vec<DiffEntry> {
        let source = normalize(reference);
        let target = normalize(candidate);

        let matcher = &mut self.matcher;
        let matched = align(&source.filtered, &target.filtered, |a, b| {
            matcher.is_equivalent(a, b)
        });

        debug!(
            "Aligned {} reference / {} candidate chars: {} matched, {} readings cached",
            source.filtered.len(),
            target.filtered.len(),
            matched.len(),
            self.matcher.cache().len()
        );

        classify(&source, &matched, options.tail_unmatched_as_normal)
    }
}

/// Diff with a fresh engine; prefer [`DiffEngine`] when comparing repeatedly
pub fn diff(reference: &str, candidate: &str, options: &DiffOptions) -> Vec<DiffEntry> {
    DiffEngine::new().diff(reference, candidate, options)
}
