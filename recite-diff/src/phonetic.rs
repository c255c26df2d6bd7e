//! Phonetic equivalence between Chinese characters
//!
//! Two characters are equivalent when they are identical or share at least
//! one tone-less pinyin reading. Heteronyms contribute every reading, so
//! `还` (huan/hai) matches both `环` and `孩`.

use std::collections::HashMap;
use std::rc::Rc;

use pinyin::ToPinyinMulti;
use tracing::{debug, warn};

/// Source of romanized readings for a single character
pub trait PronunciationLookup {
    /// All tone-less readings of `ch`; empty when none can be resolved
    fn readings(&self, ch: char) -> Vec<String>;
}

/// Pinyin lookup backed by the `pinyin` crate's heteronym tables
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinLookup;

impl PronunciationLookup for PinyinLookup {
    fn readings(&self, ch: char) -> Vec<String> {
        let mut readings: Vec<String> = Vec::new();
        if let Some(multi) = ch.to_pinyin_multi() {
            for reading in multi {
                let plain = reading.plain();
                if !readings.iter().any(|r| r == plain) {
                    readings.push(plain.to_string());
                }
            }
        }
        readings
    }
}

/// Memoized readings per character
///
/// Purely a performance cache: clearing it never changes a match result.
#[derive(Debug, Clone, Default)]
pub struct ReadingCache {
    entries: HashMap<char, Rc<[String]>>,
    capacity: Option<usize>,
}

impl ReadingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that is cleared whenever it would grow past `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(1024)),
            capacity: Some(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn get_or_insert_with<F>(&mut self, ch: char, compute: F) -> Rc<[String]>
    where
        F: FnOnce() -> Vec<String>,
    {
        if !self.entries.contains_key(&ch) {
            if let Some(capacity) = self.capacity {
                if self.entries.len() >= capacity {
                    warn!(
                        "Reading cache reached {} entries, clearing",
                        self.entries.len()
                    );
                    self.entries.clear();
                }
            }
        }
        Rc::clone(self.entries.entry(ch).or_insert_with(|| compute().into()))
    }
}

/// Equivalence oracle owning its lookup and cache
#[derive(Debug, Clone)]
pub struct PhoneticMatcher<L = PinyinLookup> {
    lookup: L,
    cache: ReadingCache,
    /// When false only identical characters match
    homophones: bool,
}

impl Default for PhoneticMatcher<PinyinLookup> {
    fn default() -> Self {
        Self::new(PinyinLookup)
    }
}

impl<L: PronunciationLookup> PhoneticMatcher<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_cache(lookup, ReadingCache::new())
    }

    pub fn with_cache(lookup: L, cache: ReadingCache) -> Self {
        Self {
            lookup,
            cache,
            homophones: true,
        }
    }

    /// Restrict matching to identical characters
    pub fn exact_only(mut self) -> Self {
        self.homophones = false;
        self
    }

    pub fn cache(&self) -> &ReadingCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        debug!("Clearing reading cache ({} entries)", self.cache.len());
        self.cache.clear();
    }

    /// Memoized readings of `ch`
    pub fn readings(&mut self, ch: char) -> Rc<[String]> {
        let lookup = &self.lookup;
        self.cache.get_or_insert_with(ch, || lookup.readings(ch))
    }

    /// Whether `a` and `b` count as the same spoken character
    pub fn is_equivalent(&mut self, a: char, b: char) -> bool {
        if a == b {
            return true;
        }
        if !self.homophones {
            return false;
        }

        // Shared handles stay valid even if the cache is cleared in between
        let a_readings = self.readings(a);
        if a_readings.is_empty() {
            return false;
        }
        let b_readings = self.readings(b);
        a_readings.iter().any(|r| b_readings.contains(r))
    }
}
