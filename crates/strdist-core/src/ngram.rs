//! Character n-gram extraction
//!
//! An [`NGramSet`] is the multiset of every run of `n` consecutive characters
//! in a string, taken with a sliding window of stride one. Lengths and window
//! boundaries are counted in `char`s, so multi-byte text never produces a
//! gram that splits a code point.

use crate::error::{Error, Result};
use ahash::AHashMap;

/// Multiset of the n-grams of a single string
#[derive(Debug, Clone)]
pub struct NGramSet {
    ngram_len: usize,
    counts: AHashMap<String, usize>,
    total: usize,
}

impl NGramSet {
    /// Extract the n-grams of `s`.
    ///
    /// Strings shorter than `n` characters give an empty set. Fails only when
    /// `n` is zero.
    pub fn new(s: &str, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid("ngram_len", "must be at least 1"));
        }
        Ok(Self::extract(s, n))
    }

    /// Extraction for an already validated `n >= 1`
    pub(crate) fn extract(s: &str, n: usize) -> Self {
        debug_assert!(n > 0);

        // Byte offset of every char start, plus the end of the string
        let bounds: Vec<usize> = s
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(s.len()))
            .collect();

        let mut counts: AHashMap<String, usize> = AHashMap::new();
        let mut total = 0;
        for window in bounds.windows(n + 1) {
            let gram = &s[window[0]..window[n]];
            match counts.get_mut(gram) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(gram.to_string(), 1);
                }
            }
            total += 1;
        }

        Self {
            ngram_len: n,
            counts,
            total,
        }
    }

    /// Length in characters of every gram in the set
    pub fn ngram_len(&self) -> usize {
        self.ngram_len
    }

    /// Number of distinct grams
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all occurrence counts
    pub fn total_count(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `gram`, zero when absent
    pub fn count(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    pub fn contains(&self, gram: &str) -> bool {
        self.counts.contains_key(gram)
    }

    /// Iterate over `(gram, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(gram, count)| (gram.as_str(), *count))
    }
}

/// Shorthand for [`NGramSet::new`]
pub fn ngrams(s: &str, n: usize) -> Result<NGramSet> {
    NGramSet::new(s, n)
}
