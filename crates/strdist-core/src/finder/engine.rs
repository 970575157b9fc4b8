//! Finder - scores a population against a target

use super::config::FinderConfig;
use crate::case::CaseMapper;
use crate::error::Result;
use crate::jaccard::weighted_jaccard_index;
use crate::ngram::NGramSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A population entry that scored at or above the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The entry as supplied, before case mapping
    pub value: String,
    pub score: f64,
}

impl MatchResult {
    fn new(value: String, score: f64) -> Self {
        Self { value, score }
    }
}

/// Reusable fuzzy matcher over weighted n-gram Jaccard similarity
///
/// Holds only its validated configuration, so one finder can serve any
/// number of independent calls, from any thread.
#[derive(Debug, Clone)]
pub struct Finder {
    config: FinderConfig,
}

impl Finder {
    /// Create a finder, rejecting a zero n-gram length or a threshold outside
    /// `[0, 1]`
    pub fn new(
        ngram_len: usize,
        min_string_length: usize,
        threshold: f64,
        case_mapper: CaseMapper,
    ) -> Result<Self> {
        Self::from_config(FinderConfig::new(
            ngram_len,
            min_string_length,
            threshold,
            case_mapper,
        ))
    }

    /// Create from an existing configuration
    pub fn from_config(config: FinderConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            ngram_len = config.ngram_len,
            min_string_length = config.min_string_length,
            threshold = config.threshold,
            case_mapper = %config.case_mapper,
            "finder configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Every entry scoring at or above the threshold, in population order
    pub fn find<I, S>(&self, target: &str, population: I) -> Vec<MatchResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(target_grams) = self.target_ngrams(target) else {
            debug!(
                target_len = target.chars().count(),
                min_string_length = self.config.min_string_length,
                "target shorter than minimum length"
            );
            return Vec::new();
        };

        let mut scanned = 0usize;
        let matches: Vec<MatchResult> = population
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter_map(|entry| {
                let entry = entry.as_ref();
                self.score_single(&target_grams, entry)
                    .map(|score| MatchResult::new(entry.to_string(), score))
            })
            .collect();

        debug!(scanned, matched = matches.len(), "population scanned");
        matches
    }

    /// Matches sorted by descending score, at most `max_n` of them
    ///
    /// Equal scores keep population order. `max_n == 0` returns every match.
    pub fn find_top_n<I, S>(&self, target: &str, population: I, max_n: usize) -> Vec<MatchResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matches = self.find(target, population);

        // Stable sort so ties stay in population order
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if max_n > 0 {
            matches.truncate(max_n);
        }
        matches
    }

    /// [`Finder::find`] returning only the matched strings
    pub fn find_strings<I, S>(&self, target: &str, population: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        into_values(self.find(target, population))
    }

    /// [`Finder::find_top_n`] returning only the matched strings
    pub fn find_top_n_strings<I, S>(&self, target: &str, population: I, max_n: usize) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        into_values(self.find_top_n(target, population, max_n))
    }

    /// N-grams of the mapped target, or None when the target is too short
    fn target_ngrams(&self, target: &str) -> Option<NGramSet> {
        let mapped = self.config.case_mapper.apply(target);
        if target.chars().count() < self.config.min_string_length {
            return None;
        }
        Some(NGramSet::extract(&mapped, self.config.ngram_len))
    }

    /// Score one entry, None when it is too short or below the threshold
    fn score_single(&self, target_grams: &NGramSet, entry: &str) -> Option<f64> {
        if entry.chars().count() < self.config.min_string_length {
            return None;
        }

        let mapped = self.config.case_mapper.apply(entry);
        let grams = NGramSet::extract(&mapped, self.config.ngram_len);
        let score = weighted_jaccard_index(target_grams, &grams);

        if score >= self.config.threshold {
            trace!(entry, score, "candidate accepted");
            Some(score)
        } else {
            None
        }
    }
}

fn into_values(matches: Vec<MatchResult>) -> Vec<String> {
    matches.into_iter().map(|m| m.value).collect()
}
