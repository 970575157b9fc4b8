//! Jaccard similarity over n-gram sets
//!
//! Two families are provided:
//!
//! - **Unweighted**: grams are treated as a plain set,
//!   `|A ∩ B| / |A ∪ B|`.
//! - **Weighted**: grams keep their counts, `Σ min(a, b) / (|A| + |B|)`.
//!
//! The weighted form divides by the *sum* of both multiset sizes, not by
//! `Σ max(a, b)` as the Ruzicka index does, so any pair other than two empty
//! sets scores at most 0.5. Existing thresholds depend on this scale.
//!
//! Two empty sets always score 1.0 (both strings are too short to compare,
//! and are treated as identical).

use crate::error::Result;
use crate::ngram::NGramSet;

/// Set-based Jaccard index of two n-gram sets.
pub fn jaccard_index(a: &NGramSet, b: &NGramSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let (small, large) = if a.distinct_count() <= b.distinct_count() {
        (a, b)
    } else {
        (b, a)
    };
    let intersection = small.iter().filter(|(gram, _)| large.contains(gram)).count();
    let union = a.distinct_count() + b.distinct_count() - intersection;

    intersection as f64 / union as f64
}

/// Multiset Jaccard index of two n-gram sets, normalized by the sum of their
/// total counts.
pub fn weighted_jaccard_index(a: &NGramSet, b: &NGramSet) -> f64 {
    let total = a.total_count() + b.total_count();
    if total == 0 {
        return 1.0;
    }

    let intersection: usize = a
        .iter()
        .map(|(gram, count)| count.min(b.count(gram)))
        .sum();

    intersection as f64 / total as f64
}

/// `1 - jaccard_index` of the `n`-grams of two strings.
pub fn jaccard_distance(s1: &str, s2: &str, n: usize) -> Result<f64> {
    Ok(1.0 - jaccard_similarity(s1, s2, n)?)
}

/// `1 - weighted_jaccard_index` of the `n`-grams of two strings.
pub fn weighted_jaccard_distance(s1: &str, s2: &str, n: usize) -> Result<f64> {
    Ok(1.0 - weighted_jaccard_similarity(s1, s2, n)?)
}

/// [`jaccard_index`] of the `n`-grams of two strings.
pub fn jaccard_similarity(s1: &str, s2: &str, n: usize) -> Result<f64> {
    let a = NGramSet::new(s1, n)?;
    let b = NGramSet::new(s2, n)?;
    Ok(jaccard_index(&a, &b))
}

/// [`weighted_jaccard_index`] of the `n`-grams of two strings.
pub fn weighted_jaccard_similarity(s1: &str, s2: &str, n: usize) -> Result<f64> {
    let a = NGramSet::new(s1, n)?;
    let b = NGramSet::new(s2, n)?;
    Ok(weighted_jaccard_index(&a, &b))
}
