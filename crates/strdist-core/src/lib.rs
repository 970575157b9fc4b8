//! strdist Core
//!
//! Approximate string matching on character n-grams.
//!
//! - [`ngram`] - split a string into a multiset of n-grams
//! - [`jaccard`] - set and multiset Jaccard similarity and distance
//! - [`case`] - case normalization applied before splitting
//! - [`finder`] - filter and rank a population against a target
//!
//! # Example
//!
//! ```rust
//! use strdist_core::{jaccard_index, ngrams, CaseMapper, Finder};
//!
//! let a = ngrams("abc", 2).unwrap();
//! let b = ngrams("abcd", 2).unwrap();
//! assert!((jaccard_index(&a, &b) - 2.0 / 3.0).abs() < 1e-9);
//!
//! let finder = Finder::new(2, 0, 0.3, CaseMapper::ForceLower).unwrap();
//! let best = finder.find_top_n("", ["", "HELLO", "hel", "world"], 1);
//! assert_eq!(best[0].value, "");
//! assert_eq!(best[0].score, 1.0);
//! ```

pub mod case;
pub mod error;
pub mod finder;
pub mod jaccard;
pub mod ngram;

// Re-export main types at crate root
pub use case::CaseMapper;
pub use error::{Error, Result};
pub use finder::{Finder, FinderConfig, MatchResult};
pub use jaccard::{
    jaccard_distance, jaccard_index, jaccard_similarity, weighted_jaccard_distance,
    weighted_jaccard_index, weighted_jaccard_similarity,
};
pub use ngram::{ngrams, NGramSet};
