//! Fuzzy Finder
//!
//! Filters a population of strings down to those similar to a target.
//!
//! # Pipeline
//!
//! 1. Targets shorter than `min_string_length` match nothing
//! 2. Entries shorter than `min_string_length` are skipped
//! 3. Target and entry are case-mapped and split into n-grams
//! 4. Entries whose weighted Jaccard index reaches `threshold` are kept
//! 5. `find_top_n` additionally ranks by score and truncates
//!
//! # Example
//!
//! ```rust
//! use strdist_core::{CaseMapper, Finder};
//!
//! let finder = Finder::new(2, 4, 0.3, CaseMapper::ForceLower).unwrap();
//! let matches = finder.find_strings("hello", ["HELL", "world"]);
//! assert_eq!(matches, vec!["HELL"]);
//! ```

mod config;
mod engine;

pub use config::FinderConfig;
pub use engine::{Finder, MatchResult};
