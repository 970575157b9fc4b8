//! Finder configuration

use crate::case::CaseMapper;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Matching parameters shared by every call on a [`super::Finder`]
///
/// Fields omitted from a serialized config take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// Characters per n-gram, at least 1
    pub ngram_len: usize,
    /// Targets and candidates with fewer characters than this never match
    pub min_string_length: usize,
    /// Lowest weighted Jaccard score accepted, in `[0, 1]`
    pub threshold: f64,
    pub case_mapper: CaseMapper,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            ngram_len: 2,
            min_string_length: 0,
            threshold: 0.3,
            case_mapper: CaseMapper::NoChange,
        }
    }
}

impl FinderConfig {
    pub fn new(
        ngram_len: usize,
        min_string_length: usize,
        threshold: f64,
        case_mapper: CaseMapper,
    ) -> Self {
        Self {
            ngram_len,
            min_string_length,
            threshold,
            case_mapper,
        }
    }

    /// Check every parameter is in range
    pub fn validate(&self) -> Result<()> {
        if self.ngram_len == 0 {
            return Err(Error::invalid("ngram_len", "must be at least 1"));
        }
        // Also rejects NaN
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::invalid(
                "threshold",
                format!("{} is outside [0, 1]", self.threshold),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_valid() {
        assert!(FinderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_threshold_bounds() {
        for threshold in [0.0, 0.5, 1.0] {
            let config = FinderConfig::new(2, 0, threshold, CaseMapper::NoChange);
            assert!(config.validate().is_ok(), "threshold {}", threshold);
        }
        for threshold in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let config = FinderConfig::new(2, 0, threshold, CaseMapper::NoChange);
            assert!(
                matches!(
                    config.validate(),
                    Err(Error::InvalidParameter {
                        name: "threshold",
                        ..
                    })
                ),
                "threshold {}",
                threshold
            );
        }
    }

    #[test]
    fn test_zero_ngram_len() {
        let config = FinderConfig::new(0, 0, 0.5, CaseMapper::NoChange);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "ngram_len",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FinderConfig =
            serde_json::from_str(r#"{"ngram_len": 3, "case_mapper": "force-lower"}"#).unwrap();
        assert_eq!(
            config,
            FinderConfig::new(3, 0, 0.3, CaseMapper::ForceLower)
        );
    }

    #[test]
    fn test_unknown_json_field_rejected() {
        let result: std::result::Result<FinderConfig, _> =
            serde_json::from_str(r#"{"ngram_length": 3}"#);
        assert!(result.is_err());
    }
}
