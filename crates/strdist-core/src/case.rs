//! Case normalization applied before n-gram extraction

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// How strings are normalized before they are split into n-grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMapper {
    /// Compare strings as given
    #[default]
    NoChange,
    /// Fold both sides to lower case
    ForceLower,
}

impl CaseMapper {
    /// Normalize `s`. `NoChange` borrows the input.
    #[inline]
    pub fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self {
            CaseMapper::NoChange => Cow::Borrowed(s),
            CaseMapper::ForceLower => Cow::Owned(s.to_lowercase()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMapper::NoChange => "no-change",
            CaseMapper::ForceLower => "force-lower",
        }
    }
}

impl fmt::Display for CaseMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMapper {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-change" => Ok(CaseMapper::NoChange),
            "force-lower" => Ok(CaseMapper::ForceLower),
            other => Err(Error::invalid(
                "case_mapper",
                format!("unknown case mapper '{}'", other),
            )),
        }
    }
}
