//! # Region Check Contract
//!
//! The [`RegionLookup`] trait is the seam between lints and whatever
//! knowledge base answers region questions. Implementations must be total
//! over any `(country, province)` pair of strings: malformed or unknown
//! country codes are answered with [`RegionCheck::UnknownRegion`], not an
//! error. `Err` is reserved for a knowledge base that cannot answer at all.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::RegionError;

/// Answer to "is this province a region of this country?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionCheck {
    /// The province is a known region of the country.
    Valid,
    /// No match, and the country's region list is not authoritative.
    UnknownRegion,
    /// No match, and the country's region list is authoritative.
    InvalidRegion,
}

impl RegionCheck {
    /// Returns the snake_case identifier for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::UnknownRegion => "unknown_region",
            Self::InvalidRegion => "invalid_region",
        }
    }
}

impl fmt::Display for RegionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionCheck {
    type Err = RegionError;

    /// Parse an outcome code produced by an external knowledge base.
    ///
    /// Anything outside the three defined codes is a contract violation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(Self::Valid),
            "unknown_region" => Ok(Self::UnknownRegion),
            "invalid_region" => Ok(Self::InvalidRegion),
            other => Err(RegionError::UnrecognizedOutcome(other.to_string())),
        }
    }
}

/// A knowledge base that classifies `(country, province)` pairs.
///
/// Implementations are shared across threads and must not depend on call
/// order: the same pair always yields the same answer.
pub trait RegionLookup: Send + Sync + fmt::Debug {
    /// Classify `province` against the region list of `country`.
    fn check_region(&self, country: &str, province: &str) -> Result<RegionCheck, RegionError>;
}

impl<T: RegionLookup + ?Sized> RegionLookup for Arc<T> {
    fn check_region(&self, country: &str, province: &str) -> Result<RegionCheck, RegionError> {
        (**self).check_region(country, province)
    }
}

impl<T: RegionLookup + ?Sized> RegionLookup for &T {
    fn check_region(&self, country: &str, province: &str) -> Result<RegionCheck, RegionError> {
        (**self).check_region(country, province)
    }
}
