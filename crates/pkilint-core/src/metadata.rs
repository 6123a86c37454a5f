//! # Lint Metadata
//!
//! Static description of a lint: its unique name, the requirement it
//! enforces, where that requirement comes from, and since when it applies.
//! Built once per lint when the lint is constructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The body of requirements a lint is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintSource {
    /// RFC 5280 certificate and CRL profile.
    Rfc5280,
    /// CA/Browser Forum Baseline Requirements.
    CabfBaselineRequirements,
    /// CA/Browser Forum EV Guidelines.
    CabfEvGuidelines,
    /// ETSI ESI certificate policy requirements.
    EtsiEsi,
    /// Mozilla Root Store Policy.
    MozillaRootStorePolicy,
    /// Community-contributed lints (e.g. PKI Consortium guidance).
    Community,
}

impl LintSource {
    /// Returns all sources.
    pub fn all() -> &'static [LintSource] {
        &[
            Self::Rfc5280,
            Self::CabfBaselineRequirements,
            Self::CabfEvGuidelines,
            Self::EtsiEsi,
            Self::MozillaRootStorePolicy,
            Self::Community,
        ]
    }

    /// Returns the snake_case identifier for this source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rfc5280 => "rfc5280",
            Self::CabfBaselineRequirements => "cabf_baseline_requirements",
            Self::CabfEvGuidelines => "cabf_ev_guidelines",
            Self::EtsiEsi => "etsi_esi",
            Self::MozillaRootStorePolicy => "mozilla_root_store_policy",
            Self::Community => "community",
        }
    }
}

impl fmt::Display for LintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LintSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSource(s.to_string()))
    }
}

/// When a lint starts applying to certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveDate {
    /// Applies to every certificate regardless of issuance date.
    Always,
    /// Applies to certificates whose `notBefore` is at or after this instant.
    Since(DateTime<Utc>),
}

impl EffectiveDate {
    /// Whether a certificate issued at `not_before` falls under the lint.
    pub fn covers(&self, not_before: &DateTime<Utc>) -> bool {
        match self {
            Self::Always => true,
            Self::Since(cutoff) => not_before >= cutoff,
        }
    }
}

/// Static, immutable description of a lint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintMetadata {
    /// Unique name, prefixed with the lint's severity letter (`n_`, `w_`, `e_`).
    pub name: String,
    /// Human-readable requirement text.
    pub description: String,
    /// Citation for the requirement (document, section, or body).
    pub citation: String,
    /// Requirement source.
    pub source: LintSource,
    /// Effective date of the requirement.
    pub effective_date: EffectiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn always_covers_everything() {
        let ancient = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!(EffectiveDate::Always.covers(&ancient));
    }

    #[test]
    fn since_is_inclusive() {
        let cutoff = Utc.with_ymd_and_hms(2020, 9, 30, 0, 0, 0).unwrap();
        let effective = EffectiveDate::Since(cutoff);
        assert!(effective.covers(&cutoff));
        assert!(effective.covers(&(cutoff + chrono::Duration::seconds(1))));
        assert!(!effective.covers(&(cutoff - chrono::Duration::seconds(1))));
    }

    #[test]
    fn source_roundtrip() {
        for source in LintSource::all() {
            assert_eq!(source.as_str().parse::<LintSource>(), Ok(*source));
        }
        assert!("pkic".parse::<LintSource>().is_err());
    }

    #[test]
    fn metadata_serializes_snake_case() {
        let meta = LintMetadata {
            name: "n_example".to_string(),
            description: "example".to_string(),
            citation: "PKIC".to_string(),
            source: LintSource::Community,
            effective_date: EffectiveDate::Always,
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["source"], "community");
        assert_eq!(json["effective_date"], "always");
    }
}
