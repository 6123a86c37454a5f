//! # Lint Status — Single Source of Truth
//!
//! Defines the `LintStatus` enum shared by every lint and by the host that
//! runs them, plus the `LintResult` record a host stores per lint.
//!
//! ## Ordering
//!
//! ```text
//! NotApplicable < NotEffective < Pass < Notice < Warn < Error < Fatal
//! ```
//!
//! The two gate statuses sort below `Pass` because the lint made no
//! statement about the certificate. `Fatal` sorts last: the lint could not
//! be evaluated at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Outcome of running one lint against one certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintStatus {
    /// The lint's applicability check rejected the certificate.
    NotApplicable,
    /// The certificate predates the lint's effective date.
    NotEffective,
    /// The certificate satisfies the lint.
    Pass,
    /// Something worth a look, not a violation.
    Notice,
    /// A SHOULD-level violation.
    Warn,
    /// A MUST-level violation.
    Error,
    /// The lint could not be evaluated.
    Fatal,
}

impl LintStatus {
    /// Returns all statuses in severity order.
    pub fn all() -> &'static [LintStatus] {
        &[
            Self::NotApplicable,
            Self::NotEffective,
            Self::Pass,
            Self::Notice,
            Self::Warn,
            Self::Error,
            Self::Fatal,
        ]
    }

    /// Returns the snake_case identifier for this status.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotApplicable => "not_applicable",
            Self::NotEffective => "not_effective",
            Self::Pass => "pass",
            Self::Notice => "notice",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LintStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_applicable" => Ok(Self::NotApplicable),
            "not_effective" => Ok(Self::NotEffective),
            "pass" => Ok(Self::Pass),
            "notice" => Ok(Self::Notice),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// The record a host keeps for one lint on one certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// The status the lint (or the host gate) concluded.
    pub status: LintStatus,
    /// Free-form explanation, set for `Fatal` results and optional otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LintResult {
    /// A result carrying only a status.
    pub fn new(status: LintStatus) -> Self {
        Self {
            status,
            details: None,
        }
    }

    /// A result with an explanation attached.
    pub fn with_details(status: LintStatus, details: impl Into<String>) -> Self {
        Self {
            status,
            details: Some(details.into()),
        }
    }
}

impl From<LintStatus> for LintResult {
    fn from(status: LintStatus) -> Self {
        Self::new(status)
    }
}
