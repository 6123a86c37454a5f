//! # Certificate Model
//!
//! The subset of an X.509 certificate that lints in this workspace read.
//! Parsing DER into this model is the job of the host; these types only
//! carry already-decoded attribute values.
//!
//! Subject attributes are kept as ordered sequences because an RDN may
//! repeat. Order and duplicates are preserved exactly as decoded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject distinguished-name attributes relevant to region checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// `countryName` values in RDN order.
    #[serde(default)]
    pub country: Vec<String>,
    /// `stateOrProvinceName` values in RDN order.
    #[serde(default)]
    pub province: Vec<String>,
}

impl Subject {
    /// Build a subject from country and province values.
    pub fn new<C, P>(country: C, province: P) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            country: country.into_iter().map(Into::into).collect(),
            province: province.into_iter().map(Into::into).collect(),
        }
    }
}

/// A decoded certificate as seen by lints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Subject attributes.
    pub subject: Subject,
    /// Start of the validity period; drives effective-date gating.
    pub not_before: DateTime<Utc>,
}

impl Certificate {
    /// Build a certificate from a subject and its `notBefore` instant.
    pub fn new(subject: Subject, not_before: DateTime<Utc>) -> Self {
        Self {
            subject,
            not_before,
        }
    }
}
