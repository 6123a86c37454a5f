//! # `n_subject_state_unknown`
//!
//! The Subject `stateOrProvinceName` SHOULD be an official region of the
//! country named in `countryName`. Applies only to certificates whose
//! Subject carries at least one province value.
//!
//! Concludes `Pass`, `Notice` (region not in a non-authoritative list) or
//! `Warn` (region absent from an authoritative list). A lookup failure is
//! reported as a [`LintError::ContractViolation`] and the host records the
//! lint as `Fatal`.

use std::sync::Arc;

use pkilint_core::{
    Certificate, EffectiveDate, LintError, LintMetadata, LintResult, LintSource,
};
use pkilint_regions::RegionLookup;

use crate::classify::classify_subject_regions;
use crate::lint::Lint;

/// Checks Subject provinces against the region lists of Subject countries.
#[derive(Debug)]
pub struct SubjectStateUnknown {
    metadata: LintMetadata,
    lookup: Arc<dyn RegionLookup>,
}

impl SubjectStateUnknown {
    /// Registered lint name.
    pub const NAME: &'static str = "n_subject_state_unknown";

    /// Create the lint backed by `lookup`.
    pub fn new(lookup: Arc<dyn RegionLookup>) -> Self {
        Self {
            metadata: LintMetadata {
                name: Self::NAME.to_string(),
                description: "The state/province name field SHOULD contain an official region \
                              value for the country in which the subject's place of business \
                              is located."
                    .to_string(),
                citation: "PKIC".to_string(),
                source: LintSource::Community,
                effective_date: EffectiveDate::Always,
            },
            lookup,
        }
    }
}

impl Lint for SubjectStateUnknown {
    fn metadata(&self) -> &LintMetadata {
        &self.metadata
    }

    fn check_applies(&self, cert: &Certificate) -> bool {
        !cert.subject.province.is_empty()
    }

    fn execute(&self, cert: &Certificate) -> Result<LintResult, LintError> {
        let subject = &cert.subject;
        classify_subject_regions(&subject.country, &subject.province, self.lookup.as_ref())
            .map(LintResult::new)
            .map_err(|e| LintError::ContractViolation {
                lint: Self::NAME.to_string(),
                detail: e.to_string(),
            })
    }
}
