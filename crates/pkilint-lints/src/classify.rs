//! # Region Consistency Classifier
//!
//! Decides a single status from the Subject's country and province
//! sequences.
//!
//! ## Evaluation Order
//!
//! Countries form the outer loop and provinces the inner loop; every
//! `(country, province)` pair of the cross product is checked in that order.
//! The first pair that is not [`RegionCheck::Valid`] ends the evaluation:
//!
//! ```text
//! UnknownRegion -> Notice
//! InvalidRegion -> Warn
//! all Valid     -> Pass
//! ```
//!
//! Pairs after the first non-`Valid` one are never looked up, so a later
//! `InvalidRegion` does not upgrade an earlier `UnknownRegion` to `Warn`,
//! and a later `UnknownRegion` does not soften an earlier `Warn`. Severity
//! is decided by country order, then province order.

use pkilint_core::LintStatus;
use pkilint_regions::{RegionCheck, RegionError, RegionLookup};

/// Classify the Subject's provinces against its countries.
///
/// An empty country sequence yields `Pass`: there are no pairs to check.
///
/// # Errors
///
/// Propagates the first [`RegionError`] returned by `lookup`; no status is
/// guessed for a pair the lookup could not answer.
pub fn classify_subject_regions<C, P, L>(
    countries: &[C],
    provinces: &[P],
    lookup: &L,
) -> Result<LintStatus, RegionError>
where
    C: AsRef<str>,
    P: AsRef<str>,
    L: RegionLookup + ?Sized,
{
    for country in countries {
        for province in provinces {
            match lookup.check_region(country.as_ref(), province.as_ref())? {
                RegionCheck::Valid => {}
                RegionCheck::UnknownRegion => return Ok(LintStatus::Notice),
                RegionCheck::InvalidRegion => return Ok(LintStatus::Warn),
            }
        }
    }
    Ok(LintStatus::Pass)
}
