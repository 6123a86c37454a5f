//! Lints sourced from community guidance rather than a standards body.

pub mod subject_state_unknown;

pub use subject_state_unknown::SubjectStateUnknown;

use std::sync::Arc;

use pkilint_core::RegistryError;
use pkilint_regions::RegionLookup;

use crate::registry::LintRegistry;

/// Construct every community lint and insert it into `registry`.
pub fn register_all(
    registry: &mut LintRegistry,
    lookup: Arc<dyn RegionLookup>,
) -> Result<(), RegistryError> {
    registry.register(Box::new(SubjectStateUnknown::new(lookup)))?;
    Ok(())
}
