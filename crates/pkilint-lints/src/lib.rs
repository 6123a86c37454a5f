//! # pkilint-lints — Lint Interface, Registry & Community Lints
//!
//! - **Lint** (`lint.rs`): the [`Lint`] trait — applicability check,
//!   execution, metadata. Every lint is an independent implementer.
//!
//! - **Classify** (`classify.rs`): the region consistency classifier,
//!   a pure function over Subject countries, provinces and a
//!   [`RegionLookup`](pkilint_regions::RegionLookup).
//!
//! - **Registry** (`registry.rs`): [`LintRegistry`], a caller-owned
//!   collection built explicitly at startup. Metadata is validated on
//!   insertion.
//!
//! - **Runner** (`runner.rs`): [`run_lint`], the host side of one lint
//!   evaluation: applicability gate, effective-date gate, execution, and
//!   mapping of execution failures to `Fatal`.
//!
//! - **Community** (`community/`): lints sourced from community guidance,
//!   currently `n_subject_state_unknown`.
//!
//! ## Architecture
//!
//! ```text
//! pkilint-regions (lookup)  -->  pkilint-lints (rules)  -->  host / pkilint-cli
//!   RegionLookup                   SubjectStateUnknown          LintRegistry::run
//!   RegionTable                    classify_subject_regions     ResultSet
//! ```

pub mod classify;
pub mod community;
pub mod lint;
pub mod registry;
pub mod runner;

pub use classify::classify_subject_regions;
pub use community::SubjectStateUnknown;
pub use lint::Lint;
pub use registry::{LintRegistry, ResultSet};
pub use runner::run_lint;

use std::sync::Arc;

use pkilint_core::RegistryError;
use pkilint_regions::RegionLookup;

/// Build a registry holding every lint shipped in this crate.
///
/// `lookup` is shared by all lints that consult region data.
///
/// # Errors
///
/// Returns [`RegistryError`] if any shipped lint has invalid metadata.
pub fn default_registry(lookup: Arc<dyn RegionLookup>) -> Result<LintRegistry, RegistryError> {
    let mut registry = LintRegistry::new();
    community::register_all(&mut registry, lookup)?;
    Ok(registry)
}
