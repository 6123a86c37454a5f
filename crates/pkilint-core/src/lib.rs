//! # pkilint-core — Foundational Types for pkilint
//!
//! This crate defines the vocabulary every other pkilint crate speaks:
//! what a lint concludes, how a lint describes itself, and what part of a
//! certificate a lint is allowed to read. Every other crate in the
//! workspace depends on `pkilint-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `LintStatus` enum.** One definition, totally ordered by
//!    severity, exhaustive `match` everywhere. Host-only statuses
//!    (`NotApplicable`, `NotEffective`, `Fatal`) live in the same enum as
//!    rule conclusions so a result set never needs a second type.
//!
//! 2. **Static metadata.** `LintMetadata` is built once when a lint is
//!    constructed and is immutable afterwards. `EffectiveDate::Always` is
//!    the sentinel for lints that apply to every certificate.
//!
//! 3. **Read-only certificate model.** Lints receive `&Certificate`. The
//!    subject keeps RDN order and repetition exactly as parsed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pkilint-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, and `Serialize`/`Deserialize`.

pub mod certificate;
pub mod country;
pub mod error;
pub mod metadata;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use certificate::{Certificate, Subject};
pub use country::CountryCode;
pub use error::{LintError, RegistryError, ValidationError};
pub use metadata::{EffectiveDate, LintMetadata, LintSource};
pub use status::{LintResult, LintStatus};
