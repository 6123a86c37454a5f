//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across pkilint. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Lint execution errors mean a lint could not reach a conclusion. The
//!   host records them as `Fatal`; they are never folded into a status.
//! - Registry errors are startup failures and carry the offending lint name.
//! - Validation errors come from validated constructors of core newtypes.

use thiserror::Error;

/// A lint failed to evaluate a certificate.
#[derive(Error, Debug)]
pub enum LintError {
    /// A collaborator answered outside of its contract.
    #[error("collaborator contract violation in {lint}: {detail}")]
    ContractViolation {
        /// Name of the lint that was executing.
        lint: String,
        /// What the collaborator returned or why it failed.
        detail: String,
    },
}

/// A lint was rejected while being registered.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Another lint already uses this name.
    #[error("duplicate lint name: {0}")]
    DuplicateName(String),

    /// The name does not follow `<severity>_<snake_case>` form.
    #[error("invalid lint name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A required metadata field is empty.
    #[error("lint {name} has empty {field}")]
    MissingField {
        /// Name of the lint.
        name: String,
        /// Which field is empty.
        field: &'static str,
    },
}

/// Validation failure in a core newtype constructor.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Country codes must be exactly two ASCII letters.
    #[error("invalid country code {0:?}: expected two ASCII letters")]
    InvalidCountryCode(String),

    /// A lint status string was not recognized.
    #[error("unknown lint status: {0:?}")]
    UnknownStatus(String),

    /// A lint source string was not recognized.
    #[error("unknown lint source: {0:?}")]
    UnknownSource(String),
}
