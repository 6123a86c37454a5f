//! # Lint Trait
//!
//! The capability set every lint provides to a host. There is no base
//! type and no hierarchy; each lint implements this trait directly.

use std::fmt;

use pkilint_core::{Certificate, LintError, LintMetadata, LintResult};

/// A single named certificate check.
///
/// Lints are read-only over the certificate and keep no per-certificate
/// state, so one instance may evaluate many certificates concurrently.
pub trait Lint: Send + Sync + fmt::Debug {
    /// Static description of this lint.
    fn metadata(&self) -> &LintMetadata;

    /// Whether the certificate carries what this lint inspects.
    ///
    /// The host calls [`execute`](Lint::execute) only when this returns
    /// `true`.
    fn check_applies(&self, cert: &Certificate) -> bool;

    /// Evaluate the certificate.
    ///
    /// # Errors
    ///
    /// Returns [`LintError`] when the lint cannot reach a conclusion.
    fn execute(&self, cert: &Certificate) -> Result<LintResult, LintError>;
}
