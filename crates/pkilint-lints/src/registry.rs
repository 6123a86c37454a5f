//! # Lint Registry
//!
//! A caller-owned collection of lints, built explicitly at startup and
//! read-only while certificates are being linted. There is no process-wide
//! registry; hosts construct one and pass it where it is needed.
//!
//! ## Startup Validation
//!
//! [`LintRegistry::register`] rejects a lint before it can ever run if its
//! metadata is unusable:
//!
//! - the name is empty, contains anything but `[a-z0-9_]`, or lacks a
//!   severity prefix (`n_`, `w_`, `e_`);
//! - another registered lint has the same name;
//! - the description or citation is blank.

use std::collections::BTreeMap;

use serde::Serialize;

use pkilint_core::{Certificate, LintMetadata, LintResult, LintSource, RegistryError};

use crate::lint::Lint;
use crate::runner::run_lint;

/// Name prefixes encoding the highest status a lint can conclude.
const SEVERITY_PREFIXES: [&str; 3] = ["n_", "w_", "e_"];

/// Lints keyed by unique name, iterated in name order.
#[derive(Debug, Default)]
pub struct LintRegistry {
    lints: BTreeMap<String, Box<dyn Lint>>,
}

impl LintRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a lint.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the lint's metadata is invalid or its
    /// name is already taken. The registry is unchanged on error.
    pub fn register(&mut self, lint: Box<dyn Lint>) -> Result<(), RegistryError> {
        let metadata = lint.metadata();
        validate_metadata(metadata)?;
        let name = metadata.name.clone();
        if self.lints.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(lint = %name, source = %metadata.source, "registered lint");
        self.lints.insert(name, lint);
        Ok(())
    }

    /// Remove a lint by name, returning it if it was registered.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Lint>> {
        self.lints.remove(name)
    }

    /// Look up a lint by name.
    pub fn get(&self, name: &str) -> Option<&dyn Lint> {
        self.lints.get(name).map(|lint| lint.as_ref())
    }

    /// Number of registered lints.
    pub fn len(&self) -> usize {
        self.lints.len()
    }

    /// Whether no lints are registered.
    pub fn is_empty(&self) -> bool {
        self.lints.is_empty()
    }

    /// Registered lint names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lints.keys().map(String::as_str)
    }

    /// Registered lints in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Lint> {
        self.lints.values().map(|lint| lint.as_ref())
    }

    /// Metadata of every registered lint, in name order.
    pub fn metadata(&self) -> impl Iterator<Item = &LintMetadata> {
        self.iter().map(|lint| lint.metadata())
    }

    /// Registered lints drawn from `source`, in name order.
    pub fn by_source(&self, source: LintSource) -> impl Iterator<Item = &dyn Lint> {
        self.iter()
            .filter(move |lint| lint.metadata().source == source)
    }

    /// Run every registered lint against `cert`.
    ///
    /// Each lint is evaluated independently; one lint's result never
    /// influences another's.
    pub fn run(&self, cert: &Certificate) -> ResultSet {
        let results = self
            .lints
            .iter()
            .map(|(name, lint)| (name.clone(), run_lint(lint.as_ref(), cert)))
            .collect();
        ResultSet { results }
    }
}

/// Per-lint results for one certificate, keyed by lint name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    results: BTreeMap<String, LintResult>,
}

impl ResultSet {
    /// Result of the named lint, if it was run.
    pub fn get(&self, name: &str) -> Option<&LintResult> {
        self.results.get(name)
    }

    /// Number of lints that were run.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no lints were run.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// `(name, result)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LintResult)> {
        self.results.iter().map(|(name, result)| (name.as_str(), result))
    }
}

/// Check lint metadata against the registration rules.
pub fn validate_metadata(metadata: &LintMetadata) -> Result<(), RegistryError> {
    let name = &metadata.name;
    let invalid = |reason: &str| RegistryError::InvalidName {
        name: name.clone(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(invalid("only lowercase ASCII letters, digits and '_' are allowed"));
    }
    let Some(rest) = SEVERITY_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
    else {
        return Err(invalid("must start with n_, w_ or e_"));
    };
    if rest.trim_matches('_').is_empty() {
        return Err(invalid("nothing follows the severity prefix"));
    }

    if metadata.description.trim().is_empty() {
        return Err(RegistryError::MissingField {
            name: name.clone(),
            field: "description",
        });
    }
    if metadata.citation.trim().is_empty() {
        return Err(RegistryError::MissingField {
            name: name.clone(),
            field: "citation",
        });
    }
    Ok(())
}
