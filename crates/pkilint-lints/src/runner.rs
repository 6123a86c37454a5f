//! # Lint Runner
//!
//! Host-side evaluation of one lint against one certificate:
//!
//! 1. Applicability gate: if [`Lint::check_applies`] is false the lint is
//!    not executed and `NotApplicable` is recorded.
//! 2. Effective-date gate: certificates issued before the lint's effective
//!    date get `NotEffective`.
//! 3. Execution: the lint's own result, or `Fatal` with the error text when
//!    the lint could not reach a conclusion.

use pkilint_core::{Certificate, LintResult, LintStatus};

use crate::lint::Lint;

/// Evaluate `lint` against `cert`, applying the host gates.
pub fn run_lint(lint: &dyn Lint, cert: &Certificate) -> LintResult {
    let metadata = lint.metadata();

    if !lint.check_applies(cert) {
        tracing::debug!(lint = %metadata.name, "lint does not apply");
        return LintResult::new(LintStatus::NotApplicable);
    }

    if !metadata.effective_date.covers(&cert.not_before) {
        tracing::debug!(lint = %metadata.name, "certificate predates lint effective date");
        return LintResult::new(LintStatus::NotEffective);
    }

    match lint.execute(cert) {
        Ok(result) => {
            tracing::debug!(lint = %metadata.name, status = %result.status, "lint concluded");
            result
        }
        Err(e) => {
            tracing::warn!(lint = %metadata.name, error = %e, "lint could not be evaluated");
            LintResult::with_details(LintStatus::Fatal, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use pkilint_core::{EffectiveDate, LintError, LintMetadata, LintSource, Subject};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CountingLint {
        metadata: LintMetadata,
        applies: bool,
        outcome: Result<LintStatus, ()>,
        executions: AtomicUsize,
    }

    impl CountingLint {
        fn new(effective_date: EffectiveDate, applies: bool, outcome: Result<LintStatus, ()>) -> Self {
            Self {
                metadata: LintMetadata {
                    name: "w_counting".to_string(),
                    description: "counts executions".to_string(),
                    citation: "test".to_string(),
                    source: LintSource::Community,
                    effective_date,
                },
                applies,
                outcome,
                executions: AtomicUsize::new(0),
            }
        }
    }

    impl Lint for CountingLint {
        fn metadata(&self) -> &LintMetadata {
            &self.metadata
        }

        fn check_applies(&self, _cert: &Certificate) -> bool {
            self.applies
        }

        fn execute(&self, _cert: &Certificate) -> Result<LintResult, LintError> {
            self.executions.fetch_add(1, Ordering::SeqCst);
            self.outcome
                .map(LintResult::new)
                .map_err(|()| LintError::ContractViolation {
                    lint: self.metadata.name.clone(),
                    detail: "collaborator returned garbage".to_string(),
                })
        }
    }

    fn issued(at: DateTime<Utc>) -> Certificate {
        Certificate::new(Subject::new(["US"], ["Texas"]), at)
    }

    fn jan_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn returns_lint_conclusion() {
        let lint = CountingLint::new(EffectiveDate::Always, true, Ok(LintStatus::Warn));
        assert_eq!(run_lint(&lint, &issued(jan_2024())).status, LintStatus::Warn);
        assert_eq!(lint.executions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn not_applicable_skips_execution() {
        let lint = CountingLint::new(EffectiveDate::Always, false, Ok(LintStatus::Warn));
        assert_eq!(
            run_lint(&lint, &issued(jan_2024())).status,
            LintStatus::NotApplicable
        );
        assert_eq!(lint.executions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn not_effective_before_cutoff() {
        let lint = CountingLint::new(
            EffectiveDate::Since(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
            true,
            Ok(LintStatus::Warn),
        );
        assert_eq!(
            run_lint(&lint, &issued(jan_2024())).status,
            LintStatus::NotEffective
        );
        assert_eq!(lint.executions.load(Ordering::SeqCst), 0);

        let later = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(run_lint(&lint, &issued(later)).status, LintStatus::Warn);
    }

    #[test]
    fn applicability_is_checked_before_effective_date() {
        let lint = CountingLint::new(
            EffectiveDate::Since(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
            false,
            Ok(LintStatus::Warn),
        );
        assert_eq!(
            run_lint(&lint, &issued(jan_2024())).status,
            LintStatus::NotApplicable
        );
        assert_eq!(lint.executions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn execution_error_is_fatal_not_pass() {
        let lint = CountingLint::new(EffectiveDate::Always, true, Err(()));
        let result = run_lint(&lint, &issued(jan_2024()));
        assert_eq!(result.status, LintStatus::Fatal);
        assert!(result
            .details
            .as_deref()
            .unwrap_or_default()
            .contains("collaborator returned garbage"));
    }
}
