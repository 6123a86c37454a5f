//! End-to-end scenarios for `n_subject_state_unknown` run through a registry.
//!
//! The lookup is scripted per pair and records every query, so the tests can
//! assert which pairs were examined, not just the final status.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use pkilint_core::{Certificate, LintResult, LintStatus, Subject};
use pkilint_lints::{default_registry, run_lint, Lint, LintRegistry, SubjectStateUnknown};
use pkilint_regions::{RegionCheck, RegionError, RegionLookup, RegionTable};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct ScriptedLookup {
    answers: HashMap<(String, String), Result<RegionCheck, String>>,
    asked: Mutex<Vec<(String, String)>>,
}

impl ScriptedLookup {
    fn answer(mut self, country: &str, province: &str, check: RegionCheck) -> Self {
        self.answers
            .insert((country.into(), province.into()), Ok(check));
        self
    }

    /// A raw outcome code as an external store would hand it over.
    fn raw(mut self, country: &str, province: &str, code: &str) -> Self {
        self.answers
            .insert((country.into(), province.into()), Err(code.into()));
        self
    }

    fn asked(&self) -> Vec<(String, String)> {
        self.asked.lock().unwrap().clone()
    }
}

impl RegionLookup for ScriptedLookup {
    fn check_region(&self, country: &str, province: &str) -> Result<RegionCheck, RegionError> {
        let key = (country.to_string(), province.to_string());
        self.asked.lock().unwrap().push(key.clone());
        match self.answers.get(&key) {
            Some(Ok(check)) => Ok(*check),
            Some(Err(code)) => code.parse(),
            None => panic!("unscripted pair {key:?} was examined"),
        }
    }
}

fn cert(countries: &[&str], provinces: &[&str]) -> Certificate {
    Certificate::new(
        Subject::new(countries.iter().copied(), provinces.iter().copied()),
        Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap(),
    )
}

fn registry_with(lookup: Arc<ScriptedLookup>) -> LintRegistry {
    default_registry(lookup).unwrap()
}

fn status_of(registry: &LintRegistry, cert: &Certificate) -> LintStatus {
    registry
        .run(cert)
        .get(SubjectStateUnknown::NAME)
        .expect("lint result present")
        .status
}

fn pair(c: &str, p: &str) -> (String, String) {
    (c.to_string(), p.to_string())
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_known_region_passes() {
    let lookup = Arc::new(ScriptedLookup::default().answer("US", "California", RegionCheck::Valid));
    let registry = registry_with(lookup);
    assert_eq!(
        status_of(&registry, &cert(&["US"], &["California"])),
        LintStatus::Pass
    );
}

#[test]
fn scenario_b_invalid_region_warns() {
    let lookup =
        Arc::new(ScriptedLookup::default().answer("US", "Atlantis", RegionCheck::InvalidRegion));
    let registry = registry_with(lookup);
    assert_eq!(
        status_of(&registry, &cert(&["US"], &["Atlantis"])),
        LintStatus::Warn
    );
}

#[test]
fn scenario_c_unknown_region_notices() {
    let lookup = Arc::new(
        ScriptedLookup::default().answer("XX", "SomeRegion", RegionCheck::UnknownRegion),
    );
    let registry = registry_with(lookup);
    assert_eq!(
        status_of(&registry, &cert(&["XX"], &["SomeRegion"])),
        LintStatus::Notice
    );
}

/// The first non-`Valid` pair in country-then-province order decides the
/// status. Later pairs, including more or less severe ones, are not examined.
#[test]
fn scenario_d_first_mismatch_decides_and_stops() {
    let lookup = Arc::new(
        ScriptedLookup::default()
            .answer("US", "California", RegionCheck::Valid)
            .answer("US", "Atlantis", RegionCheck::InvalidRegion)
            .answer("FR", "California", RegionCheck::UnknownRegion)
            .answer("FR", "Atlantis", RegionCheck::InvalidRegion),
    );
    let registry = registry_with(Arc::clone(&lookup));

    let status = status_of(&registry, &cert(&["US", "FR"], &["California", "Atlantis"]));

    assert_eq!(status, LintStatus::Warn);
    assert_eq!(
        lookup.asked(),
        vec![pair("US", "California"), pair("US", "Atlantis")]
    );
}

#[test]
fn scenario_d_reordered_countries_change_the_outcome() {
    let lookup = Arc::new(
        ScriptedLookup::default()
            .answer("FR", "California", RegionCheck::UnknownRegion)
            .answer("US", "California", RegionCheck::Valid),
    );
    let registry = registry_with(Arc::clone(&lookup));

    let status = status_of(&registry, &cert(&["FR", "US"], &["California", "Atlantis"]));

    assert_eq!(status, LintStatus::Notice);
    assert_eq!(lookup.asked(), vec![pair("FR", "California")]);
}

#[test]
fn scenario_e_empty_provinces_never_runs_the_rule() {
    let lookup = Arc::new(ScriptedLookup::default());
    let registry = registry_with(Arc::clone(&lookup));

    let results = registry.run(&cert(&["US"], &[]));

    assert_eq!(
        results.get(SubjectStateUnknown::NAME),
        Some(&LintResult::new(LintStatus::NotApplicable))
    );
    assert!(lookup.asked().is_empty(), "lookup must not be consulted");
}

#[test]
fn cross_product_not_zip() {
    let lookup = Arc::new(
        ScriptedLookup::default()
            .answer("US", "Texas", RegionCheck::Valid)
            .answer("US", "Ohio", RegionCheck::Valid)
            .answer("CA", "Texas", RegionCheck::Valid)
            .answer("CA", "Ohio", RegionCheck::Valid),
    );
    let registry = registry_with(Arc::clone(&lookup));

    assert_eq!(
        status_of(&registry, &cert(&["US", "CA"], &["Texas", "Ohio"])),
        LintStatus::Pass
    );
    assert_eq!(lookup.asked().len(), 4);
}

// ---------------------------------------------------------------------------
// Contract violations
// ---------------------------------------------------------------------------

#[test]
fn unrecognized_lookup_outcome_is_fatal() {
    let lookup = Arc::new(
        ScriptedLookup::default()
            .answer("US", "Texas", RegionCheck::Valid)
            .raw("US", "Gondor", "region_maybe"),
    );
    let registry = registry_with(lookup);

    let results = registry.run(&cert(&["US"], &["Texas", "Gondor"]));
    let result = results.get(SubjectStateUnknown::NAME).unwrap();

    assert_eq!(result.status, LintStatus::Fatal);
    let details = result.details.as_deref().unwrap_or_default();
    assert!(details.contains("region_maybe"), "details: {details}");
    assert!(details.contains(SubjectStateUnknown::NAME), "details: {details}");
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn repeated_evaluation_is_idempotent() {
    let lookup = Arc::new(
        ScriptedLookup::default()
            .answer("US", "California", RegionCheck::Valid)
            .answer("US", "Atlantis", RegionCheck::InvalidRegion),
    );
    let lint = SubjectStateUnknown::new(lookup);
    let certificate = cert(&["US"], &["California", "Atlantis"]);

    let first = run_lint(&lint, &certificate);
    for _ in 0..5 {
        assert_eq!(run_lint(&lint, &certificate), first);
    }
    assert_eq!(first.status, LintStatus::Warn);
}

#[test]
fn lint_does_not_mutate_subject() {
    let lookup = Arc::new(ScriptedLookup::default().answer("US", "Texas", RegionCheck::Valid));
    let lint = SubjectStateUnknown::new(lookup);
    let certificate = cert(&["US"], &["Texas"]);
    let before = certificate.clone();

    lint.execute(&certificate).unwrap();

    assert_eq!(certificate, before);
}

#[test]
fn concurrent_evaluation_of_different_certificates() {
    let table = RegionTable::from_yaml_str(
        "countries:\n  US:\n    verified: true\n    regions:\n      - name: Texas\n        code: US-TX\n  XX:\n    verified: false\n",
    )
    .unwrap();
    let registry = Arc::new(default_registry(Arc::new(table)).unwrap());

    let cases = [
        (vec!["US"], vec!["Texas"], LintStatus::Pass),
        (vec!["US"], vec!["Atlantis"], LintStatus::Warn),
        (vec!["XX"], vec!["Anywhere"], LintStatus::Notice),
        (vec!["US"], vec![], LintStatus::NotApplicable),
    ];

    let handles: Vec<_> = cases
        .into_iter()
        .map(|(countries, provinces, expected)| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let status = status_of(&registry, &cert(&countries, &provinces));
                assert_eq!(status, expected, "{countries:?}/{provinces:?}");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
