//! Property-based tests for app name generation and setting resolution.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::time::Duration;

use proptest::prelude::*;

use gonut_cli::domain::config::{VALID_DELETE_SETTINGS, VALID_SUMMARY_SETTINGS};
use gonut_cli::domain::sample_app::{APP_NAME_SUFFIX_LEN, generate_app_name};
use gonut_cli::domain::{CleanupPolicy, SAMPLE_APPS, SummaryVerbosity, humanize};

// ============================================================================
// generate_app_name() property tests
// ============================================================================

proptest! {
    /// Generated names keep the prefix and append 32 alphanumeric chars.
    #[test]
    fn prop_app_name_has_prefix_and_fixed_suffix(prefix in "[a-z][a-z0-9-]{0,30}") {
        let name = generate_app_name(&prefix);
        prop_assert!(name.starts_with(&prefix), "missing prefix: {}", name);
        let suffix = &name[prefix.len()..];
        prop_assert_eq!(suffix.len(), APP_NAME_SUFFIX_LEN);
        prop_assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()), "bad suffix: {}", name);
    }

    /// Every registry prefix yields a well-formed name.
    #[test]
    fn prop_registry_app_names_are_well_formed(index in 0..SAMPLE_APPS.len()) {
        let app = &SAMPLE_APPS[index];
        let name = generate_app_name(app.app_name_prefix);
        prop_assert!(name.starts_with(app.app_name_prefix));
        prop_assert_eq!(name.len(), app.app_name_prefix.len() + APP_NAME_SUFFIX_LEN);
    }
}

#[test]
fn test_app_name_uniqueness_batch() {
    let names: std::collections::HashSet<_> =
        (0..100).map(|_| generate_app_name("gonut-golang-app-")).collect();
    assert_eq!(names.len(), 100, "duplicate names generated");
}

// ============================================================================
// Setting resolution property tests
// ============================================================================

proptest! {
    /// Anything outside the delete whitelist is rejected.
    #[test]
    fn prop_arbitrary_delete_settings_rejected(value in "[a-zA-Z-]{0,20}") {
        if !VALID_DELETE_SETTINGS.contains(&value.as_str()) {
            prop_assert!(value.parse::<CleanupPolicy>().is_err(), "accepted: {value}");
        }
    }

    /// Anything outside the summary whitelist is rejected.
    #[test]
    fn prop_arbitrary_summary_settings_rejected(value in "[a-zA-Z-]{0,20}") {
        if !VALID_SUMMARY_SETTINGS.contains(&value.as_str()) {
            prop_assert!(value.parse::<SummaryVerbosity>().is_err(), "accepted: {value}");
        }
    }
}

#[test]
fn test_valid_settings_resolve_to_distinct_values() {
    let policies: Vec<CleanupPolicy> = VALID_DELETE_SETTINGS
        .iter()
        .map(|s| s.parse().expect("valid delete setting"))
        .collect();
    assert_eq!(
        policies,
        [CleanupPolicy::Always, CleanupPolicy::Never, CleanupPolicy::OnSuccess]
    );

    let levels: Vec<SummaryVerbosity> = VALID_SUMMARY_SETTINGS
        .iter()
        .map(|s| s.parse().expect("valid summary setting"))
        .collect();
    assert_eq!(
        levels,
        [SummaryVerbosity::Quiet, SummaryVerbosity::Short, SummaryVerbosity::Full]
    );
}

// ============================================================================
// humanize() property tests
// ============================================================================

proptest! {
    /// Whole-second durations round-trip through the rendered components.
    #[test]
    fn prop_humanize_components_sum_to_whole_seconds(secs in 1u64..400_000, millis in 0u64..1000) {
        let rendered = humanize(Duration::from_secs(secs) + Duration::from_millis(millis));
        let mut total = 0u64;
        let tokens: Vec<&str> = rendered.split(' ').collect();
        for pair in tokens.chunks(2) {
            let n: u64 = pair[0].parse().expect("number");
            total += match pair[1] {
                "h" => n * 3600,
                "min" => n * 60,
                "sec" => n,
                other => panic!("unexpected unit {other}"),
            };
        }
        prop_assert_eq!(total, secs);
    }

    /// Sub-second durations never show a number.
    #[test]
    fn prop_humanize_sub_second(millis in 0u64..1000) {
        prop_assert_eq!(humanize(Duration::from_millis(millis)), "less than a second");
    }
}
