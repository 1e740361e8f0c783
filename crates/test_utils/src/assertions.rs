//! Custom Test Assertions
//!
//! Provides assertion helpers for validation results and benefit schedules
//! that give more meaningful failure messages than standard assertions.

use domain_policy::{BenefitEntry, ValidationResult};

/// Asserts that a result was rejected with exactly the given messages, in order
///
/// # Panics
///
/// Panics if the result was accepted or the messages differ
pub fn assert_rejected_with(result: &ValidationResult, expected: &[&str]) {
    assert!(
        !result.accepted,
        "expected rejection with {expected:?}, but the application was accepted"
    );
    assert_eq!(
        result.errors, expected,
        "validation messages differ from expected"
    );
}

/// Asserts that a result was accepted with the given computed age
///
/// # Panics
///
/// Panics if any rule was violated or the age differs
pub fn assert_accepted(result: &ValidationResult, age: i32) {
    assert!(
        result.accepted && result.errors.is_empty(),
        "expected acceptance, got errors: {:?}",
        result.errors
    );
    assert_eq!(result.computed_age, Some(age), "computed age differs");
}

/// Asserts the shape every schedule must have
///
/// One entry per policy year numbered from 1, every benefit at least the
/// sum assured and strictly greater than the year before.
///
/// # Panics
///
/// Panics on the first entry that breaks the shape
pub fn assert_schedule_shape(schedule: &[BenefitEntry], policy_term: u32, sum_assured: i64) {
    assert_eq!(
        schedule.len(),
        policy_term as usize,
        "schedule length differs from policy term"
    );
    for (index, entry) in schedule.iter().enumerate() {
        assert_eq!(entry.year as usize, index + 1, "years must count up from 1");
        assert!(
            entry.projected_benefit >= sum_assured,
            "year {} benefit {} below sum assured {}",
            entry.year,
            entry.projected_benefit,
            sum_assured
        );
    }
    for pair in schedule.windows(2) {
        assert!(
            pair[1].projected_benefit > pair[0].projected_benefit,
            "year {} benefit {} does not exceed year {} benefit {}",
            pair[1].year,
            pair[1].projected_benefit,
            pair[0].year,
            pair[0].projected_benefit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ApplicationFixtures, TemporalFixtures};
    use domain_policy::{project, validate};

    #[test]
    fn test_reference_application_passes_assertions() {
        let application = ApplicationFixtures::scenario();
        let result = validate(
            &ApplicationFixtures::scenario_form(),
            TemporalFixtures::reference_date(),
        );
        assert_accepted(&result, ApplicationFixtures::scenario_age());
        assert_schedule_shape(
            &project(&application),
            application.policy_term,
            application.sum_assured,
        );
    }

    #[test]
    #[should_panic(expected = "schedule length")]
    fn test_short_schedule_is_reported() {
        assert_schedule_shape(&[], 18, 5_000_000);
    }
}
