//! Benefit Projection Tests
//!
//! Fixed examples for the documented application plus property tests over
//! the whole accepted domain.

use domain_policy::{project, PolicyApplication, PremiumFrequency};
use proptest::prelude::*;
use serde_json::json;
use test_utils::{
    assert_schedule_shape, valid_application_strategy, ApplicationFixtures, TemporalFixtures,
};

#[test]
fn test_scenario_schedule_length_and_first_year() {
    let schedule = project(&ApplicationFixtures::scenario());
    assert_eq!(schedule.len(), 18);
    assert_eq!(schedule[0].year, 1);
    assert!(schedule[0].projected_benefit > 5_000_000);
}

#[test]
fn test_scenario_known_values() {
    let schedule = project(&ApplicationFixtures::scenario());
    let benefits: Vec<i64> = schedule.iter().map(|e| e.projected_benefit).collect();
    // year 1: 40,000 × 1.05; year 10: 400,000 × 1.05^10 = 651,557.85...
    assert_eq!(benefits[0], ApplicationFixtures::scenario_first_year_benefit());
    assert_eq!(benefits[9], 5_651_558);
    // year 18: 400,000 × 1.05^18 = 962,647.68...
    assert_eq!(benefits[17], 5_962_648);
}

#[test]
fn test_schedule_serializes_with_wire_field_names() {
    let schedule = project(&ApplicationFixtures::scenario());
    let value = serde_json::to_value(&schedule[0]).unwrap();
    assert_eq!(value, json!({ "year": 1, "projectedBenefit": 5042000 }));
}

proptest! {
    #[test]
    fn prop_generated_applications_are_accepted(
        app in valid_application_strategy(TemporalFixtures::reference_date())
    ) {
        let result = app.validate(TemporalFixtures::reference_date());
        prop_assert!(result.accepted, "{:?}", result.errors);
    }

    #[test]
    fn prop_schedule_has_expected_shape(
        app in valid_application_strategy(TemporalFixtures::reference_date())
    ) {
        assert_schedule_shape(&project(&app), app.policy_term, app.sum_assured);
    }

    #[test]
    fn prop_monthly_payments_never_project_below_yearly(
        app in valid_application_strategy(TemporalFixtures::reference_date())
    ) {
        let yearly = PolicyApplication { premium_frequency: PremiumFrequency::Yearly, ..app.clone() };
        let monthly = PolicyApplication { premium_frequency: PremiumFrequency::Monthly, ..app };
        for (y, m) in project(&yearly).iter().zip(project(&monthly).iter()) {
            prop_assert!(m.projected_benefit > y.projected_benefit, "year {}", y.year);
        }
    }

    #[test]
    fn prop_projection_is_pure(
        app in valid_application_strategy(TemporalFixtures::reference_date())
    ) {
        prop_assert_eq!(project(&app), project(&app));
    }
}
