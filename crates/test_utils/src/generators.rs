//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating applications that satisfy
//! every product rule as of a given reference date.

use chrono::{Days, Months, NaiveDate};
use domain_policy::rules::{
    minimum_sum_assured, ENTRY_AGE, MODAL_PREMIUM, POLICY_TERM_YEARS, PREMIUM_PAYMENT_TERM_YEARS,
};
use domain_policy::{Gender, PolicyApplication, PremiumFrequency};
use proptest::prelude::*;

/// Strategy for generating Gender values
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Strategy for generating PremiumFrequency values
pub fn frequency_strategy() -> impl Strategy<Value = PremiumFrequency> {
    prop_oneof![
        Just(PremiumFrequency::Yearly),
        Just(PremiumFrequency::HalfYearly),
        Just(PremiumFrequency::Monthly),
    ]
}

/// Strategy for (premium payment term, policy term) pairs in range with
/// the policy term strictly longer
pub fn terms_strategy() -> impl Strategy<Value = (u32, u32)> {
    (*PREMIUM_PAYMENT_TERM_YEARS.start()..=*PREMIUM_PAYMENT_TERM_YEARS.end()).prop_flat_map(
        |payment_term| {
            let shortest = (payment_term + 1).max(*POLICY_TERM_YEARS.start());
            (
                Just(payment_term as u32),
                (shortest..=*POLICY_TERM_YEARS.end()).prop_map(|t| t as u32),
            )
        },
    )
}

/// Strategy for a date of birth whose age at last birthday on
/// `reference_date` is within the entry age band
pub fn date_of_birth_strategy(reference_date: NaiveDate) -> impl Strategy<Value = NaiveDate> {
    (ENTRY_AGE, 0u64..=300).prop_map(move |(age, days_before)| {
        reference_date
            .checked_sub_months(Months::new(12 * age as u32))
            .and_then(|birthday| birthday.checked_sub_days(Days::new(days_before)))
            .expect("date of birth within calendar range")
    })
}

/// Strategy for applications that pass validation on `reference_date`
pub fn valid_application_strategy(
    reference_date: NaiveDate,
) -> impl Strategy<Value = PolicyApplication> {
    (
        date_of_birth_strategy(reference_date),
        gender_strategy(),
        MODAL_PREMIUM,
        frequency_strategy(),
        terms_strategy(),
        0i64..=2_000_000,
    )
        .prop_map(
            |(date_of_birth, gender, modal_premium, premium_frequency, terms, extra_cover)| {
                let (premium_payment_term, policy_term) = terms;
                PolicyApplication {
                    date_of_birth,
                    gender,
                    sum_assured: minimum_sum_assured(modal_premium) + extra_cover,
                    modal_premium,
                    premium_frequency,
                    policy_term,
                    premium_payment_term,
                }
            },
        )
}
