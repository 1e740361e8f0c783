//! Pre-built Test Fixtures
//!
//! Provides the reference application and dates used across the suite.
//! These fixtures are consistent and predictable for unit and HTTP tests.

use chrono::NaiveDate;
use core_kernel::{FixedClock, UserId};
use domain_policy::{ApplicationForm, Gender, PolicyApplication, PremiumFrequency};

/// Fixture for the reference application
pub struct ApplicationFixtures;

impl ApplicationFixtures {
    /// Born 1999/12/12, male, ₹50,00,000 cover, ₹40,000 yearly for 10 of 18 years
    pub fn scenario() -> PolicyApplication {
        PolicyApplication {
            date_of_birth: TemporalFixtures::scenario_date_of_birth(),
            gender: Gender::Male,
            sum_assured: 5_000_000,
            modal_premium: 40_000,
            premium_frequency: PremiumFrequency::Yearly,
            policy_term: 18,
            premium_payment_term: 10,
        }
    }

    /// The reference application as a submitted form
    pub fn scenario_form() -> ApplicationForm {
        ApplicationForm::from(&Self::scenario())
    }

    /// Age of the reference applicant on the reference date
    pub fn scenario_age() -> i32 {
        25
    }

    /// Year 1 projected benefit of the reference application
    pub fn scenario_first_year_benefit() -> i64 {
        5_042_000
    }
}

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Valuation date the reference scenarios are computed against
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 26).expect("valid date")
    }

    /// Clock frozen at the reference date
    pub fn reference_clock() -> FixedClock {
        FixedClock::new(Self::reference_date())
    }

    /// Date of birth of the reference applicant
    pub fn scenario_date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1999, 12, 12).expect("valid date")
    }
}

/// Fixture for authentication
pub struct AuthFixtures;

impl AuthFixtures {
    /// Secret tests sign tokens with
    pub fn jwt_secret() -> &'static str {
        "test-jwt-secret"
    }

    /// A user that owns illustrations
    pub fn user_id() -> UserId {
        UserId::new("665f1c2e9b1e8a0012345678")
    }

    /// A second user, for ownership checks
    pub fn other_user_id() -> UserId {
        UserId::new("665f1c2e9b1e8a0087654321")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_form_carries_wire_tokens() {
        let json = serde_json::to_value(ApplicationFixtures::scenario_form()).unwrap();
        assert_eq!(json["dob"], "1999/12/12");
        assert_eq!(json["gender"], "M");
        assert_eq!(json["premiumFrequency"], "Yearly");
        assert_eq!(json["policyTerm"], 18);
    }
}
