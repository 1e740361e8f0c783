//! Benefit projection
//!
//! Projects the benefit for each policy year as the sum assured plus all
//! premiums paid so far, compounded at a fixed annual growth rate for the
//! number of elapsed years. Premiums stop after the premium payment term,
//! but the paid total keeps compounding until the policy term ends.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::application::PolicyApplication;

/// Annual growth rate applied to premiums paid
pub const ANNUAL_GROWTH_RATE: Decimal = dec!(0.05);

/// Projected benefit for one policy year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitEntry {
    /// Policy year, starting at 1
    pub year: u32,
    /// Whole currency units
    pub projected_benefit: i64,
}

/// Year-by-year projected benefits, ordered by year
pub type BenefitSchedule = Vec<BenefitEntry>;

/// Projects the benefit schedule for an accepted application
///
/// Each year's premiums are added before that year's benefit is computed,
/// so year 1 already reflects one year of premiums. Benefits are rounded to
/// whole units with ties away from zero.
///
/// # Panics
///
/// Panics if `policy_term` is zero, or if a benefit does not fit in `i64`.
/// Neither can happen for an application that passed validation.
pub fn project(application: &PolicyApplication) -> BenefitSchedule {
    assert!(
        application.policy_term > 0,
        "cannot project a policy with a zero policy term"
    );

    let sum_assured = Decimal::from(application.sum_assured);
    let annual_premium = Decimal::from(application.annual_premium());
    let growth = Decimal::ONE + ANNUAL_GROWTH_RATE;

    let mut total_premiums_paid = Decimal::ZERO;
    let mut compound_factor = Decimal::ONE;
    let mut schedule = Vec::with_capacity(application.policy_term as usize);

    for year in 1..=application.policy_term {
        if year <= application.premium_payment_term {
            total_premiums_paid += annual_premium;
        }
        compound_factor *= growth;

        let benefit = (sum_assured + total_premiums_paid * compound_factor)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        schedule.push(BenefitEntry {
            year,
            projected_benefit: benefit
                .to_i64()
                .expect("projected benefit exceeds i64 range"),
        });
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Gender, PremiumFrequency};
    use chrono::NaiveDate;

    fn application(frequency: PremiumFrequency) -> PolicyApplication {
        PolicyApplication {
            date_of_birth: NaiveDate::from_ymd_opt(1999, 12, 12).unwrap(),
            gender: Gender::Male,
            sum_assured: 5_000_000,
            modal_premium: 40_000,
            premium_frequency: frequency,
            policy_term: 18,
            premium_payment_term: 10,
        }
    }

    #[test]
    fn test_first_year_includes_first_premium() {
        let schedule = project(&application(PremiumFrequency::Yearly));
        // 5,000,000 + 40,000 × 1.05
        assert_eq!(schedule[0], BenefitEntry { year: 1, projected_benefit: 5_042_000 });
        // 5,000,000 + 80,000 × 1.1025
        assert_eq!(schedule[1].projected_benefit, 5_088_200);
    }

    #[test]
    fn test_frequency_scales_annual_premium() {
        let monthly = project(&application(PremiumFrequency::Monthly));
        // 5,000,000 + 480,000 × 1.05
        assert_eq!(monthly[0].projected_benefit, 5_504_000);

        let half_yearly = project(&application(PremiumFrequency::HalfYearly));
        // 5,000,000 + 80,000 × 1.05
        assert_eq!(half_yearly[0].projected_benefit, 5_084_000);
    }

    #[test]
    fn test_paid_total_keeps_compounding_after_payments_stop() {
        let schedule = project(&application(PremiumFrequency::Yearly));
        let paid = Decimal::from(400_000);
        let factor = (0..11).fold(Decimal::ONE, |acc, _| acc * dec!(1.05));
        let year_eleven = Decimal::from(5_000_000) + paid * factor;
        assert_eq!(
            schedule[10].projected_benefit,
            year_eleven
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap()
        );
        assert!(schedule[11].projected_benefit > schedule[10].projected_benefit);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let mut app = application(PremiumFrequency::Yearly);
        app.modal_premium = 10_010;
        // 5,000,000 + 10,010 × 1.05 = 5,010,510.5
        assert_eq!(project(&app)[0].projected_benefit, 5_010_511);
    }

    #[test]
    #[should_panic(expected = "zero policy term")]
    fn test_zero_policy_term_panics() {
        let mut app = application(PremiumFrequency::Yearly);
        app.policy_term = 0;
        project(&app);
    }
}
