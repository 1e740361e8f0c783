//! Product rules for the illustrated plan
//!
//! All bounds are inclusive.

use std::ops::RangeInclusive;

/// Years over which premiums are paid
pub const PREMIUM_PAYMENT_TERM_YEARS: RangeInclusive<i64> = 5..=10;

/// Years the policy stays in force
pub const POLICY_TERM_YEARS: RangeInclusive<i64> = 10..=20;

/// Premium per payment period, in whole currency units
pub const MODAL_PREMIUM: RangeInclusive<i64> = 10_000..=50_000;

/// Age at last birthday on the reference date
pub const ENTRY_AGE: RangeInclusive<i32> = 23..=56;

/// Sum assured must reach this multiple of the modal premium...
pub const SUM_ASSURED_PREMIUM_MULTIPLE: i64 = 10;

/// ...unless the multiple exceeds this cap
pub const SUM_ASSURED_CAP: i64 = 5_000_000;

/// Minimum sum assured for a given modal premium
///
/// `min(10 × modalPremium, 5000000)`
pub fn minimum_sum_assured(modal_premium: i64) -> i64 {
    modal_premium
        .saturating_mul(SUM_ASSURED_PREMIUM_MULTIPLE)
        .min(SUM_ASSURED_CAP)
}
