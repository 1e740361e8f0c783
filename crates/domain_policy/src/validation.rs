//! Policy application validation
//!
//! Every rule is evaluated on every call; a form that breaks several rules
//! gets one diagnostic per broken rule. Rules run in a fixed order:
//!
//! 1. premium payment term range
//! 2. policy term range
//! 3. modal premium range
//! 4. policy term greater than premium payment term
//! 5. premium frequency membership
//! 6. gender membership
//! 7. minimum sum assured
//! 8. entry age range
//!
//! A field that is missing or malformed yields a diagnostic in place of its
//! rule, and rules that depend on it are skipped.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::{parse_date_of_birth, Gender, PolicyApplication, PremiumFrequency};
use crate::form::{ApplicationForm, FormField};
use crate::rules;

pub const PREMIUM_PAYMENT_TERM_RANGE: &str = "Premium Payment Term must be between 5 and 10 years";
pub const POLICY_TERM_RANGE: &str = "Policy Term must be between 10 and 20 years";
pub const MODAL_PREMIUM_RANGE: &str = "Modal Premium must be between ₹10,000 and ₹50,000";
pub const TERM_ORDERING: &str = "Policy Term must be greater than Premium Payment Term";
pub const PREMIUM_FREQUENCY_MEMBERSHIP: &str =
    "Premium Frequency must be Yearly, Half-Yearly, or Monthly";
pub const GENDER_MEMBERSHIP: &str = "Gender must be M or F";
pub const AGE_RANGE: &str = "Age must be between 23 and 56 years";
pub const DATE_OF_BIRTH_FORMAT: &str = "Date of Birth must be a valid date in YYYY/MM/DD format";

/// Diagnostic for a sum assured below the computed minimum
pub fn sum_assured_minimum(minimum: i64) -> String {
    format!("Sum Assured must be at least ₹{minimum}")
}

/// Outcome of validating an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub accepted: bool,
    pub errors: Vec<String>,
    /// Age at last birthday, present whenever the date of birth parsed
    pub computed_age: Option<i32>,
}

impl ValidationResult {
    /// Returns true if any diagnostic equals `message`
    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }
}

/// Rejected application: every violated rule plus the computed age
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Validation failed: {}", .errors.join("; "))]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub errors: Vec<String>,
    pub computed_age: Option<i32>,
}

impl From<ValidationResult> for ValidationFailure {
    fn from(result: ValidationResult) -> Self {
        Self {
            errors: result.errors,
            computed_age: result.computed_age,
        }
    }
}

/// Age at last birthday
///
/// The year difference, less one when the birthday has not yet come round
/// in the reference year. Negative for dates of birth after the reference
/// date.
pub fn age_at_last_birthday(date_of_birth: NaiveDate, reference_date: NaiveDate) -> i32 {
    let mut age = reference_date.year() - date_of_birth.year();
    if (reference_date.month(), reference_date.day()) < (date_of_birth.month(), date_of_birth.day())
    {
        age -= 1;
    }
    age
}

/// Validates a submitted form against the product rules
pub fn validate(form: &ApplicationForm, reference_date: NaiveDate) -> ValidationResult {
    inspect(form, reference_date).result
}

/// Validates a form and, if every rule holds, returns the typed application
pub fn accept(
    form: &ApplicationForm,
    reference_date: NaiveDate,
) -> Result<PolicyApplication, ValidationFailure> {
    let inspection = inspect(form, reference_date);
    match inspection.application {
        Some(application) if inspection.result.accepted => Ok(application),
        _ => Err(inspection.result.into()),
    }
}

struct Inspection {
    result: ValidationResult,
    application: Option<PolicyApplication>,
}

fn inspect(form: &ApplicationForm, reference_date: NaiveDate) -> Inspection {
    let mut errors = Vec::new();

    let premium_payment_term = integer_field(
        form.premium_payment_term.as_ref(),
        "Premium Payment Term",
        &mut errors,
    );
    if let Some(term) = premium_payment_term {
        if !rules::PREMIUM_PAYMENT_TERM_YEARS.contains(&term) {
            errors.push(PREMIUM_PAYMENT_TERM_RANGE.to_string());
        }
    }

    let policy_term = integer_field(form.policy_term.as_ref(), "Policy Term", &mut errors);
    if let Some(term) = policy_term {
        if !rules::POLICY_TERM_YEARS.contains(&term) {
            errors.push(POLICY_TERM_RANGE.to_string());
        }
    }

    let modal_premium = integer_field(form.modal_premium.as_ref(), "Modal Premium", &mut errors);
    if let Some(premium) = modal_premium {
        if !rules::MODAL_PREMIUM.contains(&premium) {
            errors.push(MODAL_PREMIUM_RANGE.to_string());
        }
    }

    if let (Some(pt), Some(ppt)) = (policy_term, premium_payment_term) {
        if pt <= ppt {
            errors.push(TERM_ORDERING.to_string());
        }
    }

    let premium_frequency = token_field::<PremiumFrequency>(
        form.premium_frequency.as_ref(),
        "Premium Frequency",
        PREMIUM_FREQUENCY_MEMBERSHIP,
        &mut errors,
    );
    let gender = token_field::<Gender>(
        form.gender.as_ref(),
        "Gender",
        GENDER_MEMBERSHIP,
        &mut errors,
    );

    let sum_assured = integer_field(form.sum_assured.as_ref(), "Sum Assured", &mut errors);
    if let (Some(sum), Some(premium)) = (sum_assured, modal_premium) {
        let minimum = rules::minimum_sum_assured(premium);
        if sum < minimum {
            errors.push(sum_assured_minimum(minimum));
        }
    }

    let date_of_birth = match form.dob.as_ref() {
        None => {
            errors.push(required("Date of Birth"));
            None
        }
        Some(field) => {
            let parsed = field.as_text().and_then(parse_date_of_birth);
            if parsed.is_none() {
                errors.push(DATE_OF_BIRTH_FORMAT.to_string());
            }
            parsed
        }
    };
    let computed_age = date_of_birth.map(|dob| age_at_last_birthday(dob, reference_date));
    if let Some(age) = computed_age {
        if !rules::ENTRY_AGE.contains(&age) {
            errors.push(AGE_RANGE.to_string());
        }
    }

    let accepted = errors.is_empty();
    let application = if accepted {
        build_application(
            date_of_birth,
            gender,
            sum_assured,
            modal_premium,
            premium_frequency,
            policy_term,
            premium_payment_term,
        )
    } else {
        None
    };

    Inspection {
        result: ValidationResult {
            accepted,
            errors,
            computed_age,
        },
        application,
    }
}

fn build_application(
    date_of_birth: Option<NaiveDate>,
    gender: Option<Gender>,
    sum_assured: Option<i64>,
    modal_premium: Option<i64>,
    premium_frequency: Option<PremiumFrequency>,
    policy_term: Option<i64>,
    premium_payment_term: Option<i64>,
) -> Option<PolicyApplication> {
    Some(PolicyApplication {
        date_of_birth: date_of_birth?,
        gender: gender?,
        sum_assured: sum_assured?,
        modal_premium: modal_premium?,
        premium_frequency: premium_frequency?,
        policy_term: u32::try_from(policy_term?).ok()?,
        premium_payment_term: u32::try_from(premium_payment_term?).ok()?,
    })
}

fn required(label: &str) -> String {
    format!("{label} is required")
}

fn integer_field(field: Option<&FormField>, label: &str, errors: &mut Vec<String>) -> Option<i64> {
    match field {
        None => {
            errors.push(required(label));
            None
        }
        Some(value) => {
            let parsed = value.as_integer();
            if parsed.is_none() {
                errors.push(format!("{label} must be a whole number"));
            }
            parsed
        }
    }
}

fn token_field<T: std::str::FromStr>(
    field: Option<&FormField>,
    label: &str,
    membership: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    match field {
        None => {
            errors.push(required(label));
            None
        }
        Some(value) => {
            let parsed = value.as_text().and_then(|token| token.parse().ok());
            if parsed.is_none() {
                errors.push(membership.to_string());
            }
            parsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(age_at_last_birthday(date(1999, 12, 12), date(2025, 5, 26)), 25);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_at_last_birthday(date(2000, 5, 26), date(2025, 5, 26)), 25);
    }

    #[test]
    fn test_age_day_before_birthday() {
        assert_eq!(age_at_last_birthday(date(2000, 5, 27), date(2025, 5, 26)), 24);
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(age_at_last_birthday(date(2000, 2, 29), date(2025, 2, 28)), 24);
        assert_eq!(age_at_last_birthday(date(2000, 2, 29), date(2025, 3, 1)), 25);
    }

    #[test]
    fn test_future_birth_date_is_negative() {
        assert_eq!(age_at_last_birthday(date(2026, 1, 1), date(2025, 5, 26)), -1);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let result = validate(&ApplicationForm::default(), date(2025, 5, 26));
        assert!(!result.accepted);
        assert_eq!(
            result.errors,
            vec![
                "Premium Payment Term is required",
                "Policy Term is required",
                "Modal Premium is required",
                "Premium Frequency is required",
                "Gender is required",
                "Sum Assured is required",
                "Date of Birth is required",
            ]
        );
        assert_eq!(result.computed_age, None);
    }
}
