//! Application form as submitted by clients
//!
//! The browser form posts every value as a string, other clients post JSON
//! numbers, and some fields may be missing altogether. [`ApplicationForm`]
//! accepts all of that without failing so the validator can report each
//! problem as a diagnostic.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{PolicyApplication, DATE_OF_BIRTH_FORMAT};

/// Largest float magnitude accepted as a whole number
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;

/// A single submitted value of unknown shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormField {
    Integer(i64),
    Text(String),
    Other(Value),
}

impl FormField {
    /// Interprets the value as a whole number
    ///
    /// Numeric strings and integral floats (`40000.0`) are accepted.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FormField::Integer(n) => Some(*n),
            FormField::Text(s) => s.trim().parse().ok(),
            FormField::Other(Value::Number(n)) => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT)
                .map(|f| f as i64),
            FormField::Other(_) => None,
        }
    }

    /// Interprets the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormField::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for FormField {
    fn from(value: i64) -> Self {
        FormField::Integer(value)
    }
}

impl From<&str> for FormField {
    fn from(value: &str) -> Self {
        FormField::Text(value.to_string())
    }
}

impl From<String> for FormField {
    fn from(value: String) -> Self {
        FormField::Text(value)
    }
}

/// Raw policy parameters, every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    #[serde(default, alias = "dateOfBirth", skip_serializing_if = "Option::is_none")]
    pub dob: Option<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum_assured: Option<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modal_premium: Option<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_frequency: Option<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_term: Option<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_payment_term: Option<FormField>,
}

impl From<&PolicyApplication> for ApplicationForm {
    fn from(application: &PolicyApplication) -> Self {
        Self {
            dob: Some(FormField::Text(
                application.date_of_birth.format(DATE_OF_BIRTH_FORMAT).to_string(),
            )),
            gender: Some(application.gender.as_token().into()),
            sum_assured: Some(application.sum_assured.into()),
            modal_premium: Some(application.modal_premium.into()),
            premium_frequency: Some(application.premium_frequency.as_token().into()),
            policy_term: Some(i64::from(application.policy_term).into()),
            premium_payment_term: Some(i64::from(application.premium_payment_term).into()),
        }
    }
}
