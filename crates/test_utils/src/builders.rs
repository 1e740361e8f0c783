//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! the reference application for everything else.

use domain_policy::{ApplicationForm, FormField};
use serde_json::Value;

use crate::fixtures::ApplicationFixtures;

/// Builder for application forms, starting from the reference application
#[derive(Debug, Clone)]
pub struct ApplicationFormBuilder {
    form: ApplicationForm,
}

impl Default for ApplicationFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationFormBuilder {
    /// Creates a new builder holding the reference application
    pub fn new() -> Self {
        Self {
            form: ApplicationFixtures::scenario_form(),
        }
    }

    /// Creates a builder with every field missing
    pub fn empty() -> Self {
        Self {
            form: ApplicationForm::default(),
        }
    }

    /// Sets the date of birth text
    pub fn with_dob(mut self, dob: &str) -> Self {
        self.form.dob = Some(dob.into());
        self
    }

    /// Sets the gender token
    pub fn with_gender(mut self, gender: &str) -> Self {
        self.form.gender = Some(gender.into());
        self
    }

    /// Sets the sum assured
    pub fn with_sum_assured(mut self, amount: i64) -> Self {
        self.form.sum_assured = Some(amount.into());
        self
    }

    /// Sets the modal premium
    pub fn with_modal_premium(mut self, amount: i64) -> Self {
        self.form.modal_premium = Some(amount.into());
        self
    }

    /// Sets the premium frequency token
    pub fn with_premium_frequency(mut self, frequency: &str) -> Self {
        self.form.premium_frequency = Some(frequency.into());
        self
    }

    /// Sets the policy term
    pub fn with_policy_term(mut self, years: i64) -> Self {
        self.form.policy_term = Some(years.into());
        self
    }

    /// Sets the premium payment term
    pub fn with_premium_payment_term(mut self, years: i64) -> Self {
        self.form.premium_payment_term = Some(years.into());
        self
    }

    /// Submits every number as a string, the way the browser form does
    pub fn as_browser_strings(mut self) -> Self {
        for field in [
            &mut self.form.sum_assured,
            &mut self.form.modal_premium,
            &mut self.form.policy_term,
            &mut self.form.premium_payment_term,
        ] {
            if let Some(FormField::Integer(n)) = *field {
                *field = Some(FormField::Text(n.to_string()));
            }
        }
        self
    }

    /// Builds the form
    pub fn build(self) -> ApplicationForm {
        self.form
    }

    /// Builds the JSON request body for the form
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.form).unwrap_or(Value::Null)
    }
}
