//! User accounts
//!
//! A registered user is stored with a bcrypt password hash and with the
//! date of birth and mobile number masked. Only the username and the
//! hash are ever read back.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use core_kernel::UserId;

/// Format the registration form uses for dates of birth
pub const DOB_FORMAT: &str = "%Y/%m/%d";

/// Number of trailing mobile digits left visible after masking
const MOBILE_VISIBLE_DIGITS: usize = 4;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const DOB_FORMAT_INVALID: &str = "Date of Birth must be in YYYY/MM/DD format";
pub const MOBILE_INVALID: &str = "Mobile must be 10 digits";

/// A stored user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    /// Masked, e.g. `1999/**/**`
    pub dob: String,
    /// Masked, e.g. `******3210`
    pub mobile: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub dob: String,
    pub mobile: String,
}

impl NewUser {
    /// Assigns an identifier and timestamps
    pub fn into_user(self, id: UserId, now: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            dob: self.dob,
            mobile: self.mobile,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registration request as submitted by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub dob: String,
    pub mobile: String,
}

impl RegistrationForm {
    /// Checks every field, returning all problems in field order
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(USERNAME_REQUIRED.to_string());
        }
        if self.password.is_empty() {
            errors.push(PASSWORD_REQUIRED.to_string());
        }
        if NaiveDate::parse_from_str(self.dob.trim(), DOB_FORMAT).is_err() {
            errors.push(DOB_FORMAT_INVALID.to_string());
        }
        let mobile = self.mobile.trim();
        if mobile.len() != 10 || !mobile.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(MOBILE_INVALID.to_string());
        }
        errors
    }
}

/// Keeps the birth year and hides month and day
///
/// Expects a date already accepted by [`RegistrationForm::validate`].
pub fn mask_dob(dob: &str) -> String {
    match dob.trim().split_once('/') {
        Some((year, _)) => format!("{year}/**/**"),
        None => "****/**/**".to_string(),
    }
}

/// Keeps the last four digits and hides the rest
pub fn mask_mobile(mobile: &str) -> String {
    let digits: Vec<char> = mobile.trim().chars().collect();
    let hidden = digits.len().saturating_sub(MOBILE_VISIBLE_DIGITS);
    digits
        .iter()
        .enumerate()
        .map(|(index, digit)| if index < hidden { '*' } else { *digit })
        .collect()
}
