//! Policy application value objects
//!
//! A [`PolicyApplication`] is the typed, accepted form of the parameters a
//! prospective policyholder enters. Its wire shape (field names, `M`/`F`
//! gender tokens, `Half-Yearly` frequency token, `YYYY/MM/DD` dates) is the
//! contract shared with existing clients and stored records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PolicyError;

/// Date format used for dates of birth on the wire
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y/%m/%d";

/// Gender of the life assured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M", alias = "Male")]
    Male,
    #[serde(rename = "F", alias = "Female")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Returns the wire token
    pub fn as_token(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Gender {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" | "Male" => Ok(Gender::Male),
            "F" | "Female" => Ok(Gender::Female),
            other => Err(PolicyError::UnknownToken {
                field: "gender",
                value: other.to_string(),
            }),
        }
    }
}

/// Premium payment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PremiumFrequency {
    /// One payment per year
    Yearly,
    /// Two payments per year
    #[serde(rename = "Half-Yearly", alias = "HalfYearly")]
    HalfYearly,
    /// Twelve payments per year
    Monthly,
}

impl PremiumFrequency {
    pub const ALL: [PremiumFrequency; 3] = [
        PremiumFrequency::Yearly,
        PremiumFrequency::HalfYearly,
        PremiumFrequency::Monthly,
    ];

    /// Returns the number of payments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PremiumFrequency::Yearly => 1,
            PremiumFrequency::HalfYearly => 2,
            PremiumFrequency::Monthly => 12,
        }
    }

    /// Returns the wire token
    pub fn as_token(&self) -> &'static str {
        match self {
            PremiumFrequency::Yearly => "Yearly",
            PremiumFrequency::HalfYearly => "Half-Yearly",
            PremiumFrequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for PremiumFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for PremiumFrequency {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yearly" => Ok(PremiumFrequency::Yearly),
            "Half-Yearly" | "HalfYearly" => Ok(PremiumFrequency::HalfYearly),
            "Monthly" => Ok(PremiumFrequency::Monthly),
            other => Err(PolicyError::UnknownToken {
                field: "premiumFrequency",
                value: other.to_string(),
            }),
        }
    }
}

/// Parses a `YYYY/MM/DD` date of birth
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_OF_BIRTH_FORMAT).ok()
}

/// Accepted policy parameters
///
/// Amounts are whole currency units. Values of this type are normally
/// produced by [`crate::validation::accept`]; building one by hand skips
/// the product rules, so [`PolicyApplication::validate`] is available to
/// re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyApplication {
    #[serde(rename = "dob", alias = "dateOfBirth", with = "date_of_birth_format")]
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub sum_assured: i64,
    pub modal_premium: i64,
    pub premium_frequency: PremiumFrequency,
    pub policy_term: u32,
    pub premium_payment_term: u32,
}

impl PolicyApplication {
    /// Annual premium: modal premium times payments per year
    pub fn annual_premium(&self) -> i64 {
        self.modal_premium * i64::from(self.premium_frequency.payments_per_year())
    }

    /// Re-runs the product rules against this application
    pub fn validate(&self, reference_date: NaiveDate) -> crate::validation::ValidationResult {
        crate::validation::validate(&crate::form::ApplicationForm::from(self), reference_date)
    }
}

mod date_of_birth_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::DATE_OF_BIRTH_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_OF_BIRTH_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_of_birth(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date of birth '{raw}', expected YYYY/MM/DD")))
    }
}
