//! Policy Illustration Domain
//!
//! This crate implements the business logic behind benefit illustrations:
//! validating a prospective policyholder's parameters against the product
//! rules and projecting the year-by-year benefit for an accepted
//! application.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic:
//! - **Value Objects**: `ApplicationForm`, `PolicyApplication`, `BenefitEntry`
//! - **Pure Functions**: `validate` / `accept`, `project`
//! - **Ports**: `IllustrationRepository`
//! - **Domain Services**: `IllustrationService`
//!
//! # Flow
//!
//! ```text
//! ApplicationForm --accept--> PolicyApplication --project--> BenefitSchedule
//!        \--> ValidationFailure (every violated rule)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{accept, project};
//!
//! let application = accept(&form, reference_date)?;
//! let schedule = project(&application);
//! assert_eq!(schedule.len(), application.policy_term as usize);
//! ```

pub mod application;
pub mod error;
pub mod form;
pub mod illustration;
pub mod ports;
pub mod projection;
pub mod rules;
pub mod services;
pub mod validation;

pub use application::{Gender, PolicyApplication, PremiumFrequency};
pub use error::PolicyError;
pub use form::{ApplicationForm, FormField};
pub use illustration::{Illustration, NewIllustration};
pub use ports::IllustrationRepository;
pub use projection::{project, BenefitEntry, BenefitSchedule};
pub use services::IllustrationService;
pub use validation::{accept, age_at_last_birthday, validate, ValidationFailure, ValidationResult};
