//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! benefit illustration test suite.
//!
//! # Modules
//!
//! - `fixtures`: Reference application, date and credentials
//! - `builders`: Builder for application forms and request bodies
//! - `assertions`: Assertion helpers for validation results and schedules
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
