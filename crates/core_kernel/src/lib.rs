//! Core Kernel - Foundational types shared across the illustration service
//!
//! This crate provides the building blocks used by the domain, database and
//! API layers:
//! - Strongly-typed identifiers for illustrations and users
//! - An injectable reference-date clock for age computation
//! - The unified error type returned by repository ports

pub mod clock;
pub mod error;
pub mod identifiers;
pub mod ports;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use identifiers::{IllustrationId, UserId};
pub use ports::{DomainPort, PortError};
