//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the illustration
//! service using SQLx: pool configuration, embedded migrations, and the
//! database adapters for the `IllustrationRepository` and `UserRepository`
//! ports.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PgIllustrationRepository, PgUserRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/illustrations")).await?;
//! run_migrations(&pool).await?;
//! let illustrations = PgIllustrationRepository::new(pool.clone());
//! let users = PgUserRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{PgIllustrationRepository, PgUserRepository};
