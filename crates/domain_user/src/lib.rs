//! User Accounts Domain
//!
//! Registration and login for the people requesting illustrations. The
//! id of a stored [`User`] is the `userId` carried in issued tokens.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_user::{RegistrationForm, UserService};
//!
//! let service = UserService::new(repository, DEFAULT_HASH_COST);
//! service.register(form).await?;
//! let user = service.authenticate("asha", "s3cret").await?;
//! ```

pub mod error;
pub mod ports;
pub mod services;
pub mod user;

pub use error::UserError;
pub use ports::UserRepository;
pub use services::{UserService, DEFAULT_HASH_COST};
pub use user::{NewUser, RegistrationForm, User};
