//! User service
//!
//! Registration hashes the password and masks personal details before
//! anything reaches storage. Authentication never says which of the
//! username or password was wrong.

use std::sync::Arc;

use tracing::{debug, info};

use core_kernel::PortError;

use crate::error::UserError;
use crate::ports::UserRepository;
use crate::user::{mask_dob, mask_mobile, NewUser, RegistrationForm, User};

/// bcrypt work factor used outside tests
pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Service for registering and authenticating users
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hash_cost: u32,
}

impl UserService {
    /// Creates a new user service
    ///
    /// # Arguments
    ///
    /// * `repository` - Where accounts are stored
    /// * `hash_cost` - bcrypt work factor, normally [`DEFAULT_HASH_COST`]
    pub fn new(repository: Arc<dyn UserRepository>, hash_cost: u32) -> Self {
        Self {
            repository,
            hash_cost,
        }
    }

    /// Validates and stores a new account
    ///
    /// # Errors
    ///
    /// * `UserError::Validation` - missing or malformed fields
    /// * `UserError::UsernameTaken` - the username is already registered
    /// * `UserError::Repository` - the store failed
    pub async fn register(&self, form: RegistrationForm) -> Result<User, UserError> {
        let errors = form.validate();
        if !errors.is_empty() {
            debug!(violations = errors.len(), "Registration rejected");
            return Err(UserError::Validation(errors));
        }

        let username = form.username.trim().to_string();
        let cost = self.hash_cost;
        let password = form.password;
        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        let user = self
            .repository
            .insert(NewUser {
                username: username.clone(),
                password_hash,
                dob: mask_dob(&form.dob),
                mobile: mask_mobile(&form.mobile),
            })
            .await
            .map_err(|e| match e {
                PortError::Conflict { .. } => UserError::UsernameTaken(username),
                other => UserError::Repository(other),
            })?;

        info!(user = %user.id, "User registered");
        Ok(user)
    }

    /// Checks a username and password pair
    ///
    /// # Errors
    ///
    /// * `UserError::InvalidCredentials` - unknown username or wrong password
    /// * `UserError::Repository` - the store failed
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserError> {
        let Some(user) = self.repository.find_by_username(username.trim()).await? else {
            debug!("Login for unknown username");
            return Err(UserError::InvalidCredentials);
        };

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        if !matches {
            debug!(user = %user.id, "Login with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        info!(user = %user.id, "User authenticated");
        Ok(user)
    }
}
