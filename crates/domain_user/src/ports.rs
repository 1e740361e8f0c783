//! User Ports
//!
//! Implementations:
//!
//! - **PostgreSQL Adapter**: `infra_db::PgUserRepository`
//! - **In-Memory Adapter**: [`memory::InMemoryUserRepository`]

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::user::{NewUser, User};

/// Storage for user accounts
#[async_trait]
pub trait UserRepository: DomainPort {
    /// Stores a new user under a freshly generated id
    ///
    /// Fails with `PortError::Conflict` when the username is taken.
    async fn insert(&self, user: NewUser) -> Result<User, PortError>;

    /// Looks a user up by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PortError>;
}

/// In-memory implementation of UserRepository
#[cfg(any(test, feature = "memory"))]
pub mod memory {
    use super::*;
    use chrono::Utc;
    use core_kernel::UserId;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    /// Users keyed by username for the lifetime of the process
    #[derive(Debug, Default, Clone)]
    pub struct InMemoryUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainPort for InMemoryUserRepository {}

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn insert(&self, user: NewUser) -> Result<User, PortError> {
            let mut users = self.users.write().await;
            if users.contains_key(&user.username) {
                return Err(PortError::conflict(format!(
                    "username {} already exists",
                    user.username
                )));
            }
            let stored = user.into_user(UserId::new(Uuid::now_v7().to_string()), Utc::now());
            users.insert(stored.username.clone(), stored.clone());
            Ok(stored)
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, PortError> {
            Ok(self.users.read().await.get(username).cloned())
        }
    }
}
