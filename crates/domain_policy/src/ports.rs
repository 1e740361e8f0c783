//! Illustration Ports
//!
//! The `IllustrationRepository` trait is everything the policy domain needs
//! from storage. Implementations:
//!
//! - **PostgreSQL Adapter**: `infra_db::PgIllustrationRepository`
//! - **In-Memory Adapter**: [`memory::InMemoryIllustrationRepository`], for
//!   development without a database and for tests
//!
//! ```rust,ignore
//! let repository: Arc<dyn IllustrationRepository> = match pool {
//!     Some(pool) => Arc::new(PgIllustrationRepository::new(pool)),
//!     None => Arc::new(InMemoryIllustrationRepository::new()),
//! };
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, IllustrationId, PortError, UserId};

use crate::illustration::{Illustration, NewIllustration};

/// Storage for benefit illustrations
#[async_trait]
pub trait IllustrationRepository: DomainPort {
    /// Stores a new illustration under a freshly generated id
    async fn insert(&self, illustration: NewIllustration) -> Result<Illustration, PortError>;

    /// Fetches an illustration if it exists and belongs to `user_id`
    async fn find_for_user(
        &self,
        id: IllustrationId,
        user_id: &UserId,
    ) -> Result<Option<Illustration>, PortError>;

    /// Checks that the store is reachable
    async fn ping(&self) -> Result<(), PortError>;
}

/// In-memory implementation of IllustrationRepository
#[cfg(any(test, feature = "memory"))]
pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Illustrations kept in a map for the lifetime of the process
    #[derive(Debug, Default, Clone)]
    pub struct InMemoryIllustrationRepository {
        illustrations: Arc<RwLock<HashMap<IllustrationId, Illustration>>>,
    }

    impl InMemoryIllustrationRepository {
        /// Creates an empty repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored illustrations
        pub async fn len(&self) -> usize {
            self.illustrations.read().await.len()
        }

        /// Returns true if nothing has been stored
        pub async fn is_empty(&self) -> bool {
            self.illustrations.read().await.is_empty()
        }
    }

    impl DomainPort for InMemoryIllustrationRepository {}

    #[async_trait]
    impl IllustrationRepository for InMemoryIllustrationRepository {
        async fn insert(&self, illustration: NewIllustration) -> Result<Illustration, PortError> {
            let id = IllustrationId::new();
            let stored = illustration.into_illustration(id, Utc::now());

            let mut illustrations = self.illustrations.write().await;
            if illustrations.contains_key(&id) {
                return Err(PortError::conflict(format!("illustration {id} already exists")));
            }
            illustrations.insert(id, stored.clone());
            Ok(stored)
        }

        async fn find_for_user(
            &self,
            id: IllustrationId,
            user_id: &UserId,
        ) -> Result<Option<Illustration>, PortError> {
            Ok(self
                .illustrations
                .read()
                .await
                .get(&id)
                .filter(|illustration| &illustration.user_id == user_id)
                .cloned())
        }

        async fn ping(&self) -> Result<(), PortError> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryIllustrationRepository;
    use super::*;
    use crate::application::{Gender, PolicyApplication, PremiumFrequency};
    use crate::projection::project;
    use chrono::NaiveDate;

    fn new_illustration(user: &str) -> NewIllustration {
        let application = PolicyApplication {
            date_of_birth: NaiveDate::from_ymd_opt(1999, 12, 12).unwrap(),
            gender: Gender::Female,
            sum_assured: 5_000_000,
            modal_premium: 40_000,
            premium_frequency: PremiumFrequency::Yearly,
            policy_term: 18,
            premium_payment_term: 10,
        };
        NewIllustration {
            user_id: UserId::new(user),
            benefits: project(&application),
            application,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_for_owner() {
        let repository = InMemoryIllustrationRepository::new();
        let stored = repository.insert(new_illustration("user-1")).await.unwrap();

        let found = repository
            .find_for_user(stored.id, &UserId::new("user-1"))
            .await
            .unwrap();
        assert_eq!(found, Some(stored));
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_other_users_cannot_see_illustration() {
        let repository = InMemoryIllustrationRepository::new();
        let stored = repository.insert(new_illustration("user-1")).await.unwrap();

        let found = repository
            .find_for_user(stored.id, &UserId::new("user-2"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_each_insert_gets_new_id() {
        let repository = InMemoryIllustrationRepository::new();
        let first = repository.insert(new_illustration("user-1")).await.unwrap();
        let second = repository.insert(new_illustration("user-1")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
    }
}
