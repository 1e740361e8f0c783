//! User repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use core_kernel::{DomainPort, PortError, UserId};
use domain_user::{NewUser, User, UserRepository};

use crate::error::db_to_port_error;

const USER_COLUMNS: &str = "id, username, password_hash, dob, mobile, created_at, updated_at";

/// Database row for the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub dob: String,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id.to_string()),
            username: row.username,
            password_hash: row.password_hash,
            dob: row.dob,
            mobile: row.mobile,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL adapter for the `UserRepository` port
///
/// A duplicate username trips the `UNIQUE` constraint and surfaces as
/// `PortError::Conflict`.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates a new repository on the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgUserRepository {}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: NewUser) -> Result<User, PortError> {
        let sql = format!(
            "INSERT INTO users ({USER_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) \
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(Uuid::now_v7())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.dob)
            .bind(&user.mobile)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(db_to_port_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, PortError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_to_port_error)?;

        Ok(row.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_becomes_token_user_id() {
        let id = Uuid::now_v7();
        let now = Utc::now();
        let user = User::from(UserRow {
            id,
            username: "asha".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            dob: "1999/**/**".to_string(),
            mobile: "******3210".to_string(),
            created_at: now,
            updated_at: now,
        });

        assert_eq!(user.id.as_str(), id.to_string());
        assert_eq!(user.mobile, "******3210");
    }

    #[test]
    fn test_columns_match_migration() {
        let migration = include_str!("../../migrations/20250527000000_create_users.sql");
        for column in USER_COLUMNS.split(", ") {
            assert!(migration.contains(column), "missing column {column}");
        }
        assert!(migration.contains("UNIQUE"));
    }
}
