//! Illustration repository implementation
//!
//! Stores one row per illustration. The application fields are columns;
//! the benefit schedule is a JSONB array of `{year, projectedBenefit}`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use core_kernel::{DomainPort, IllustrationId, PortError, UserId};
use domain_policy::{
    BenefitEntry, Gender, Illustration, IllustrationRepository, NewIllustration,
    PolicyApplication, PremiumFrequency,
};

use crate::error::db_to_port_error;

const ILLUSTRATION_COLUMNS: &str = "id, user_id, dob, gender, sum_assured, modal_premium, \
     premium_frequency, policy_term, premium_payment_term, benefits, created_at, updated_at";

/// Database row for the `illustrations` table
#[derive(Debug, Clone, FromRow)]
pub struct IllustrationRow {
    pub id: Uuid,
    pub user_id: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub sum_assured: i64,
    pub modal_premium: i64,
    pub premium_frequency: String,
    pub policy_term: i32,
    pub premium_payment_term: i32,
    pub benefits: Json<Vec<BenefitEntry>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<IllustrationRow> for Illustration {
    type Error = PortError;

    fn try_from(row: IllustrationRow) -> Result<Self, Self::Error> {
        let gender: Gender = row
            .gender
            .parse()
            .map_err(|e| PortError::transformation(format!("gender column: {e}")))?;
        let premium_frequency: PremiumFrequency = row
            .premium_frequency
            .parse()
            .map_err(|e| PortError::transformation(format!("premium_frequency column: {e}")))?;

        Ok(Illustration {
            id: IllustrationId::from_uuid(row.id),
            user_id: UserId::new(row.user_id),
            application: PolicyApplication {
                date_of_birth: row.dob,
                gender,
                sum_assured: row.sum_assured,
                modal_premium: row.modal_premium,
                premium_frequency,
                policy_term: term_from_column("policy_term", row.policy_term)?,
                premium_payment_term: term_from_column(
                    "premium_payment_term",
                    row.premium_payment_term,
                )?,
            },
            benefits: row.benefits.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn term_from_column(column: &str, value: i32) -> Result<u32, PortError> {
    u32::try_from(value)
        .map_err(|_| PortError::transformation(format!("{column} column holds negative {value}")))
}

fn term_to_column(column: &str, value: u32) -> Result<i32, PortError> {
    i32::try_from(value)
        .map_err(|_| PortError::transformation(format!("{column} {value} does not fit INTEGER")))
}

/// PostgreSQL adapter for the `IllustrationRepository` port
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::PgIllustrationRepository;
///
/// let repo = PgIllustrationRepository::new(pool);
/// let found = repo.find_for_user(id, &user_id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PgIllustrationRepository {
    pool: PgPool,
}

impl PgIllustrationRepository {
    /// Creates a new repository on the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgIllustrationRepository {}

#[async_trait]
impl IllustrationRepository for PgIllustrationRepository {
    #[instrument(skip(self, illustration), fields(user = %illustration.user_id))]
    async fn insert(&self, illustration: NewIllustration) -> Result<Illustration, PortError> {
        let id = IllustrationId::new();
        let now = Utc::now();
        let application = &illustration.application;

        let sql = format!(
            "INSERT INTO illustrations ({ILLUSTRATION_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11) \
             RETURNING {ILLUSTRATION_COLUMNS}"
        );

        let row = sqlx::query_as::<_, IllustrationRow>(&sql)
            .bind(*id.as_uuid())
            .bind(illustration.user_id.as_str())
            .bind(application.date_of_birth)
            .bind(application.gender.as_token())
            .bind(application.sum_assured)
            .bind(application.modal_premium)
            .bind(application.premium_frequency.as_token())
            .bind(term_to_column("policy_term", application.policy_term)?)
            .bind(term_to_column(
                "premium_payment_term",
                application.premium_payment_term,
            )?)
            .bind(Json(&illustration.benefits))
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(db_to_port_error)?;

        Illustration::try_from(row)
    }

    #[instrument(skip(self))]
    async fn find_for_user(
        &self,
        id: IllustrationId,
        user_id: &UserId,
    ) -> Result<Option<Illustration>, PortError> {
        let sql = format!(
            "SELECT {ILLUSTRATION_COLUMNS} FROM illustrations WHERE id = $1 AND user_id = $2"
        );

        let row = sqlx::query_as::<_, IllustrationRow>(&sql)
            .bind(*id.as_uuid())
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_to_port_error)?;

        row.map(Illustration::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), PortError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(db_to_port_error)?;
        Ok(())
    }
}
