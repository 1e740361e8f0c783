//! Illustration records
//!
//! An illustration is an accepted application together with its projected
//! benefit schedule, owned by the user who requested it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{IllustrationId, UserId};

use crate::application::PolicyApplication;
use crate::projection::BenefitSchedule;

/// A persisted benefit illustration
///
/// Serializes to the document shape existing clients read: `_id`,
/// `userId`, the seven application fields at top level, `benefits`,
/// `createdAt` and `updatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Illustration {
    #[serde(rename = "_id")]
    pub id: IllustrationId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub application: PolicyApplication,
    pub benefits: BenefitSchedule,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An illustration that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIllustration {
    pub user_id: UserId,
    pub application: PolicyApplication,
    pub benefits: BenefitSchedule,
}

impl NewIllustration {
    /// Assigns an identifier and timestamps
    pub fn into_illustration(self, id: IllustrationId, now: DateTime<Utc>) -> Illustration {
        Illustration {
            id,
            user_id: self.user_id,
            application: self.application,
            benefits: self.benefits,
            created_at: now,
            updated_at: now,
        }
    }
}
