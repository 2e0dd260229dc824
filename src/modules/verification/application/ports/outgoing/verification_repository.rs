use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::{
    ReviewAction, Verification, VerificationUpsert,
};

#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Insert or merge the single record for (user, type).
    async fn upsert(
        &self,
        upsert: VerificationUpsert,
        now: DateTime<Utc>,
    ) -> Result<Verification, VerificationRepositoryError>;

    async fn find_by_id(
        &self,
        verification_id: Uuid,
    ) -> Result<Option<Verification>, VerificationRepositoryError>;

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Verification>, VerificationRepositoryError>;

    async fn review(
        &self,
        verification_id: Uuid,
        action: ReviewAction,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Verification, VerificationRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationRepositoryError {
    #[error("Verification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
