use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogoutError {
    #[error("Session storage error: {0}")]
    SessionError(String),
}

/// Drops the stored session pointer. Issued bearer tokens stay valid until
/// they expire.
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError>;
}
