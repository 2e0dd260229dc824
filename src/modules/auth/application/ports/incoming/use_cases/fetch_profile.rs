use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn by_id(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError>;

    /// User behind the stored session pointer, if any.
    async fn current(&self) -> Result<Option<UserProfile>, FetchProfileError>;
}
