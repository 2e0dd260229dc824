use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{ProfileChanges, User, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `EmailAlreadyExists` when the (lower-cased) email is taken.
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError>;

    async fn set_identity_verified(
        &self,
        user_id: UserId,
        verified: bool,
    ) -> Result<(), UserRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
