use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::auth::application::ports::outgoing::{SessionStore, UserRepository};

pub struct FetchProfileService<R, S>
where
    R: UserRepository,
    S: SessionStore,
{
    user_repository: R,
    session_store: S,
}

impl<R, S> FetchProfileService<R, S>
where
    R: UserRepository,
    S: SessionStore,
{
    pub fn new(user_repository: R, session_store: S) -> Self {
        Self {
            user_repository,
            session_store,
        }
    }
}

#[async_trait]
impl<R, S> FetchProfileUseCase for FetchProfileService<R, S>
where
    R: UserRepository,
    S: SessionStore,
{
    async fn by_id(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        self.user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .map(UserProfile::from)
            .ok_or(FetchProfileError::UserNotFound)
    }

    async fn current(&self) -> Result<Option<UserProfile>, FetchProfileError> {
        let Some(user_id) = self
            .session_store
            .current_user_id()
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
        else {
            return Ok(None);
        };

        // A pointer to a user that no longer resolves reads as signed out.
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?;
        Ok(user.map(UserProfile::from))
    }
}
