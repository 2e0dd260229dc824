use async_trait::async_trait;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        let user_id = command.user_id();
        self.user_repository
            .update_profile(user_id, command.into_changes())
            .await
            .map(UserProfile::from)
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
