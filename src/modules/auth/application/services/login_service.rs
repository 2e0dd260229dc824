use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, LoginCommand, LoginError, LoginUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionStore, TokenProvider, UserRepository,
};

pub struct LoginService<R, S>
where
    R: UserRepository,
    S: SessionStore,
{
    user_repository: R,
    session_store: S,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R, S> LoginService<R, S>
where
    R: UserRepository,
    S: SessionStore,
{
    pub fn new(
        user_repository: R,
        session_store: S,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            session_store,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R, S> LoginUseCase for LoginService<R, S>
where
    R: UserRepository,
    S: SessionStore,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        let user = self
            .user_repository
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::AccountNotFound)?;

        let valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::HashingFailed(e.to_string()))?;
        if !valid {
            warn!("Failed login attempt for user {}", user.id);
            return Err(LoginError::InvalidCredentials);
        }

        if let Err(e) = self.session_store.set_current_user(user.id).await {
            warn!("Could not store session pointer for {}: {}", user.id, e);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| LoginError::TokenFailed(e.to_string()))?;

        info!("User {} logged in", user.id);
        Ok(AuthSession::bearer(UserProfile::from(user), access_token))
    }
}
