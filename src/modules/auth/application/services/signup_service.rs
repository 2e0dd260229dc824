use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{NewUser, User, UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, SignupCommand, SignupError, SignupUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionStore, TokenProvider, UserRepository, UserRepositoryError,
};
use crate::modules::verification::application::ports::outgoing::WalletRepository;
use crate::shared::clock::Clock;

pub struct SignupService<R, W, S>
where
    R: UserRepository,
    W: WalletRepository,
    S: SessionStore,
{
    user_repository: R,
    wallet_repository: W,
    session_store: S,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    clock: Arc<dyn Clock>,
}

impl<R, W, S> SignupService<R, W, S>
where
    R: UserRepository,
    W: WalletRepository,
    S: SessionStore,
{
    pub fn new(
        user_repository: R,
        wallet_repository: W,
        session_store: S,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repository,
            wallet_repository,
            session_store,
            password_hasher,
            token_provider,
            clock,
        }
    }
}

#[async_trait]
impl<R, W, S> SignupUseCase for SignupService<R, W, S>
where
    R: UserRepository,
    W: WalletRepository,
    S: SessionStore,
{
    async fn execute(&self, command: SignupCommand) -> Result<AuthSession, SignupError> {
        let existing = self
            .user_repository
            .find_by_email(command.email())
            .await
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(SignupError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| SignupError::HashingFailed(e.to_string()))?;

        let user = User::from_new(
            NewUser {
                email: command.email().to_string(),
                full_name: command.full_name().to_string(),
                role: command.role(),
                gender: command.gender(),
                password_hash,
            },
            UserId::new(),
            self.clock.now(),
        );

        let user = self
            .user_repository
            .create_user(user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => SignupError::EmailAlreadyExists,
                other => SignupError::RepositoryError(other.to_string()),
            })?;

        self.wallet_repository
            .get_or_create(user.id)
            .await
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?;

        if let Err(e) = self.session_store.set_current_user(user.id).await {
            warn!("Could not store session pointer for {}: {}", user.id, e);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| SignupError::TokenFailed(e.to_string()))?;

        info!("New {} account created: {}", user.role.as_str(), user.id);

        Ok(AuthSession::bearer(UserProfile::from(user), access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Gender, Role};
    use crate::modules::store::adapter::outgoing::{CollectionStore, InMemoryKeyValueStore};
    use crate::shared::clock::testing::FixedClock;
    use crate::tests::support::auth_helper::test_jwt_service;
    use crate::tests::support::fixtures::{memory_store, PlainTextHasher};

    fn service(
        store: &CollectionStore<InMemoryKeyValueStore>,
    ) -> SignupService<
        CollectionStore<InMemoryKeyValueStore>,
        CollectionStore<InMemoryKeyValueStore>,
        CollectionStore<InMemoryKeyValueStore>,
    > {
        SignupService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(PlainTextHasher),
            Arc::new(test_jwt_service()),
            Arc::new(FixedClock::at_utc_hour(9)),
        )
    }

    fn command(email: &str) -> SignupCommand {
        SignupCommand::new(
            email.to_string(),
            "secret1".to_string(),
            "Priya Sharma".to_string(),
            Some("tasker".to_string()),
            Some("female".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_signup_creates_user_wallet_and_session() {
        let store = memory_store();
        let session = service(&store).execute(command("priya@example.com")).await.unwrap();

        assert_eq!(session.token_type, "Bearer");
        assert!(!session.access_token.is_empty());
        assert_eq!(session.user.role, Role::Tasker);
        assert_eq!(session.user.gender, Gender::Female);
        assert!(!session.user.is_identity_verified);

        let stored = store
            .find_by_email("priya@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password_hash, "plain:secret1");

        let wallet = store.get_or_create(stored.id).await.unwrap();
        assert_eq!(wallet.balance, 0);
        assert_eq!(store.current_user_id().await.unwrap(), Some(stored.id));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = memory_store();
        let service = service(&store);

        service.execute(command("priya@example.com")).await.unwrap();
        let err = service
            .execute(command("PRIYA@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err, SignupError::EmailAlreadyExists);
    }
}
