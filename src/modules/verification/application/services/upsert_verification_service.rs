use async_trait::async_trait;
use std::sync::Arc;

use super::identity_reconciler::reconcile_identity;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::verification::application::domain::entities::{
    Verification, VerificationUpsert,
};
use crate::modules::verification::application::ports::incoming::use_cases::{
    UpsertVerificationError, UpsertVerificationUseCase,
};
use crate::modules::verification::application::ports::outgoing::{
    VerificationRepository, WalletRepository,
};
use crate::shared::clock::Clock;

pub struct UpsertVerificationService<V, U, W>
where
    V: VerificationRepository,
    U: UserRepository,
    W: WalletRepository,
{
    verification_repository: V,
    user_repository: U,
    wallet_repository: W,
    clock: Arc<dyn Clock>,
}

impl<V, U, W> UpsertVerificationService<V, U, W>
where
    V: VerificationRepository,
    U: UserRepository,
    W: WalletRepository,
{
    pub fn new(
        verification_repository: V,
        user_repository: U,
        wallet_repository: W,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            verification_repository,
            user_repository,
            wallet_repository,
            clock,
        }
    }
}

#[async_trait]
impl<V, U, W> UpsertVerificationUseCase for UpsertVerificationService<V, U, W>
where
    V: VerificationRepository,
    U: UserRepository,
    W: WalletRepository,
{
    async fn execute(
        &self,
        upsert: VerificationUpsert,
    ) -> Result<Verification, UpsertVerificationError> {
        let user_id = upsert.user_id;
        let stored = self
            .verification_repository
            .upsert(upsert, self.clock.now())
            .await
            .map_err(|e| UpsertVerificationError::RepositoryError(e.to_string()))?;

        if stored.kind.is_identity_check() {
            reconcile_identity(
                &self.verification_repository,
                &self.user_repository,
                &self.wallet_repository,
                user_id,
            )
            .await
            .map_err(UpsertVerificationError::RepositoryError)?;
        }

        Ok(stored)
    }
}
