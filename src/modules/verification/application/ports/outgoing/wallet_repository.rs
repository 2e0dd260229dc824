use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::Wallet;

#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Existing wallet, or a fresh zero-balance one persisted on first use.
    async fn get_or_create(&self, user_id: UserId) -> Result<Wallet, WalletRepositoryError>;

    /// Credit `amount` unless the bonus was already claimed.
    /// Returns whether this call did the crediting.
    async fn claim_verification_bonus(
        &self,
        user_id: UserId,
        amount: i64,
    ) -> Result<bool, WalletRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Wallet storage error: {0}")]
pub struct WalletRepositoryError(pub String);
