use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::Wallet;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetWalletError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetWalletUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Wallet, GetWalletError>;
}
