use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::Wallet;
use crate::modules::verification::application::ports::incoming::use_cases::{
    GetWalletError, GetWalletUseCase,
};
use crate::modules::verification::application::ports::outgoing::WalletRepository;

pub struct GetWalletService<W>
where
    W: WalletRepository,
{
    wallet_repository: W,
}

impl<W> GetWalletService<W>
where
    W: WalletRepository,
{
    pub fn new(wallet_repository: W) -> Self {
        Self { wallet_repository }
    }
}

#[async_trait]
impl<W> GetWalletUseCase for GetWalletService<W>
where
    W: WalletRepository,
{
    // Accounts created before wallets existed get one on first read.
    async fn execute(&self, user_id: UserId) -> Result<Wallet, GetWalletError> {
        self.wallet_repository
            .get_or_create(user_id)
            .await
            .map_err(|e| GetWalletError::RepositoryError(e.to_string()))
    }
}
