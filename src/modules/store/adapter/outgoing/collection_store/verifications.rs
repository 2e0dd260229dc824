use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{CollectionStore, VERIFICATIONS_KEY, WALLETS_KEY};
use crate::auth::application::domain::entities::UserId;
use crate::modules::store::application::ports::outgoing::{KeyValueError, KeyValueStore};
use crate::modules::verification::application::domain::entities::{
    ReviewAction, Verification, VerificationUpsert, Wallet,
};
use crate::modules::verification::application::ports::outgoing::{
    VerificationRepository, VerificationRepositoryError, WalletRepository, WalletRepositoryError,
};

impl From<KeyValueError> for VerificationRepositoryError {
    fn from(e: KeyValueError) -> Self {
        VerificationRepositoryError::DatabaseError(e.to_string())
    }
}

impl From<KeyValueError> for WalletRepositoryError {
    fn from(e: KeyValueError) -> Self {
        WalletRepositoryError(e.to_string())
    }
}

#[async_trait]
impl<K: KeyValueStore + 'static> VerificationRepository for CollectionStore<K> {
    async fn upsert(
        &self,
        upsert: VerificationUpsert,
        now: DateTime<Utc>,
    ) -> Result<Verification, VerificationRepositoryError> {
        let _guard = self.lock().await;
        let mut all: Vec<Verification> = self.load(VERIFICATIONS_KEY).await?;

        let stored = match all
            .iter_mut()
            .find(|v| v.user_id == upsert.user_id && v.kind == upsert.kind)
        {
            Some(existing) => {
                existing.merge(upsert, now);
                existing.clone()
            }
            None => {
                let created = Verification::from_upsert(upsert, Uuid::new_v4(), now);
                all.push(created.clone());
                created
            }
        };

        self.save(VERIFICATIONS_KEY, &all).await?;
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        verification_id: Uuid,
    ) -> Result<Option<Verification>, VerificationRepositoryError> {
        let all: Vec<Verification> = self.load(VERIFICATIONS_KEY).await?;
        Ok(all.into_iter().find(|v| v.id == verification_id))
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Verification>, VerificationRepositoryError> {
        let all: Vec<Verification> = self.load(VERIFICATIONS_KEY).await?;
        Ok(all.into_iter().filter(|v| v.user_id == user_id).collect())
    }

    async fn review(
        &self,
        verification_id: Uuid,
        action: ReviewAction,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Verification, VerificationRepositoryError> {
        let _guard = self.lock().await;
        let mut all: Vec<Verification> = self.load(VERIFICATIONS_KEY).await?;

        let record = all
            .iter_mut()
            .find(|v| v.id == verification_id)
            .ok_or(VerificationRepositoryError::NotFound)?;
        record.review(action, notes, now);
        let reviewed = record.clone();

        self.save(VERIFICATIONS_KEY, &all).await?;
        Ok(reviewed)
    }
}

#[async_trait]
impl<K: KeyValueStore + 'static> WalletRepository for CollectionStore<K> {
    async fn get_or_create(&self, user_id: UserId) -> Result<Wallet, WalletRepositoryError> {
        let _guard = self.lock().await;
        let mut wallets: Vec<Wallet> = self.load(WALLETS_KEY).await?;

        if let Some(existing) = wallets.iter().find(|w| w.user_id == user_id) {
            return Ok(existing.clone());
        }

        let wallet = Wallet::empty(user_id);
        wallets.push(wallet.clone());
        self.save(WALLETS_KEY, &wallets).await?;
        Ok(wallet)
    }

    async fn claim_verification_bonus(
        &self,
        user_id: UserId,
        amount: i64,
    ) -> Result<bool, WalletRepositoryError> {
        let _guard = self.lock().await;
        let mut wallets: Vec<Wallet> = self.load(WALLETS_KEY).await?;

        let credited = match wallets.iter_mut().find(|w| w.user_id == user_id) {
            Some(wallet) => wallet.claim_bonus(amount),
            None => {
                let mut wallet = Wallet::empty(user_id);
                let credited = wallet.claim_bonus(amount);
                wallets.push(wallet);
                credited
            }
        };

        if credited {
            self.save(WALLETS_KEY, &wallets).await?;
        }
        Ok(credited)
    }
}
