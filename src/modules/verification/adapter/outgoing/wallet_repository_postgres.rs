use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::Wallet;
use crate::modules::verification::application::ports::outgoing::{
    WalletRepository, WalletRepositoryError,
};

use super::sea_orm_entity::wallets::{
    ActiveModel as WalletActiveModel, Column as WalletColumn, Entity as WalletEntity,
    Model as WalletModel,
};

fn db_err(e: impl ToString) -> WalletRepositoryError {
    WalletRepositoryError(e.to_string())
}

#[derive(Clone, Debug)]
pub struct WalletRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WalletRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: WalletModel) -> Wallet {
        Wallet {
            user_id: UserId::from(model.user_id),
            balance: model.balance,
            verification_bonus_claimed: model.verification_bonus_claimed,
        }
    }

    async fn find(&self, user_id: UserId) -> Result<Option<Wallet>, WalletRepositoryError> {
        Ok(WalletEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(Self::to_domain))
    }
}

#[async_trait]
impl WalletRepository for WalletRepositoryPostgres {
    async fn get_or_create(&self, user_id: UserId) -> Result<Wallet, WalletRepositoryError> {
        if let Some(wallet) = self.find(user_id).await? {
            return Ok(wallet);
        }

        let empty = Wallet::empty(user_id);
        let active = WalletActiveModel {
            user_id: Set(user_id.value()),
            balance: Set(empty.balance),
            verification_bonus_claimed: Set(empty.verification_bonus_claimed),
        };

        // A concurrent first use may have inserted the row already.
        WalletEntity::insert(active)
            .on_conflict(
                OnConflict::column(WalletColumn::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(self.find(user_id).await?.unwrap_or(empty))
    }

    async fn claim_verification_bonus(
        &self,
        user_id: UserId,
        amount: i64,
    ) -> Result<bool, WalletRepositoryError> {
        self.get_or_create(user_id).await?;

        let result = WalletEntity::update_many()
            .col_expr(
                WalletColumn::Balance,
                Expr::col(WalletColumn::Balance).add(amount),
            )
            .col_expr(WalletColumn::VerificationBonusClaimed, Expr::value(true))
            .filter(WalletColumn::UserId.eq(user_id.value()))
            .filter(WalletColumn::VerificationBonusClaimed.eq(false))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected == 1)
    }
}
