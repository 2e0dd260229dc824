use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Bid, BidStatus, TaskStatus};
use crate::modules::task::application::ports::outgoing::{BidRepository, BidRepositoryError};

use super::sea_orm_entity::bids::{
    ActiveModel as BidActiveModel, Column as BidColumn, Entity as BidEntity, Model as BidModel,
};
use super::sea_orm_entity::tasks::Entity as TaskEntity;

fn db_err(e: impl ToString) -> BidRepositoryError {
    BidRepositoryError::DatabaseError(e.to_string())
}

pub(super) fn bid_from_model(model: BidModel) -> Result<Bid, String> {
    let status = BidStatus::parse(&model.status)
        .ok_or_else(|| format!("unknown bid status '{}'", model.status))?;

    Ok(Bid {
        id: model.id,
        task_id: model.task_id,
        helper_id: UserId::from(model.helper_id),
        amount: model.amount,
        estimated_hours: model.estimated_hours,
        message: model.message,
        status,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

#[derive(Clone, Debug)]
pub struct BidRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BidRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain_all(models: Vec<BidModel>) -> Result<Vec<Bid>, BidRepositoryError> {
        models
            .into_iter()
            .map(|m| bid_from_model(m).map_err(BidRepositoryError::DatabaseError))
            .collect()
    }
}

#[async_trait]
impl BidRepository for BidRepositoryPostgres {
    async fn create_bid(&self, bid: Bid) -> Result<Bid, BidRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // Row lock shared with assign_helper.
        let task = TaskEntity::find_by_id(bid.task_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(BidRepositoryError::TaskNotFound)?;
        let status = TaskStatus::parse(&task.status)
            .ok_or_else(|| db_err(format!("unknown task status '{}'", task.status)))?;
        if !status.accepts_bids() {
            return Err(BidRepositoryError::TaskNotOpen(status));
        }

        let active = BidActiveModel {
            id: Set(bid.id),
            task_id: Set(bid.task_id),
            helper_id: Set(bid.helper_id.value()),
            amount: Set(bid.amount),
            estimated_hours: Set(bid.estimated_hours),
            message: Set(bid.message),
            status: Set(bid.status.as_str().to_string()),
            created_at: Set(bid.created_at.fixed_offset()),
        };

        // (task_id, helper_id) carries a unique index.
        let inserted = active.insert(&txn).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return BidRepositoryError::DuplicateBid;
            }
            BidRepositoryError::DatabaseError(e.to_string())
        })?;

        txn.commit().await.map_err(db_err)?;

        bid_from_model(inserted).map_err(BidRepositoryError::DatabaseError)
    }

    async fn list_for_task(&self, task_id: Uuid) -> Result<Vec<Bid>, BidRepositoryError> {
        let models = BidEntity::find()
            .filter(BidColumn::TaskId.eq(task_id))
            .order_by_asc(BidColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| BidRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain_all(models)
    }

    async fn list_for_helper(&self, helper_id: UserId) -> Result<Vec<Bid>, BidRepositoryError> {
        let models = BidEntity::find()
            .filter(BidColumn::HelperId.eq(helper_id.value()))
            .order_by_desc(BidColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| BidRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain_all(models)
    }
}
