use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{
    select_winning_bid, BidStatus, HelperSelection, Task, TaskFilter, TaskStatus, TaskTransition,
};
use crate::modules::task::application::ports::outgoing::{TaskRepository, TaskRepositoryError};

use super::bid_repository_postgres::bid_from_model;
use super::sea_orm_entity::bids::{Column as BidColumn, Entity as BidEntity};
use super::sea_orm_entity::tasks::{
    ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as TaskEntity,
    Model as TaskModel,
};

fn db_err(e: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::DatabaseError(e.to_string())
}

#[derive(Clone, Debug)]
pub struct TaskRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: TaskModel) -> Result<Task, TaskRepositoryError> {
        let status = TaskStatus::parse(&model.status)
            .ok_or_else(|| db_err(format!("unknown task status '{}'", model.status)))?;

        Ok(Task {
            id: model.id,
            tasker_id: UserId::from(model.tasker_id),
            title: model.title,
            description: model.description,
            category: model.category,
            location_address: model.location_address,
            budget_min: model.budget_min,
            budget_max: model.budget_max,
            status,
            created_at: model.created_at.with_timezone(&Utc),
            assigned_helper_id: model.assigned_helper_id.map(UserId::from),
            winning_bid_id: model.winning_bid_id,
            face_scan_verified: model.face_scan_verified,
            face_scan_at: model.face_scan_at.map(|t| t.with_timezone(&Utc)),
            completed_at: model.completed_at.map(|t| t.with_timezone(&Utc)),
        })
    }

    async fn find_task(&self, task_id: Uuid) -> Result<Task, TaskRepositoryError> {
        let model = TaskEntity::find_by_id(task_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(TaskRepositoryError::NotFound)?;

        Self::to_domain(model)
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryPostgres {
    async fn create_task(&self, task: Task) -> Result<Task, TaskRepositoryError> {
        let active = TaskActiveModel {
            id: Set(task.id),
            tasker_id: Set(task.tasker_id.value()),
            title: Set(task.title),
            description: Set(task.description),
            category: Set(task.category),
            location_address: Set(task.location_address),
            budget_min: Set(task.budget_min),
            budget_max: Set(task.budget_max),
            status: Set(task.status.as_str().to_string()),
            created_at: Set(task.created_at.fixed_offset()),
            assigned_helper_id: Set(task.assigned_helper_id.map(|id| id.value())),
            winning_bid_id: Set(task.winning_bid_id),
            face_scan_verified: Set(task.face_scan_verified),
            face_scan_at: Set(task.face_scan_at.map(|t| t.fixed_offset())),
            completed_at: Set(task.completed_at.map(|t| t.fixed_offset())),
        };

        let inserted = active.insert(&*self.db).await.map_err(db_err)?;
        Self::to_domain(inserted)
    }

    async fn find_by_id(&self, task_id: Uuid) -> Result<Option<Task>, TaskRepositoryError> {
        TaskEntity::find_by_id(task_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(Self::to_domain)
            .transpose()
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut query = TaskEntity::find();
        if let Some(status) = filter.status {
            query = query.filter(TaskColumn::Status.eq(status.as_str()));
        }
        if let Some(tasker_id) = filter.tasker_id {
            query = query.filter(TaskColumn::TaskerId.eq(tasker_id.value()));
        }

        let models = query
            .order_by_desc(TaskColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        // Category and free-text matching stay case-insensitive in one place.
        let mut tasks = Vec::with_capacity(models.len());
        for model in models {
            let task = Self::to_domain(model)?;
            if filter.matches(&task) {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    async fn transition(
        &self,
        task_id: Uuid,
        transition: TaskTransition,
    ) -> Result<Task, TaskRepositoryError> {
        let mut task = self.find_task(task_id).await?;
        if task.status != transition.from_status() {
            return Err(TaskRepositoryError::StatusConflict(task.status));
        }
        transition.apply(&mut task);

        let result = TaskEntity::update_many()
            .col_expr(TaskColumn::Status, Expr::value(task.status.as_str()))
            .col_expr(
                TaskColumn::FaceScanVerified,
                Expr::value(task.face_scan_verified),
            )
            .col_expr(
                TaskColumn::FaceScanAt,
                Expr::value(task.face_scan_at.map(|t| t.fixed_offset())),
            )
            .col_expr(
                TaskColumn::CompletedAt,
                Expr::value(task.completed_at.map(|t| t.fixed_offset())),
            )
            .filter(TaskColumn::Id.eq(task_id))
            .filter(TaskColumn::Status.eq(transition.from_status().as_str()))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            // Lost a race with another writer.
            let current = self.find_task(task_id).await?;
            return Err(TaskRepositoryError::StatusConflict(current.status));
        }

        Ok(task)
    }

    async fn assign_helper(
        &self,
        task_id: Uuid,
        bid_id: Uuid,
    ) -> Result<HelperSelection, TaskRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let model = TaskEntity::find_by_id(task_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(TaskRepositoryError::NotFound)?;
        let mut task = Self::to_domain(model)?;

        let mut bids = BidEntity::find()
            .filter(BidColumn::TaskId.eq(task_id))
            .order_by_asc(BidColumn::CreatedAt)
            .all(&txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|m| bid_from_model(m).map_err(TaskRepositoryError::DatabaseError))
            .collect::<Result<Vec<_>, _>>()?;

        select_winning_bid(&mut task, &mut bids, bid_id)?;

        TaskEntity::update_many()
            .col_expr(TaskColumn::Status, Expr::value(task.status.as_str()))
            .col_expr(
                TaskColumn::AssignedHelperId,
                Expr::value(task.assigned_helper_id.map(|id| id.value())),
            )
            .col_expr(TaskColumn::WinningBidId, Expr::value(task.winning_bid_id))
            .filter(TaskColumn::Id.eq(task_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        BidEntity::update_many()
            .col_expr(BidColumn::Status, Expr::value(BidStatus::Accepted.as_str()))
            .filter(BidColumn::Id.eq(bid_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        BidEntity::update_many()
            .col_expr(BidColumn::Status, Expr::value(BidStatus::Rejected.as_str()))
            .filter(BidColumn::TaskId.eq(task_id))
            .filter(BidColumn::Id.ne(bid_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(HelperSelection { task, bids })
    }
}
