use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::{CollectionStore, BIDS_KEY, TASKS_KEY};
use crate::auth::application::domain::entities::UserId;
use crate::modules::store::application::ports::outgoing::{KeyValueError, KeyValueStore};
use crate::modules::task::application::domain::entities::{
    select_winning_bid, Bid, HelperSelection, Task, TaskFilter, TaskTransition,
};
use crate::modules::task::application::ports::outgoing::{
    BidRepository, BidRepositoryError, TaskRepository, TaskRepositoryError,
};

impl From<KeyValueError> for TaskRepositoryError {
    fn from(e: KeyValueError) -> Self {
        TaskRepositoryError::DatabaseError(e.to_string())
    }
}

impl From<KeyValueError> for BidRepositoryError {
    fn from(e: KeyValueError) -> Self {
        BidRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl<K: KeyValueStore + 'static> TaskRepository for CollectionStore<K> {
    async fn create_task(&self, task: Task) -> Result<Task, TaskRepositoryError> {
        let _guard = self.lock().await;
        let mut tasks: Vec<Task> = self.load(TASKS_KEY).await?;
        tasks.push(task.clone());
        self.save(TASKS_KEY, &tasks).await?;
        Ok(task)
    }

    async fn find_by_id(&self, task_id: Uuid) -> Result<Option<Task>, TaskRepositoryError> {
        let tasks: Vec<Task> = self.load(TASKS_KEY).await?;
        Ok(tasks.into_iter().find(|t| t.id == task_id))
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskRepositoryError> {
        let tasks: Vec<Task> = self.load(TASKS_KEY).await?;
        let mut matching: Vec<Task> = tasks.into_iter().filter(|t| filter.matches(t)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn transition(
        &self,
        task_id: Uuid,
        transition: TaskTransition,
    ) -> Result<Task, TaskRepositoryError> {
        let _guard = self.lock().await;
        let mut tasks: Vec<Task> = self.load(TASKS_KEY).await?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(TaskRepositoryError::NotFound)?;
        if task.status != transition.from_status() {
            return Err(TaskRepositoryError::StatusConflict(task.status));
        }
        transition.apply(task);
        let updated = task.clone();

        self.save(TASKS_KEY, &tasks).await?;
        Ok(updated)
    }

    async fn assign_helper(
        &self,
        task_id: Uuid,
        bid_id: Uuid,
    ) -> Result<HelperSelection, TaskRepositoryError> {
        let _guard = self.lock().await;
        let mut tasks: Vec<Task> = self.load(TASKS_KEY).await?;
        let mut bids: Vec<Bid> = self.load(BIDS_KEY).await?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(TaskRepositoryError::NotFound)?;
        select_winning_bid(task, &mut bids, bid_id)?;
        let task = task.clone();

        // One batch so tasks and bids never disagree about the winner.
        self.kv()
            .set_many(vec![
                Self::encode(TASKS_KEY, &tasks)?,
                Self::encode(BIDS_KEY, &bids)?,
            ])
            .await?;

        info!("Task {} assigned via bid {}", task_id, bid_id);

        let bids = bids.into_iter().filter(|b| b.task_id == task_id).collect();
        Ok(HelperSelection { task, bids })
    }
}

#[async_trait]
impl<K: KeyValueStore + 'static> BidRepository for CollectionStore<K> {
    async fn create_bid(&self, bid: Bid) -> Result<Bid, BidRepositoryError> {
        let _guard = self.lock().await;
        let tasks: Vec<Task> = self.load(TASKS_KEY).await?;
        let task = tasks
            .iter()
            .find(|t| t.id == bid.task_id)
            .ok_or(BidRepositoryError::TaskNotFound)?;
        if !task.status.accepts_bids() {
            return Err(BidRepositoryError::TaskNotOpen(task.status));
        }

        let mut bids: Vec<Bid> = self.load(BIDS_KEY).await?;
        if bids
            .iter()
            .any(|b| b.task_id == bid.task_id && b.helper_id == bid.helper_id)
        {
            return Err(BidRepositoryError::DuplicateBid);
        }

        bids.push(bid.clone());
        self.save(BIDS_KEY, &bids).await?;
        Ok(bid)
    }

    async fn list_for_task(&self, task_id: Uuid) -> Result<Vec<Bid>, BidRepositoryError> {
        let bids: Vec<Bid> = self.load(BIDS_KEY).await?;
        Ok(bids.into_iter().filter(|b| b.task_id == task_id).collect())
    }

    async fn list_for_helper(&self, helper_id: UserId) -> Result<Vec<Bid>, BidRepositoryError> {
        let bids: Vec<Bid> = self.load(BIDS_KEY).await?;
        Ok(bids
            .into_iter()
            .filter(|b| b.helper_id == helper_id)
            .collect())
    }
}
