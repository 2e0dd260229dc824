use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Bid, TaskStatus};

#[async_trait]
pub trait BidRepository: Send + Sync {
    /// Fails with `DuplicateBid` if the helper already bid on the task, and
    /// with `TaskNotOpen` if the task stopped taking bids. The status check
    /// and the insert are one atomic step against helper selection.
    async fn create_bid(&self, bid: Bid) -> Result<Bid, BidRepositoryError>;

    async fn list_for_task(&self, task_id: Uuid) -> Result<Vec<Bid>, BidRepositoryError>;

    async fn list_for_helper(&self, helper_id: UserId) -> Result<Vec<Bid>, BidRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BidRepositoryError {
    #[error("You have already placed a bid on this task")]
    DuplicateBid,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Task is {0}, bids are closed")]
    TaskNotOpen(TaskStatus),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
