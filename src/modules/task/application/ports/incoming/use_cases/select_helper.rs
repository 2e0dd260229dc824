use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{HelperSelection, TaskStatus};

#[derive(Debug, Clone, Copy)]
pub struct SelectHelperCommand {
    pub task_id: Uuid,
    pub tasker_id: UserId,
    pub bid_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectHelperError {
    #[error("Task not found")]
    TaskNotFound,

    #[error("Only the task owner can select a helper")]
    NotOwner,

    #[error("Task is {0}, only open tasks can be assigned")]
    TaskNotOpen(TaskStatus),

    #[error("Bid does not belong to this task")]
    BidNotOnTask,

    #[error("This pairing is not allowed between 7 PM and 6 AM")]
    GenderSafetyRestricted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SelectHelperUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SelectHelperCommand,
    ) -> Result<HelperSelection, SelectHelperError>;
}
