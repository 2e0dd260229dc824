use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Task, TaskStatus};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompleteTaskError {
    #[error("Task not found")]
    TaskNotFound,

    #[error("Only the assigned helper can do this")]
    NotAssignedHelper,

    #[error("Task is {0}")]
    WrongStatus(TaskStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Helper marks started work as done. There is no tasker sign-off.
#[async_trait]
pub trait CompleteTaskUseCase: Send + Sync {
    async fn execute(&self, task_id: Uuid, helper_id: UserId) -> Result<Task, CompleteTaskError>;
}
