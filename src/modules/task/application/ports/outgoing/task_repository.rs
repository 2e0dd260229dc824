use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::task::application::domain::entities::{
    HelperSelection, SelectionError, Task, TaskFilter, TaskStatus, TaskTransition,
};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create_task(&self, task: Task) -> Result<Task, TaskRepositoryError>;

    async fn find_by_id(&self, task_id: Uuid) -> Result<Option<Task>, TaskRepositoryError>;

    /// Tasks matching `filter`, newest first.
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Apply `transition` only if the stored status still equals
    /// `transition.from_status()`.
    async fn transition(
        &self,
        task_id: Uuid,
        transition: TaskTransition,
    ) -> Result<Task, TaskRepositoryError>;

    /// Assign the bid's helper and settle every bid on the task in one write.
    async fn assign_helper(
        &self,
        task_id: Uuid,
        bid_id: Uuid,
    ) -> Result<HelperSelection, TaskRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskRepositoryError {
    #[error("Task not found")]
    NotFound,

    #[error("Task is {0}")]
    StatusConflict(TaskStatus),

    #[error("Bid does not belong to this task")]
    BidNotOnTask,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<SelectionError> for TaskRepositoryError {
    fn from(e: SelectionError) -> Self {
        match e {
            SelectionError::TaskNotOpen(status) => TaskRepositoryError::StatusConflict(status),
            SelectionError::BidNotOnTask => TaskRepositoryError::BidNotOnTask,
        }
    }
}
