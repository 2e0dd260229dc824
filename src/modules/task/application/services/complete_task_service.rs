use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Task, TaskStatus, TaskTransition};
use crate::modules::task::application::ports::incoming::use_cases::{
    CompleteTaskError, CompleteTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{TaskRepository, TaskRepositoryError};
use crate::shared::clock::Clock;

pub struct CompleteTaskService<T>
where
    T: TaskRepository,
{
    task_repository: T,
    clock: Arc<dyn Clock>,
}

impl<T> CompleteTaskService<T>
where
    T: TaskRepository,
{
    pub fn new(task_repository: T, clock: Arc<dyn Clock>) -> Self {
        Self {
            task_repository,
            clock,
        }
    }
}

#[async_trait]
impl<T> CompleteTaskUseCase for CompleteTaskService<T>
where
    T: TaskRepository,
{
    async fn execute(&self, task_id: Uuid, helper_id: UserId) -> Result<Task, CompleteTaskError> {
        let task = self
            .task_repository
            .find_by_id(task_id)
            .await
            .map_err(|e| CompleteTaskError::RepositoryError(e.to_string()))?
            .ok_or(CompleteTaskError::TaskNotFound)?;

        if !task.is_assigned_to(helper_id) {
            return Err(CompleteTaskError::NotAssignedHelper);
        }
        if task.status != TaskStatus::InProgress {
            return Err(CompleteTaskError::WrongStatus(task.status));
        }

        let completed = self
            .task_repository
            .transition(task_id, TaskTransition::Complete { at: self.clock.now() })
            .await
            .map_err(|e| match e {
                TaskRepositoryError::NotFound => CompleteTaskError::TaskNotFound,
                TaskRepositoryError::StatusConflict(status) => CompleteTaskError::WrongStatus(status),
                other => CompleteTaskError::RepositoryError(other.to_string()),
            })?;

        info!(task_id = %completed.id, helper_id = %helper_id, "Task completed");
        Ok(completed)
    }
}
