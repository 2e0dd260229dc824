use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::task::application::domain::entities::Task;
use crate::modules::task::application::ports::incoming::use_cases::{
    PostTaskCommand, PostTaskError, PostTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::TaskRepository;
use crate::shared::clock::Clock;

pub struct PostTaskService<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    task_repository: T,
    user_repository: U,
    clock: Arc<dyn Clock>,
}

impl<T, U> PostTaskService<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    pub fn new(task_repository: T, user_repository: U, clock: Arc<dyn Clock>) -> Self {
        Self {
            task_repository,
            user_repository,
            clock,
        }
    }
}

#[async_trait]
impl<T, U> PostTaskUseCase for PostTaskService<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    async fn execute(&self, command: PostTaskCommand) -> Result<Task, PostTaskError> {
        let tasker = self
            .user_repository
            .find_by_id(command.tasker_id())
            .await
            .map_err(|e| PostTaskError::RepositoryError(e.to_string()))?
            .ok_or(PostTaskError::UserNotFound)?;

        if tasker.role != Role::Tasker {
            return Err(PostTaskError::NotATasker);
        }

        let task = Task::from_new(command.into_new_task(), Uuid::new_v4(), self.clock.now());
        let task = self
            .task_repository
            .create_task(task)
            .await
            .map_err(|e| PostTaskError::RepositoryError(e.to_string()))?;

        info!(task_id = %task.id, tasker_id = %task.tasker_id, "Task posted");
        Ok(task)
    }
}
