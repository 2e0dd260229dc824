use async_trait::async_trait;

use crate::modules::task::application::domain::entities::Task;
use crate::modules::task::application::ports::incoming::use_cases::{
    BrowseTasksQuery, BrowseTasksUseCase, TaskQueryError,
};
use crate::modules::task::application::ports::outgoing::TaskRepository;

pub struct BrowseTasksService<T>
where
    T: TaskRepository,
{
    task_repository: T,
}

impl<T> BrowseTasksService<T>
where
    T: TaskRepository,
{
    pub fn new(task_repository: T) -> Self {
        Self { task_repository }
    }
}

#[async_trait]
impl<T> BrowseTasksUseCase for BrowseTasksService<T>
where
    T: TaskRepository,
{
    async fn execute(&self, query: BrowseTasksQuery) -> Result<Vec<Task>, TaskQueryError> {
        self.task_repository
            .list_tasks(&query.to_filter())
            .await
            .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))
    }
}
