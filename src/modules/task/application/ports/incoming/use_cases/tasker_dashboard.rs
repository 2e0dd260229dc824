use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::get_task_detail::TaskQueryError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::Task;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TaskSummary {
    #[serde(flatten)]
    pub task: Task,
    pub bid_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TaskerDashboard {
    /// open, bidding, assigned and in_progress tasks
    pub active: Vec<TaskSummary>,
    /// completed and cancelled tasks
    pub history: Vec<TaskSummary>,
}

#[async_trait]
pub trait TaskerDashboardUseCase: Send + Sync {
    async fn execute(&self, tasker_id: UserId) -> Result<TaskerDashboard, TaskQueryError>;
}
