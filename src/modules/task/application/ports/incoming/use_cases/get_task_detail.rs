use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::task::application::domain::entities::{Bid, Task};

pub const UNKNOWN_USER_NAME: &str = "Unknown";

/// A bid as the tasker sees it when choosing a helper.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BidView {
    #[serde(flatten)]
    pub bid: Bid,
    pub helper_name: String,
    pub helper_is_identity_verified: bool,
    /// pending, approved, rejected or none
    pub police_status: String,
    /// True when assigning this helper now falls under the evening
    /// restriction for the tasker/helper pairing
    pub gender_safety_restricted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TaskDetail {
    pub task: Task,
    pub tasker_name: String,
    /// Cheapest first
    pub bids: Vec<BidView>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskQueryError {
    #[error("Task not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTaskDetailUseCase: Send + Sync {
    async fn execute(&self, task_id: Uuid) -> Result<TaskDetail, TaskQueryError>;
}
