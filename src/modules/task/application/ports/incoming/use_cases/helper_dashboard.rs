use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::get_task_detail::TaskQueryError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Bid, Task};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BidWithTask {
    #[serde(flatten)]
    pub bid: Bid,
    pub task: Task,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct HelperStats {
    pub total_bids: usize,
    /// Bids still pending
    pub active_bids: usize,
    /// Accepted bids
    pub won_bids: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HelperDashboard {
    pub bids: Vec<BidWithTask>,
    pub stats: HelperStats,
}

#[async_trait]
pub trait HelperDashboardUseCase: Send + Sync {
    async fn execute(&self, helper_id: UserId) -> Result<HelperDashboard, TaskQueryError>;
}
