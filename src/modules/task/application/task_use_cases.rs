use std::sync::Arc;

use crate::modules::task::application::ports::incoming::use_cases::{
    AcceptTaskUseCase, BrowseTasksUseCase, CompleteTaskUseCase, GetTaskDetailUseCase,
    HelperDashboardUseCase, PlaceBidUseCase, PostTaskUseCase, SelectHelperUseCase,
    TaskerDashboardUseCase,
};

#[derive(Clone)]
pub struct TaskUseCases {
    pub post_task: Arc<dyn PostTaskUseCase + Send + Sync>,
    pub browse: Arc<dyn BrowseTasksUseCase + Send + Sync>,
    pub detail: Arc<dyn GetTaskDetailUseCase + Send + Sync>,
    pub place_bid: Arc<dyn PlaceBidUseCase + Send + Sync>,
    pub select_helper: Arc<dyn SelectHelperUseCase + Send + Sync>,
    pub accept: Arc<dyn AcceptTaskUseCase + Send + Sync>,
    pub complete: Arc<dyn CompleteTaskUseCase + Send + Sync>,
    pub tasker_dashboard: Arc<dyn TaskerDashboardUseCase + Send + Sync>,
    pub helper_dashboard: Arc<dyn HelperDashboardUseCase + Send + Sync>,
}
