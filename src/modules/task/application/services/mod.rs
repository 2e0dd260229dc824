mod accept_task_service;
mod browse_tasks_service;
mod complete_task_service;
mod dashboard_service;
mod place_bid_service;
mod post_task_service;
mod select_helper_service;
mod task_detail_service;

pub use accept_task_service::AcceptTaskService;
pub use browse_tasks_service::BrowseTasksService;
pub use complete_task_service::CompleteTaskService;
pub use dashboard_service::{HelperDashboardService, TaskerDashboardService};
pub use place_bid_service::PlaceBidService;
pub use post_task_service::PostTaskService;
pub use select_helper_service::SelectHelperService;
pub use task_detail_service::TaskDetailService;
