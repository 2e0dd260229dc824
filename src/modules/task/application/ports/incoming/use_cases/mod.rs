mod accept_task;
mod browse_tasks;
mod complete_task;
mod get_task_detail;
mod helper_dashboard;
mod place_bid;
mod post_task;
mod select_helper;
mod tasker_dashboard;

pub use accept_task::{AcceptTaskCommand, AcceptTaskError, AcceptTaskUseCase};
pub use browse_tasks::{BrowseTasksQuery, BrowseTasksUseCase};
pub use complete_task::{CompleteTaskError, CompleteTaskUseCase};
pub use get_task_detail::{BidView, GetTaskDetailUseCase, TaskDetail, TaskQueryError};
pub use helper_dashboard::{BidWithTask, HelperDashboard, HelperDashboardUseCase, HelperStats};
pub use place_bid::{PlaceBidCommand, PlaceBidError, PlaceBidUseCase};
pub use post_task::{PostTaskCommand, PostTaskError, PostTaskUseCase, TASK_CATEGORIES};
pub use select_helper::{SelectHelperCommand, SelectHelperError, SelectHelperUseCase};
pub use tasker_dashboard::{TaskSummary, TaskerDashboard, TaskerDashboardUseCase};
