mod accept_task;
mod browse_tasks;
mod complete_task;
mod dashboards;
mod place_bid;
mod post_task;
mod select_helper;
mod task_detail;

pub use accept_task::{__path_accept_task_handler, accept_task_handler, AcceptTaskRequest};
pub use browse_tasks::{__path_browse_tasks_handler, browse_tasks_handler};
pub use complete_task::{__path_complete_task_handler, complete_task_handler};
pub use dashboards::{
    __path_helper_dashboard_handler, __path_tasker_dashboard_handler, helper_dashboard_handler,
    tasker_dashboard_handler,
};
pub use place_bid::{__path_place_bid_handler, place_bid_handler, PlaceBidRequest};
pub use post_task::{__path_post_task_handler, post_task_handler, PostTaskRequest};
pub use select_helper::{__path_select_helper_handler, select_helper_handler, SelectHelperRequest};
pub use task_detail::{__path_task_detail_handler, task_detail_handler};
