use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::task::application::{
        domain::entities::Task, ports::incoming::use_cases::BrowseTasksQuery,
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use tracing::error;

/// Browse open tasks
///
/// Lists open tasks, newest first. `category=all` or a blank value disables
/// the category filter.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    params(BrowseTasksQuery),
    responses(
        (status = 200, description = "Open tasks", body = inline(SuccessResponse<Vec<Task>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/tasks")]
pub async fn browse_tasks_handler(
    query: web::Query<BrowseTasksQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.task.browse.execute(query.into_inner()).await {
        Ok(tasks) => ApiResponse::success(tasks),
        Err(e) => {
            error!("Error browsing tasks: {}", e);
            ApiResponse::internal_error()
        }
    }
}
