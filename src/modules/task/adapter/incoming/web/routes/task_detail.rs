use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::task::application::ports::incoming::use_cases::{TaskDetail, TaskQueryError},
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Task detail with its bids
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task, tasker name and enriched bids", body = inline(SuccessResponse<TaskDetail>)),
        (status = 404, description = "Task not found", body = ErrorResponse),
    )
)]
#[get("/api/tasks/{id}")]
pub async fn task_detail_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.task.detail.execute(path.into_inner()).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(TaskQueryError::NotFound) => ApiResponse::not_found("TASK_NOT_FOUND", "Task not found"),

        Err(TaskQueryError::RepositoryError(e)) => {
            error!("Repository error loading task detail: {}", e);
            ApiResponse::internal_error()
        }
    }
}
