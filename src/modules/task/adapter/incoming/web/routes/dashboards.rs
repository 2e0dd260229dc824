use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::task::application::ports::incoming::use_cases::{HelperDashboard, TaskerDashboard},
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use tracing::error;

/// Tasker dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/tasker",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own tasks split into active and history", body = inline(SuccessResponse<TaskerDashboard>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/dashboard/tasker")]
pub async fn tasker_dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.task.tasker_dashboard.execute(user.user_id).await {
        Ok(dashboard) => ApiResponse::success(dashboard),
        Err(e) => {
            error!("Error loading tasker dashboard: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Helper dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/helper",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own bids with their tasks and bid stats", body = inline(SuccessResponse<HelperDashboard>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/dashboard/helper")]
pub async fn helper_dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.task.helper_dashboard.execute(user.user_id).await {
        Ok(dashboard) => ApiResponse::success(dashboard),
        Err(e) => {
            error!("Error loading helper dashboard: {}", e);
            ApiResponse::internal_error()
        }
    }
}
