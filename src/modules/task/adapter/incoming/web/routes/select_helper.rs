use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::task::application::{
        domain::entities::HelperSelection,
        ports::incoming::use_cases::{SelectHelperCommand, SelectHelperError},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectHelperRequest {
    pub bid_id: Uuid,
}

/// Select a helper
///
/// Accepts one bid, rejects every other bid on the task and moves the task
/// to `assigned`.
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/select-helper",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Task id")),
    request_body = SelectHelperRequest,
    responses(
        (status = 200, description = "Updated task and its bids", body = inline(SuccessResponse<HelperSelection>)),
        (status = 403, description = "Not the task owner, or restricted pairing", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 409, description = "Task not open, or bid belongs elsewhere", body = ErrorResponse),
    )
)]
#[post("/api/tasks/{id}/select-helper")]
pub async fn select_helper_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SelectHelperRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = SelectHelperCommand {
        task_id: path.into_inner(),
        tasker_id: user.user_id,
        bid_id: req.bid_id,
    };

    match data.task.select_helper.execute(command).await {
        Ok(selection) => {
            info!(
                task_id = %selection.task.id,
                bid_id = %command.bid_id,
                "Helper selected"
            );
            ApiResponse::success(selection)
        }

        Err(SelectHelperError::TaskNotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Task not found")
        }
        Err(e @ SelectHelperError::NotOwner) => {
            ApiResponse::forbidden("NOT_TASK_OWNER", &e.to_string())
        }
        Err(e @ SelectHelperError::GenderSafetyRestricted) => {
            warn!(task_id = %command.task_id, "Selection blocked by evening pairing rule");
            ApiResponse::forbidden("GENDER_SAFETY_RESTRICTED", &e.to_string())
        }
        Err(e @ SelectHelperError::TaskNotOpen(_)) => {
            ApiResponse::conflict("TASK_NOT_OPEN", &e.to_string())
        }
        Err(e @ SelectHelperError::BidNotOnTask) => {
            ApiResponse::conflict("BID_NOT_ON_TASK", &e.to_string())
        }

        Err(SelectHelperError::RepositoryError(e)) => {
            error!("Repository error selecting helper: {}", e);
            ApiResponse::internal_error()
        }
    }
}
