use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::task::application::{
        domain::entities::Task,
        ports::incoming::use_cases::{AcceptTaskCommand, AcceptTaskError},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{http::StatusCode, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AcceptTaskRequest {
    /// Live selfie as a data URI or uploaded image URL
    #[schema(example = "https://files.example/selfies/rahul.jpg")]
    #[serde(default)]
    pub selfie_url: String,
}

/// Start an assigned task
///
/// Runs the face check on the selfie, records an approved face scan and
/// moves the task to `in_progress`.
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/accept",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Task id")),
    request_body = AcceptTaskRequest,
    responses(
        (status = 200, description = "Task in progress", body = inline(SuccessResponse<Task>)),
        (status = 400, description = "Selfie missing", body = ErrorResponse),
        (status = 403, description = "Caller is not the assigned helper", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 409, description = "Task is not assigned", body = ErrorResponse),
        (status = 422, description = "Face check rejected the selfie", body = ErrorResponse),
        (status = 503, description = "Face check unavailable", body = ErrorResponse),
    )
)]
#[post("/api/tasks/{id}/accept")]
pub async fn accept_task_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AcceptTaskRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match AcceptTaskCommand::new(
        path.into_inner(),
        user.user_id,
        req.into_inner().selfie_url,
    ) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.task.accept.execute(command).await {
        Ok(task) => {
            info!(task_id = %task.id, helper_id = %user.user_id, "Task started");
            ApiResponse::success(task)
        }

        Err(AcceptTaskError::TaskNotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Task not found")
        }
        Err(e @ AcceptTaskError::NotAssignedHelper) => {
            ApiResponse::forbidden("NOT_ASSIGNED_HELPER", &e.to_string())
        }
        Err(e @ AcceptTaskError::WrongStatus(_)) => {
            ApiResponse::conflict("INVALID_TASK_STATUS", &e.to_string())
        }
        Err(AcceptTaskError::FaceVerificationFailed(reason)) => {
            warn!(helper_id = %user.user_id, reason = %reason, "Face check rejected");
            ApiResponse::unprocessable("FACE_VERIFICATION_FAILED", &reason)
        }
        Err(AcceptTaskError::VerifierUnavailable(e)) => {
            error!("Face verifier unavailable: {}", e);
            ApiResponse::error(
                StatusCode::SERVICE_UNAVAILABLE,
                "FACE_VERIFIER_UNAVAILABLE",
                "Face verification is temporarily unavailable",
            )
        }

        Err(AcceptTaskError::RepositoryError(e)) => {
            error!("Repository error accepting task: {}", e);
            ApiResponse::internal_error()
        }
    }
}
