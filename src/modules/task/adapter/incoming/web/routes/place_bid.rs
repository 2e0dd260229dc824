use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::task::application::{
        domain::entities::Bid,
        ports::incoming::use_cases::{PlaceBidCommand, PlaceBidError},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceBidRequest {
    /// Whole rupees
    #[schema(example = 450)]
    pub amount: i64,
    #[schema(example = 2.5)]
    pub estimated_hours: f64,
    #[schema(example = "I have fixed many taps like this one.")]
    pub message: String,
}

/// Bid on an open task
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/bids",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Task id")),
    request_body = PlaceBidRequest,
    responses(
        (status = 201, description = "Bid placed", body = inline(SuccessResponse<Bid>)),
        (status = 400, description = "Invalid bid form", body = ErrorResponse),
        (status = 403, description = "Caller is not a helper or owns the task", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 409, description = "Already bid, or task no longer open", body = ErrorResponse),
    )
)]
#[post("/api/tasks/{id}/bids")]
pub async fn place_bid_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PlaceBidRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = match PlaceBidCommand::new(
        path.into_inner(),
        user.user_id,
        dto.amount,
        dto.estimated_hours,
        dto.message,
    ) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.task.place_bid.execute(command).await {
        Ok(bid) => {
            info!(bid_id = %bid.id, task_id = %bid.task_id, "Bid placed");
            ApiResponse::created(bid)
        }

        Err(PlaceBidError::TaskNotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Task not found")
        }
        Err(PlaceBidError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ PlaceBidError::NotAHelper) => {
            ApiResponse::forbidden("NOT_A_HELPER", &e.to_string())
        }
        Err(e @ PlaceBidError::OwnTask) => ApiResponse::forbidden("OWN_TASK", &e.to_string()),
        Err(e @ PlaceBidError::TaskNotOpen(_)) => {
            ApiResponse::conflict("TASK_NOT_OPEN", &e.to_string())
        }
        Err(e @ PlaceBidError::DuplicateBid) => {
            ApiResponse::conflict("DUPLICATE_BID", &e.to_string())
        }

        Err(PlaceBidError::RepositoryError(e)) => {
            error!("Repository error placing bid: {}", e);
            ApiResponse::internal_error()
        }
    }
}
