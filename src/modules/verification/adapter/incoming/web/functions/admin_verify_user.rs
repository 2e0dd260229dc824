use actix_web::{http::Method, http::StatusCode, route, web, HttpRequest, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::{authenticate, error_response, json_response, preflight, AuthMessages};
use crate::modules::verification::application::ports::incoming::use_cases::{
    ReviewVerificationCommand, ReviewVerificationError,
};
use crate::AppState;

const AUTH_MESSAGES: AuthMessages = AuthMessages {
    missing: "Unauthorized - No authorization header",
    invalid: "Unauthorized - Invalid token",
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AdminVerifyRequest {
    pub verification_id: Option<String>,
    /// "approve" or "reject"
    #[schema(example = "approve")]
    pub action: Option<String>,
    pub notes: Option<String>,
}

/// Approve or reject a verification record (admin only)
#[utoipa::path(
    post,
    path = "/functions/v1/admin-verify-user",
    tag = "functions",
    security(("bearer_auth" = [])),
    request_body = AdminVerifyRequest,
    responses(
        (status = 200, description = "`{success, verification, message}`"),
        (status = 400, description = "Missing fields or invalid action"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Verification not found"),
    )
)]
#[route("/functions/v1/admin-verify-user", method = "POST", method = "OPTIONS")]
pub async fn admin_verify_user_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if req.method() == Method::OPTIONS {
        return preflight();
    }

    let admin_id = match authenticate(&req, &AUTH_MESSAGES) {
        Ok(id) => id,
        Err(response) => {
            warn!("Admin review rejected: caller not authenticated");
            return response;
        }
    };

    let dto: AdminVerifyRequest = match serde_json::from_slice(&body) {
        Ok(dto) => dto,
        Err(e) => {
            warn!(error = %e, "Admin review body is not valid JSON");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let command = match ReviewVerificationCommand::new(
        admin_id,
        dto.verification_id,
        dto.action,
        dto.notes,
    ) {
        Ok(command) => command,
        Err(errors) => return error_response(StatusCode::BAD_REQUEST, errors.first_message()),
    };
    let action = command.action();

    match data.verification.review.execute(command).await {
        Ok(verification) => {
            info!(
                verification_id = %verification.id,
                admin_id = %admin_id,
                action = action.past_tense(),
                "Verification reviewed"
            );
            json_response(
                StatusCode::OK,
                json!({
                    "success": true,
                    "verification": verification,
                    "message": format!("Verification {} successfully", action.past_tense()),
                }),
            )
        }

        Err(e @ ReviewVerificationError::NotAdmin) => {
            warn!(user_id = %admin_id, "User is not an admin");
            error_response(StatusCode::FORBIDDEN, &e.to_string())
        }

        Err(e @ ReviewVerificationError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, &e.to_string())
        }

        Err(ReviewVerificationError::RepositoryError(e)) => {
            error!("Repository error during admin review: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
