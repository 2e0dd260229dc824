use actix_web::{http::Method, http::StatusCode, route, web, HttpRequest, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use utoipa::ToSchema;

use super::{authenticate, error_response, json_response, preflight, AuthMessages};
use crate::modules::verification::application::ports::incoming::use_cases::SubmitVerificationCommand;
use crate::AppState;

const AUTH_MESSAGES: AuthMessages = AuthMessages {
    missing: "No authorization header",
    invalid: "Invalid token",
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubmitVerificationRequest {
    #[schema(example = "https://files.example/docs/aadhaar.jpg")]
    pub aadhaar_url: Option<String>,
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQ")]
    pub selfie_url: Option<String>,
    #[schema(example = true)]
    pub consent: Option<bool>,
}

/// Submit Aadhaar and selfie for identity verification
#[utoipa::path(
    post,
    path = "/functions/v1/submit-verification",
    tag = "functions",
    security(("bearer_auth" = [])),
    request_body = SubmitVerificationRequest,
    responses(
        (status = 200, description = "`{success, message, status}`"),
        (status = 400, description = "Missing field or consent not given"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[route("/functions/v1/submit-verification", method = "POST", method = "OPTIONS")]
pub async fn submit_verification_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if req.method() == Method::OPTIONS {
        return preflight();
    }

    let user_id = match authenticate(&req, &AUTH_MESSAGES) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let dto: SubmitVerificationRequest = match serde_json::from_slice(&body) {
        Ok(dto) => dto,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid request body"),
    };

    info!(user_id = %user_id, "Processing verification submission");

    let command = match SubmitVerificationCommand::new(
        user_id,
        dto.aadhaar_url,
        dto.selfie_url,
        dto.consent,
    ) {
        Ok(command) => command,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Missing required fields"),
    };

    match data.verification.submit.execute(command).await {
        Ok(receipt) => {
            info!(user_id = %user_id, status = %receipt.status.as_str(), "Verification submitted");
            json_response(
                StatusCode::OK,
                json!({
                    "success": true,
                    "message": "Verification submitted successfully",
                    "status": receipt.status,
                }),
            )
        }
        Err(e) => {
            error!("Error in submit-verification: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}
