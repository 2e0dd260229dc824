//! Edge-function style endpoints under `/functions/v1`.
//!
//! These keep the bare `{ "error": ... }` body shape and permissive CORS
//! headers their browser clients expect, instead of the API envelope.

mod admin_verify_user;
mod submit_verification;

pub use admin_verify_user::{admin_verify_user_handler, __path_admin_verify_user_handler, AdminVerifyRequest};
pub use submit_verification::{submit_verification_handler, __path_submit_verification_handler, SubmitVerificationRequest};

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde_json::json;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub(crate) fn with_cors(mut builder: actix_web::HttpResponseBuilder) -> actix_web::HttpResponseBuilder {
    builder
        .insert_header(("Access-Control-Allow-Origin", ALLOW_ORIGIN))
        .insert_header(("Access-Control-Allow-Headers", ALLOW_HEADERS));
    builder
}

pub(crate) fn preflight() -> HttpResponse {
    with_cors(HttpResponse::Ok()).finish()
}

pub(crate) fn json_response(status: StatusCode, body: serde_json::Value) -> HttpResponse {
    with_cors(HttpResponse::build(status)).json(body)
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response(status, json!({ "error": message }))
}

/// Messages to answer with when the caller cannot be identified.
pub(crate) struct AuthMessages {
    pub missing: &'static str,
    pub invalid: &'static str,
}

/// Resolve the caller from the `Authorization` header, or the 401 to send.
pub(crate) fn authenticate(req: &HttpRequest, messages: &AuthMessages) -> Result<UserId, HttpResponse> {
    let Some(header) = req.headers().get("Authorization") else {
        return Err(error_response(StatusCode::UNAUTHORIZED, messages.missing));
    };

    let token = header
        .to_str()
        .ok()
        .map(|h| h.trim_start_matches("Bearer ").trim())
        .filter(|t| !t.is_empty());

    let provider = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>();

    match (token, provider) {
        (Some(token), Some(provider)) => provider
            .verify_access_token(token)
            .map(UserId::from)
            .map_err(|_| error_response(StatusCode::UNAUTHORIZED, messages.invalid)),
        (_, None) => {
            tracing::error!("Token provider missing from app data");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
        (None, _) => Err(error_response(StatusCode::UNAUTHORIZED, messages.invalid)),
    }
}
