use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::verification::application::{
        domain::entities::Verification,
        ports::incoming::use_cases::{MyVerifications, UploadDocumentCommand},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

/// My verification records
#[utoipa::path(
    get,
    path = "/api/verifications/me",
    tag = "verifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Records and combined identity status", body = inline(SuccessResponse<MyVerifications>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/verifications/me")]
pub async fn my_verifications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.verification.my_verifications.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => {
            error!("Error loading verifications: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadDocumentRequest {
    /// "pan" or "police"
    #[serde(rename = "type", default)]
    #[schema(example = "pan")]
    pub kind: String,
    #[serde(default)]
    #[schema(example = "https://files.example/docs/pan.jpg")]
    pub document_url: String,
}

/// Upload a PAN or police clearance document
///
/// Stores the document as a pending record, replacing any earlier upload of
/// the same type.
#[utoipa::path(
    post,
    path = "/api/verifications/documents",
    tag = "verifications",
    security(("bearer_auth" = [])),
    request_body = UploadDocumentRequest,
    responses(
        (status = 201, description = "Pending record", body = inline(SuccessResponse<Verification>)),
        (status = 400, description = "Unknown type or missing document", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/verifications/documents")]
pub async fn upload_document_handler(
    user: AuthenticatedUser,
    req: web::Json<UploadDocumentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = match UploadDocumentCommand::new(user.user_id, &dto.kind, dto.document_url) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.verification.upload_document.execute(command).await {
        Ok(record) => {
            info!(user_id = %user.user_id, kind = %record.kind, "Document uploaded");
            ApiResponse::created(record)
        }
        Err(e) => {
            error!("Error storing uploaded document: {}", e);
            ApiResponse::internal_error()
        }
    }
}
