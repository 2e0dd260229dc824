use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{
            domain::entities::UserProfile, ports::incoming::use_cases::FetchProfileError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// Current user profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the caller", body = inline(SuccessResponse<UserProfile>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/users/me")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.by_id(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::RepositoryError(e)) => {
            error!("Database error fetching user profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    /// Last user to sign up or log in on this server, if any
    user: Option<UserProfile>,
}

/// Resume the stored session
///
/// Resolves the server-side "current user" pointer without a token, the way
/// a single-user demo client restores itself on reload.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Stored session, user is null when nobody is signed in", body = inline(SuccessResponse<SessionResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn current_session_handler(data: web::Data<AppState>) -> impl Responder {
    match data.auth.fetch_profile.current().await {
        Ok(user) => ApiResponse::success(SessionResponse { user }),

        Err(e) => {
            error!("Error resolving current session: {}", e);
            ApiResponse::internal_error()
        }
    }
}
