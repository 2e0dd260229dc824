use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::verification::application::domain::entities::Wallet,
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use tracing::error;

/// My wallet
///
/// Created with a zero balance on first access.
#[utoipa::path(
    get,
    path = "/api/wallet",
    tag = "verifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Wallet balance and bonus flag", body = inline(SuccessResponse<Wallet>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/wallet")]
pub async fn get_wallet_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.verification.wallet.execute(user.user_id).await {
        Ok(wallet) => ApiResponse::success(wallet),
        Err(e) => {
            error!("Error loading wallet: {}", e);
            ApiResponse::internal_error()
        }
    }
}
