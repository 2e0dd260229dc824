use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::ports::incoming::use_cases::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Log out
///
/// Clears the server-side session pointer. Bearer tokens are stateless and
/// simply expire.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = inline(crate::api::schemas::SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(user.user_id).await {
        Ok(()) => info!(user_id = %user.user_id, "User logged out successfully"),

        // The client drops its token either way.
        Err(LogoutError::SessionError(ref e)) => {
            error!(error = %e, "Session storage error during logout");
        }
    }

    ApiResponse::success(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::incoming::use_cases::LogoutUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockLogout {
        result: Result<(), LogoutError>,
    }

    #[async_trait]
    impl LogoutUseCase for MockLogout {
        async fn execute(&self, _user_id: UserId) -> Result<(), LogoutError> {
            self.result.clone()
        }
    }

    async fn post_logout(result: Result<(), LogoutError>, auth: Option<String>) -> u16 {
        let app_state = TestAppStateBuilder::default()
            .with_logout(MockLogout { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(logout_user_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/auth/logout");
        if let Some(header) = auth {
            req = req.insert_header(("Authorization", header));
        }

        test::call_service(&app, req.to_request())
            .await
            .status()
            .as_u16()
    }

    #[actix_web::test]
    async fn test_logout_success() {
        let status = post_logout(Ok(()), Some(bearer(UserId::new()))).await;
        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn test_logout_session_error_still_succeeds() {
        let status = post_logout(
            Err(LogoutError::SessionError("disk full".to_string())),
            Some(bearer(UserId::new())),
        )
        .await;
        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn test_logout_requires_token() {
        assert_eq!(post_logout(Ok(()), None).await, 401);
    }
}
