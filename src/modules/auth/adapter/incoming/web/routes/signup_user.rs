use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, SignupCommand, SignupError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    #[schema(example = "priya@example.com")]
    pub email: String,

    #[schema(example = "demo1234")]
    pub password: String,

    #[schema(example = "Priya Sharma")]
    pub full_name: String,

    /// "tasker" or "helper"
    #[schema(example = "tasker")]
    pub role: Option<String>,

    /// "male", "female" or "other"
    #[schema(example = "female")]
    pub gender: Option<String>,
}

/// Create an account
///
/// Registers a tasker or helper, opens their wallet and returns a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "Invalid signup form", body = ErrorResponse),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "An account with this email already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_user_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command =
        match SignupCommand::new(dto.email, dto.password, dto.full_name, dto.role, dto.gender) {
            Ok(command) => command,
            Err(errors) => return ApiResponse::validation_error(&errors),
        };

    info!(email = %command.email(), role = %command.role().as_str(), "Signup attempt");

    match data.auth.signup.execute(command).await {
        Ok(session) => ApiResponse::created(session),

        Err(SignupError::EmailAlreadyExists) => {
            warn!("Signup rejected: email already registered");
            ApiResponse::conflict(
                "EMAIL_ALREADY_EXISTS",
                "An account with this email already exists",
            )
        }

        Err(SignupError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed during signup");
            ApiResponse::internal_error()
        }

        Err(SignupError::TokenFailed(ref e)) => {
            error!(error = %e, "Token generation failed during signup");
            ApiResponse::internal_error()
        }

        Err(SignupError::RepositoryError(ref e)) => {
            error!(error = %e, "Repository error during signup");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Gender, Role, UserId, UserProfile};
    use crate::auth::application::ports::incoming::use_cases::SignupUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};

    #[derive(Clone)]
    struct MockSignup {
        result: Result<(), SignupError>,
    }

    #[async_trait]
    impl SignupUseCase for MockSignup {
        async fn execute(&self, command: SignupCommand) -> Result<AuthSession, SignupError> {
            self.result.clone()?;
            Ok(AuthSession::bearer(
                UserProfile {
                    id: UserId::new(),
                    email: command.email().to_string(),
                    full_name: command.full_name().to_string(),
                    role: command.role(),
                    gender: command.gender(),
                    phone: None,
                    bio: None,
                    hourly_rate: None,
                    avatar_url: None,
                    is_identity_verified: false,
                    created_at: Utc::now(),
                },
                "signed.jwt.token".to_string(),
            ))
        }
    }

    fn valid_body() -> Value {
        json!({
            "email": "Priya@Example.com",
            "password": "demo1234",
            "full_name": "Priya Sharma",
            "role": "tasker",
            "gender": "female"
        })
    }

    async fn call(mock: MockSignup, body: Value) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default().with_signup(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(signup_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_signup_success_returns_session() {
        let (status, body) = call(MockSignup { result: Ok(()) }, valid_body()).await;

        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["email"], "priya@example.com");
        assert_eq!(body["data"]["user"]["role"], "tasker");
        assert_eq!(body["data"]["token_type"], "Bearer");
        assert!(body["data"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_signup_duplicate_email_conflict() {
        let (status, body) = call(
            MockSignup {
                result: Err(SignupError::EmailAlreadyExists),
            },
            valid_body(),
        )
        .await;

        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_signup_invalid_form_lists_fields() {
        let (status, body) = call(
            MockSignup { result: Ok(()) },
            json!({
                "email": "not-an-email",
                "password": "123",
                "full_name": "P",
                "role": "admin"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Invalid email address");

        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(
            fields,
            vec!["email", "password", "full_name", "role", "gender"]
        );
    }

    #[actix_web::test]
    async fn test_signup_repository_failure_is_internal() {
        let (status, body) = call(
            MockSignup {
                result: Err(SignupError::RepositoryError("disk full".to_string())),
            },
            valid_body(),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[::core::prelude::v1::test]
    fn test_role_and_gender_parse_from_dto_values() {
        let command = SignupCommand::new(
            "rahul@example.com".to_string(),
            "demo1234".to_string(),
            "Rahul Kumar".to_string(),
            Some("helper".to_string()),
            Some("male".to_string()),
        )
        .unwrap();
        assert_eq!(command.role(), Role::Helper);
        assert_eq!(command.gender(), Gender::Male);
    }
}
