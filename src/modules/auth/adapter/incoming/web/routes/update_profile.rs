use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{
            domain::entities::{Gender, ProfileChanges, UserProfile},
            ports::incoming::use_cases::{UpdateProfileCommand, UpdateProfileError},
        },
    },
    shared::{api::ApiResponse, patch::PatchField},
    AppState,
};
use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

/// Omitted fields stay as they are; `null` clears an optional field.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Rahul K")]
    pub full_name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Gender>)]
    pub gender: PatchField<Gender>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "+91 9123456789")]
    pub phone: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 350)]
    pub hourly_rate: PatchField<i64>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar_url: PatchField<String>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileChanges {
            full_name: req.full_name,
            gender: req.gender,
            phone: req.phone,
            bio: req.bio,
            hourly_rate: req.hourly_rate,
            avatar_url: req.avatar_url,
        }
    }
}

/// Edit own profile
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfile>)),
        (status = 400, description = "Invalid profile fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[patch("/api/users/me")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    app_data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateProfileCommand::new(user.user_id, req.into_inner().into()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match app_data.auth.update_profile.execute(command).await {
        Ok(profile) => {
            info!(user_id = %profile.id, "Profile updated");
            ApiResponse::success(profile)
        }

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating user profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::auth::application::ports::incoming::use_cases::UpdateProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};

    /// Applies the changes to a fixed helper profile so the response reflects them.
    struct MockUpdateProfile {
        fail_with: Option<UpdateProfileError>,
    }

    #[async_trait]
    impl UpdateProfileUseCase for MockUpdateProfile {
        async fn execute(
            &self,
            command: UpdateProfileCommand,
        ) -> Result<UserProfile, UpdateProfileError> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }

            let mut profile = UserProfile {
                id: command.user_id(),
                email: "helper@demo.com".to_string(),
                full_name: "Rahul Kumar".to_string(),
                role: Role::Helper,
                gender: Gender::Male,
                phone: None,
                bio: Some("Old bio".to_string()),
                hourly_rate: Some(300),
                avatar_url: None,
                is_identity_verified: false,
                created_at: Utc::now(),
            };
            let changes = command.into_changes();
            changes.full_name.apply_required(&mut profile.full_name);
            changes.bio.apply_to(&mut profile.bio);
            changes.hourly_rate.apply_to(&mut profile.hourly_rate);
            Ok(profile)
        }
    }

    async fn patch_me(mock: MockUpdateProfile, body: Value) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_update_profile(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(crate::shared::api::custom_json_config())
                .service(update_user_profile_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/users/me")
            .insert_header(("Authorization", bearer(UserId::new())))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_patch_merges_only_sent_fields() {
        let (status, body) = patch_me(
            MockUpdateProfile { fail_with: None },
            json!({ "hourly_rate": 350, "bio": null }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["hourly_rate"], 350);
        assert!(body["data"]["bio"].is_null());
        assert_eq!(body["data"]["full_name"], "Rahul Kumar");
    }

    #[actix_web::test]
    async fn test_negative_rate_rejected() {
        let (status, body) = patch_me(
            MockUpdateProfile { fail_with: None },
            json!({ "hourly_rate": -5 }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["fields"][0]["field"], "hourly_rate");
    }

    #[actix_web::test]
    async fn test_unknown_gender_is_bad_request() {
        let (status, body) = patch_me(
            MockUpdateProfile { fail_with: None },
            json!({ "gender": "robot" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_missing_user_is_not_found() {
        let (status, _) = patch_me(
            MockUpdateProfile {
                fail_with: Some(UpdateProfileError::UserNotFound),
            },
            json!({ "full_name": "Rahul K" }),
        )
        .await;

        assert_eq!(status, 404);
    }

    #[actix_web::test]
    async fn test_empty_body_changes_nothing() {
        let (status, body) = patch_me(MockUpdateProfile { fail_with: None }, json!({})).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["bio"], "Old bio");
        assert_eq!(body["data"]["hourly_rate"], 300);
    }

    #[::core::prelude::v1::test]
    fn test_request_schema_builds_with_optional_fields() {
        let schema =
            serde_json::to_value(<UpdateProfileRequest as utoipa::PartialSchema>::schema())
                .unwrap();

        assert!(schema["properties"]["hourly_rate"].is_object());
        let required = schema["required"].as_array().cloned().unwrap_or_default();
        assert!(required.is_empty());
    }
}
