use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::task::application::{
        domain::entities::Task,
        ports::incoming::use_cases::{PostTaskCommand, PostTaskError},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostTaskRequest {
    #[schema(example = "Fix leaking bathroom tap")]
    pub title: String,
    #[schema(example = "One tap in the main bathroom has been dripping for a week.")]
    pub description: String,
    #[schema(example = "Plumbing")]
    pub category: String,
    #[schema(example = "Indiranagar, Bengaluru")]
    pub location_address: String,
    /// Whole rupees
    #[schema(example = 300)]
    pub budget_min: i64,
    #[schema(example = 600)]
    pub budget_max: i64,
}

/// Post a task
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    request_body = PostTaskRequest,
    responses(
        (status = 201, description = "Task created", body = inline(SuccessResponse<Task>)),
        (status = 400, description = "Invalid task form", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a tasker", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[post("/api/tasks")]
pub async fn post_task_handler(
    user: AuthenticatedUser,
    req: web::Json<PostTaskRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = match PostTaskCommand::new(
        user.user_id,
        dto.title,
        dto.description,
        dto.category,
        dto.location_address,
        dto.budget_min,
        dto.budget_max,
    ) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.task.post_task.execute(command).await {
        Ok(task) => {
            info!(task_id = %task.id, tasker_id = %task.tasker_id, "Task posted");
            ApiResponse::created(task)
        }

        Err(PostTaskError::NotATasker) => {
            warn!(user_id = %user.user_id, "Non-tasker tried to post a task");
            ApiResponse::forbidden("NOT_A_TASKER", "Only taskers can post tasks")
        }

        Err(PostTaskError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(PostTaskError::RepositoryError(e)) => {
            error!("Repository error posting task: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::task::application::ports::incoming::use_cases::PostTaskUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    struct MockPostTask {
        fail_with: Option<PostTaskError>,
    }

    #[async_trait]
    impl PostTaskUseCase for MockPostTask {
        async fn execute(&self, command: PostTaskCommand) -> Result<Task, PostTaskError> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            Ok(Task::from_new(
                command.into_new_task(),
                Uuid::new_v4(),
                Utc::now(),
            ))
        }
    }

    fn valid_body() -> Value {
        json!({
            "title": "Fix leaking bathroom tap",
            "description": "One tap in the main bathroom has been dripping for a week.",
            "category": "Plumbing",
            "location_address": "Indiranagar, Bengaluru",
            "budget_min": 300,
            "budget_max": 600
        })
    }

    async fn post(mock: MockPostTask, body: Value) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default().with_post_task(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(crate::shared::api::custom_json_config())
                .service(post_task_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .insert_header(("Authorization", bearer(UserId::new())))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_post_task_created() {
        let (status, body) = post(MockPostTask { fail_with: None }, valid_body()).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["status"], "open");
        assert_eq!(body["data"]["budget_max"], 600);
        assert!(body["data"]["id"].is_string());
    }

    #[actix_web::test]
    async fn test_budget_order_is_validated() {
        let mut body = valid_body();
        body["budget_max"] = json!(200);

        let (status, body) = post(MockPostTask { fail_with: None }, body).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["fields"][0]["field"], "budget_max");
        assert_eq!(
            body["error"]["message"],
            "Maximum budget must be greater than minimum budget"
        );
    }

    #[actix_web::test]
    async fn test_helper_cannot_post() {
        let (status, body) = post(
            MockPostTask {
                fail_with: Some(PostTaskError::NotATasker),
            },
            valid_body(),
        )
        .await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "NOT_A_TASKER");
    }
}
