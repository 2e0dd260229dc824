use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    modules::task::application::{
        domain::entities::Task, ports::incoming::use_cases::CompleteTaskError,
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

/// Mark a task completed
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/complete",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task completed", body = inline(SuccessResponse<Task>)),
        (status = 403, description = "Caller is not the assigned helper", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 409, description = "Task is not in progress", body = ErrorResponse),
    )
)]
#[post("/api/tasks/{id}/complete")]
pub async fn complete_task_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .task
        .complete
        .execute(path.into_inner(), user.user_id)
        .await
    {
        Ok(task) => {
            info!(task_id = %task.id, helper_id = %user.user_id, "Task completed");
            ApiResponse::success(task)
        }

        Err(CompleteTaskError::TaskNotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Task not found")
        }
        Err(e @ CompleteTaskError::NotAssignedHelper) => {
            ApiResponse::forbidden("NOT_ASSIGNED_HELPER", &e.to_string())
        }
        Err(e @ CompleteTaskError::WrongStatus(_)) => {
            ApiResponse::conflict("INVALID_TASK_STATUS", &e.to_string())
        }

        Err(CompleteTaskError::RepositoryError(e)) => {
            error!("Repository error completing task: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::task::application::domain::entities::TaskStatus;
    use crate::modules::task::application::ports::incoming::use_cases::CompleteTaskUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::new_task;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;

    struct MockComplete {
        result: Result<TaskStatus, CompleteTaskError>,
    }

    #[async_trait]
    impl CompleteTaskUseCase for MockComplete {
        async fn execute(
            &self,
            task_id: Uuid,
            helper_id: UserId,
        ) -> Result<Task, CompleteTaskError> {
            let status = self.result.clone()?;
            let mut task = Task::from_new(
                new_task(UserId::new(), "Fix leaking bathroom tap"),
                task_id,
                Utc::now(),
            );
            task.status = status;
            task.assigned_helper_id = Some(helper_id);
            task.completed_at = Some(Utc::now());
            Ok(task)
        }
    }

    async fn complete(result: Result<TaskStatus, CompleteTaskError>) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_complete_task(MockComplete { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(complete_task_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/tasks/{}/complete", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(UserId::new())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_complete_success() {
        let (status, body) = complete(Ok(TaskStatus::Completed)).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], "completed");
        assert!(body["data"]["completed_at"].is_string());
    }

    #[actix_web::test]
    async fn test_complete_before_start_conflicts() {
        let (status, body) =
            complete(Err(CompleteTaskError::WrongStatus(TaskStatus::Assigned))).await;

        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "INVALID_TASK_STATUS");
    }

    #[actix_web::test]
    async fn test_other_helper_forbidden() {
        let (status, _) = complete(Err(CompleteTaskError::NotAssignedHelper)).await;
        assert_eq!(status, 403);
    }
}
