use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Task, TaskStatus};
use crate::shared::validation::ValidationErrors;

/// The assigned helper's request to start work, carrying a live selfie.
#[derive(Debug, Clone)]
pub struct AcceptTaskCommand {
    task_id: Uuid,
    helper_id: UserId,
    selfie_url: String,
}

impl AcceptTaskCommand {
    pub fn new(
        task_id: Uuid,
        helper_id: UserId,
        selfie_url: String,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_min_chars("selfie_url", &selfie_url, 1, "Selfie is required");

        errors.into_result(Self {
            task_id,
            helper_id,
            selfie_url: selfie_url.trim().to_string(),
        })
    }

    pub fn task_id(&self) -> Uuid {
        self.task_id
    }

    pub fn helper_id(&self) -> UserId {
        self.helper_id
    }

    pub fn selfie_url(&self) -> &str {
        &self.selfie_url
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AcceptTaskError {
    #[error("Task not found")]
    TaskNotFound,

    #[error("Only the assigned helper can do this")]
    NotAssignedHelper,

    #[error("Task is {0}")]
    WrongStatus(TaskStatus),

    #[error("Face verification failed: {0}")]
    FaceVerificationFailed(String),

    #[error("Face verification unavailable: {0}")]
    VerifierUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AcceptTaskUseCase: Send + Sync {
    async fn execute(&self, command: AcceptTaskCommand) -> Result<Task, AcceptTaskError>;
}
