use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{NewTask, Task};
use crate::shared::validation::ValidationErrors;

/// Categories offered when posting. Anything else is still accepted.
pub const TASK_CATEGORIES: [&str; 11] = [
    "Cleaning",
    "Delivery",
    "Moving & Packing",
    "Home Repairs",
    "Plumbing",
    "Electrical",
    "Painting",
    "Gardening",
    "Design & Creative",
    "Assembly",
    "Other",
];

pub const MIN_BUDGET: i64 = 50;

#[derive(Debug, Clone)]
pub struct PostTaskCommand {
    task: NewTask,
}

impl PostTaskCommand {
    pub fn new(
        tasker_id: UserId,
        title: String,
        description: String,
        category: String,
        location_address: String,
        budget_min: i64,
        budget_max: i64,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check_min_chars("title", &title, 5, "Title must be at least 5 characters");
        errors.check_min_chars(
            "description",
            &description,
            20,
            "Description must be at least 20 characters",
        );
        errors.check_min_chars("category", &category, 1, "Please select a category");
        errors.check_min_chars("location_address", &location_address, 5, "Address is required");
        errors.check_min_number(
            "budget_min",
            budget_min,
            MIN_BUDGET,
            "Minimum budget must be at least ₹50",
        );
        errors.check_min_number(
            "budget_max",
            budget_max,
            MIN_BUDGET,
            "Maximum budget must be at least ₹50",
        );
        if budget_max < budget_min {
            errors.push(
                "budget_max",
                "Maximum budget must be greater than minimum budget",
            );
        }

        errors.into_result(Self {
            task: NewTask {
                tasker_id,
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                category: category.trim().to_string(),
                location_address: location_address.trim().to_string(),
                budget_min,
                budget_max,
            },
        })
    }

    pub fn tasker_id(&self) -> UserId {
        self.task.tasker_id
    }

    pub fn into_new_task(self) -> NewTask {
        self.task
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostTaskError {
    #[error("Only taskers can post tasks")]
    NotATasker,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PostTaskUseCase: Send + Sync {
    async fn execute(&self, command: PostTaskCommand) -> Result<Task, PostTaskError>;
}
