use async_trait::async_trait;

use crate::auth::application::domain::entities::{ProfileChanges, UserId, UserProfile};
use crate::shared::patch::PatchField;
use crate::shared::validation::ValidationErrors;

use super::signup::MIN_FULL_NAME_CHARS;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    changes: ProfileChanges,
}

impl UpdateProfileCommand {
    pub fn new(user_id: UserId, mut changes: ProfileChanges) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &changes.full_name {
            PatchField::Value(name) => errors.check_min_chars(
                "full_name",
                name,
                MIN_FULL_NAME_CHARS,
                "Name must be at least 2 characters",
            ),
            PatchField::Null => errors.push("full_name", "Name must be at least 2 characters"),
            PatchField::Unset => {}
        }
        if let PatchField::Value(rate) = changes.hourly_rate {
            errors.check_min_number("hourly_rate", rate, 0, "Hourly rate cannot be negative");
        }
        if matches!(changes.gender, PatchField::Null) {
            errors.push("gender", "Please select your gender");
        }

        if let PatchField::Value(name) = &mut changes.full_name {
            *name = name.trim().to_string();
        }

        errors.into_result(Self { user_id, changes })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn into_changes(self) -> ProfileChanges {
        self.changes
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<UserProfile, UpdateProfileError>;
}
