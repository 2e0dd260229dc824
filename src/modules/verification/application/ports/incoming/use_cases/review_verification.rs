use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::{ReviewAction, Verification};
use crate::shared::validation::ValidationErrors;

pub const MISSING_REVIEW_FIELDS: &str = "Missing required fields: verification_id and action";
pub const INVALID_REVIEW_ACTION: &str = "Invalid action. Must be \"approve\" or \"reject\"";

/// An admin's decision on one verification record.
#[derive(Debug, Clone)]
pub struct ReviewVerificationCommand {
    admin_id: UserId,
    verification_id: Uuid,
    action: ReviewAction,
    notes: Option<String>,
}

impl ReviewVerificationCommand {
    pub fn new(
        admin_id: UserId,
        verification_id: Option<String>,
        action: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let verification_id = verification_id.filter(|id| !id.trim().is_empty());
        let action = action.filter(|a| !a.trim().is_empty());

        let (Some(raw_id), Some(raw_action)) = (verification_id, action) else {
            errors.push("verification_id", MISSING_REVIEW_FIELDS);
            return Err(errors);
        };

        let action = ReviewAction::parse(raw_action.trim());
        if action.is_none() {
            errors.push("action", INVALID_REVIEW_ACTION);
        }

        let verification_id = Uuid::parse_str(raw_id.trim()).ok();
        if verification_id.is_none() {
            errors.push("verification_id", "Invalid verification_id");
        }

        match (verification_id, action) {
            (Some(verification_id), Some(action)) => Ok(Self {
                admin_id,
                verification_id,
                action,
                notes: notes.filter(|n| !n.trim().is_empty()),
            }),
            _ => Err(errors),
        }
    }

    pub fn admin_id(&self) -> UserId {
        self.admin_id
    }

    pub fn verification_id(&self) -> Uuid {
        self.verification_id
    }

    pub fn action(&self) -> ReviewAction {
        self.action
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewVerificationError {
    #[error("Forbidden - Admin access required")]
    NotAdmin,

    #[error("Verification not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReviewVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReviewVerificationCommand,
    ) -> Result<Verification, ReviewVerificationError>;
}
