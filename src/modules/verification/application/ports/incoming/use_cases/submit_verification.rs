use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::VerificationStatus;
use crate::shared::validation::ValidationErrors;

/// Aadhaar document plus selfie, sent together with the user's consent.
#[derive(Debug, Clone)]
pub struct SubmitVerificationCommand {
    user_id: UserId,
    aadhaar_url: String,
    selfie_url: String,
}

impl SubmitVerificationCommand {
    pub fn new(
        user_id: UserId,
        aadhaar_url: Option<String>,
        selfie_url: Option<String>,
        consent: Option<bool>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let aadhaar_url = non_blank(aadhaar_url);
        let selfie_url = non_blank(selfie_url);

        if aadhaar_url.is_none() {
            errors.push("aadhaar_url", "Aadhaar document is required");
        }
        if selfie_url.is_none() {
            errors.push("selfie_url", "Selfie is required");
        }
        if consent != Some(true) {
            errors.push("consent", "Consent is required");
        }

        match (aadhaar_url, selfie_url) {
            (Some(aadhaar_url), Some(selfie_url)) if errors.is_empty() => Ok(Self {
                user_id,
                aadhaar_url,
                selfie_url,
            }),
            _ => Err(errors),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn aadhaar_url(&self) -> &str {
        &self.aadhaar_url
    }

    pub fn selfie_url(&self) -> &str {
        &self.selfie_url
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SubmissionReceipt {
    /// Status both records were written with
    pub status: VerificationStatus,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitVerificationError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitVerificationCommand,
    ) -> Result<SubmissionReceipt, SubmitVerificationError>;
}
