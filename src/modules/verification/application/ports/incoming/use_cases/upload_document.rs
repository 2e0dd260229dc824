use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::{
    Verification, VerificationType,
};
use crate::shared::validation::ValidationErrors;

/// PAN card or police clearance upload. Aadhaar and the selfie go through
/// the paired submission instead.
#[derive(Debug, Clone)]
pub struct UploadDocumentCommand {
    user_id: UserId,
    kind: VerificationType,
    document_url: String,
}

impl UploadDocumentCommand {
    pub fn new(
        user_id: UserId,
        kind: &str,
        document_url: String,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let kind = VerificationType::parse(kind.trim()).filter(|k| !k.is_identity_check());
        if kind.is_none() {
            errors.push("type", "Document type must be pan or police");
        }
        errors.check_min_chars("document_url", &document_url, 1, "Document is required");

        match kind {
            Some(kind) if errors.is_empty() => Ok(Self {
                user_id,
                kind,
                document_url: document_url.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn kind(&self) -> VerificationType {
        self.kind
    }

    pub fn document_url(&self) -> &str {
        &self.document_url
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadDocumentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UploadDocumentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UploadDocumentCommand,
    ) -> Result<Verification, UploadDocumentError>;
}
