use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::verification::application::domain::entities::{
    Verification, VerificationStatus, VerificationUpsert,
};
use crate::modules::verification::application::ports::incoming::use_cases::{
    UploadDocumentCommand, UploadDocumentError, UploadDocumentUseCase,
};
use crate::modules::verification::application::ports::outgoing::VerificationRepository;
use crate::shared::clock::Clock;

pub struct UploadDocumentService<V>
where
    V: VerificationRepository,
{
    verification_repository: V,
    clock: Arc<dyn Clock>,
}

impl<V> UploadDocumentService<V>
where
    V: VerificationRepository,
{
    pub fn new(verification_repository: V, clock: Arc<dyn Clock>) -> Self {
        Self {
            verification_repository,
            clock,
        }
    }
}

#[async_trait]
impl<V> UploadDocumentUseCase for UploadDocumentService<V>
where
    V: VerificationRepository,
{
    async fn execute(
        &self,
        command: UploadDocumentCommand,
    ) -> Result<Verification, UploadDocumentError> {
        let upsert = VerificationUpsert {
            user_id: command.user_id(),
            kind: command.kind(),
            status: VerificationStatus::Pending,
            notes: Some("Document submitted for review".to_string()),
            document_url: Some(command.document_url().to_string()),
        };

        let stored = self
            .verification_repository
            .upsert(upsert, self.clock.now())
            .await
            .map_err(|e| UploadDocumentError::RepositoryError(e.to_string()))?;

        info!(user_id = %stored.user_id, kind = %stored.kind, "Document uploaded");
        Ok(stored)
    }
}
