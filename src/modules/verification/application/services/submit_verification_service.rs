use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::verification::application::domain::entities::{
    VerificationStatus, VerificationType, VerificationUpsert,
};
use crate::modules::verification::application::ports::incoming::use_cases::{
    SubmissionReceipt, SubmitVerificationCommand, SubmitVerificationError,
    SubmitVerificationUseCase, UpsertVerificationUseCase,
};
use crate::modules::verification::application::ports::outgoing::WalletRepository;

const AADHAAR_NOTE: &str = "Identity document submitted";
const SELFIE_NOTE: &str = "Selfie submitted for face verification";

/// Writes the Aadhaar and face scan records as a pair.
///
/// With `auto_approve` both land approved straight away, which is how the
/// demo marketplace verifies people without an admin in the loop.
pub struct SubmitVerificationService<W>
where
    W: WalletRepository,
{
    upsert: Arc<dyn UpsertVerificationUseCase + Send + Sync>,
    wallet_repository: W,
    auto_approve: bool,
}

impl<W> SubmitVerificationService<W>
where
    W: WalletRepository,
{
    pub fn new(
        upsert: Arc<dyn UpsertVerificationUseCase + Send + Sync>,
        wallet_repository: W,
        auto_approve: bool,
    ) -> Self {
        Self {
            upsert,
            wallet_repository,
            auto_approve,
        }
    }
}

#[async_trait]
impl<W> SubmitVerificationUseCase for SubmitVerificationService<W>
where
    W: WalletRepository,
{
    async fn execute(
        &self,
        command: SubmitVerificationCommand,
    ) -> Result<SubmissionReceipt, SubmitVerificationError> {
        let status = if self.auto_approve {
            VerificationStatus::Approved
        } else {
            VerificationStatus::Pending
        };

        let user_id = command.user_id();
        let pair = [
            (VerificationType::Aadhaar, command.aadhaar_url(), AADHAAR_NOTE),
            (VerificationType::FaceScan, command.selfie_url(), SELFIE_NOTE),
        ];

        for (kind, url, note) in pair {
            self.upsert
                .execute(VerificationUpsert {
                    user_id,
                    kind,
                    status,
                    notes: Some(note.to_string()),
                    document_url: Some(url.to_string()),
                })
                .await
                .map_err(|e| SubmitVerificationError::RepositoryError(e.to_string()))?;
        }

        self.wallet_repository
            .get_or_create(user_id)
            .await
            .map_err(|e| SubmitVerificationError::RepositoryError(e.to_string()))?;

        info!(user_id = %user_id, status = %status.as_str(), "Verification submitted");

        Ok(SubmissionReceipt { status })
    }
}
