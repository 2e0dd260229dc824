use async_trait::async_trait;

use crate::modules::verification::application::domain::entities::{
    Verification, VerificationUpsert,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpsertVerificationError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Write the single record for (user, type), then bring the user's
/// identity flag and bonus in line with the Aadhaar + face scan pair.
#[async_trait]
pub trait UpsertVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        upsert: VerificationUpsert,
    ) -> Result<Verification, UpsertVerificationError>;
}
