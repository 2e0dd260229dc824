use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceCheck {
    Matched,
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Face verification unavailable: {0}")]
pub struct FaceVerifierError(pub String);

/// Live-selfie check run before an assigned helper may start a task.
#[async_trait]
pub trait FaceVerifier: Send + Sync {
    async fn verify(&self, user_id: UserId, selfie_url: &str)
        -> Result<FaceCheck, FaceVerifierError>;
}
