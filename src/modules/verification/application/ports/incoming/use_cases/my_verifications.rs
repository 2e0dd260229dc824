use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::{
    IdentityStatus, Verification,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MyVerifications {
    pub verifications: Vec<Verification>,
    /// Combined Aadhaar + face scan view
    pub identity: IdentityStatus,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MyVerificationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MyVerificationsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<MyVerifications, MyVerificationsError>;
}
