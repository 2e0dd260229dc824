use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;

/// The "current user" pointer kept for single-session callers.
///
/// Bearer tokens are the primary identity on the HTTP API; this pointer only
/// mirrors the last signup/login so that a local demo session can resume.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn current_user_id(&self) -> Result<Option<UserId>, SessionStoreError>;
    async fn set_current_user(&self, user_id: UserId) -> Result<(), SessionStoreError>;
    async fn clear(&self) -> Result<(), SessionStoreError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Session storage error: {0}")]
pub struct SessionStoreError(pub String);
