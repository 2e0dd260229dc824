use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;

/// Lookup of administrative grants, kept apart from the tasker/helper role.
#[async_trait]
pub trait AdminRoleQuery: Send + Sync {
    async fn is_admin(&self, user_id: UserId) -> Result<bool, RoleQueryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Role lookup failed: {0}")]
pub struct RoleQueryError(pub String);
