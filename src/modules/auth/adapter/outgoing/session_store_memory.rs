use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::{SessionStore, SessionStoreError};

/// Process-local session pointer for backends without a key-value store.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    current: Arc<RwLock<Option<UserId>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn current_user_id(&self) -> Result<Option<UserId>, SessionStoreError> {
        Ok(*self.current.read().await)
    }

    async fn set_current_user(&self, user_id: UserId) -> Result<(), SessionStoreError> {
        *self.current.write().await = Some(user_id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.current.write().await = None;
        Ok(())
    }
}
