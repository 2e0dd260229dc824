use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutUseCase};
use crate::auth::application::ports::outgoing::SessionStore;

pub struct LogoutService<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> LogoutService<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }
}

#[async_trait]
impl<S> LogoutUseCase for LogoutService<S>
where
    S: SessionStore,
{
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError> {
        // Only drop the pointer when it still names the caller.
        let current = self
            .session_store
            .current_user_id()
            .await
            .map_err(|e| LogoutError::SessionError(e.to_string()))?;

        if current.is_some_and(|id| id != user_id) {
            return Ok(());
        }

        self.session_store
            .clear()
            .await
            .map_err(|e| LogoutError::SessionError(e.to_string()))?;

        info!("User {} logged out", user_id);
        Ok(())
    }
}
