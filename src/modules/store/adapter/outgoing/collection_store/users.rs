use async_trait::async_trait;

use super::{CollectionStore, CURRENT_USER_KEY, USERS_KEY, USER_ROLES_KEY};
use crate::modules::auth::application::domain::entities::{
    AppRole, ProfileChanges, User, UserId, UserRoleGrant,
};
use crate::modules::auth::application::ports::outgoing::{
    AdminRoleQuery, RoleQueryError, SessionStore, SessionStoreError, UserRepository,
    UserRepositoryError,
};
use crate::modules::store::application::ports::outgoing::{KeyValueError, KeyValueStore};

impl From<KeyValueError> for UserRepositoryError {
    fn from(e: KeyValueError) -> Self {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl<K: KeyValueStore + 'static> UserRepository for CollectionStore<K> {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let _guard = self.lock().await;
        let mut users: Vec<User> = self.load(USERS_KEY).await?;

        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        users.push(user.clone());
        self.save(USERS_KEY, &users).await?;
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let users: Vec<User> = self.load(USERS_KEY).await?;
        Ok(users.into_iter().find(|u| u.id == user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let users: Vec<User> = self.load(USERS_KEY).await?;
        Ok(users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let _guard = self.lock().await;
        let mut users: Vec<User> = self.load(USERS_KEY).await?;

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.apply_profile_changes(changes);
        let updated = user.clone();

        self.save(USERS_KEY, &users).await?;
        Ok(updated)
    }

    async fn set_identity_verified(
        &self,
        user_id: UserId,
        verified: bool,
    ) -> Result<(), UserRepositoryError> {
        let _guard = self.lock().await;
        let mut users: Vec<User> = self.load(USERS_KEY).await?;

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        if user.is_identity_verified == verified {
            return Ok(());
        }
        user.is_identity_verified = verified;

        self.save(USERS_KEY, &users).await?;
        Ok(())
    }
}

#[async_trait]
impl<K: KeyValueStore + 'static> SessionStore for CollectionStore<K> {
    async fn current_user_id(&self) -> Result<Option<UserId>, SessionStoreError> {
        let raw = self
            .kv()
            .get(CURRENT_USER_KEY)
            .await
            .map_err(|e| SessionStoreError(e.to_string()))?;

        Ok(raw.and_then(|r| serde_json::from_str::<UserId>(&r).ok()))
    }

    async fn set_current_user(&self, user_id: UserId) -> Result<(), SessionStoreError> {
        let raw =
            serde_json::to_string(&user_id).map_err(|e| SessionStoreError(e.to_string()))?;
        self.kv()
            .set(CURRENT_USER_KEY, raw)
            .await
            .map_err(|e| SessionStoreError(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.kv()
            .remove(CURRENT_USER_KEY)
            .await
            .map_err(|e| SessionStoreError(e.to_string()))
    }
}

#[async_trait]
impl<K: KeyValueStore + 'static> AdminRoleQuery for CollectionStore<K> {
    async fn is_admin(&self, user_id: UserId) -> Result<bool, RoleQueryError> {
        let grants: Vec<UserRoleGrant> = self
            .load(USER_ROLES_KEY)
            .await
            .map_err(|e| RoleQueryError(e.to_string()))?;

        Ok(grants
            .iter()
            .any(|g| g.user_id == user_id && g.role == AppRole::Admin))
    }
}

impl<K: KeyValueStore + 'static> CollectionStore<K> {
    pub async fn grant_role(&self, user_id: UserId, role: AppRole) -> Result<(), KeyValueError> {
        let _guard = self.lock().await;
        let mut grants: Vec<UserRoleGrant> = self.load(USER_ROLES_KEY).await?;
        if grants.iter().any(|g| g.user_id == user_id && g.role == role) {
            return Ok(());
        }
        grants.push(UserRoleGrant { user_id, role });
        self.save(USER_ROLES_KEY, &grants).await
    }
}
