use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::auth::application::domain::entities::{AppRole, ProfileChanges, User, UserId};
use crate::modules::auth::application::ports::outgoing::{
    AdminRoleQuery, RoleQueryError, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::user_roles::{
    Column as UserRoleColumn, Entity as UserRoleEntity,
};
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        let role = model
            .role
            .parse()
            .map_err(UserRepositoryError::DatabaseError)?;
        let gender = model
            .gender
            .parse()
            .map_err(UserRepositoryError::DatabaseError)?;

        Ok(User {
            id: UserId::from(model.id),
            email: model.email,
            full_name: model.full_name,
            role,
            gender,
            phone: model.phone,
            bio: model.bio,
            hourly_rate: model.hourly_rate,
            avatar_url: model.avatar_url,
            is_identity_verified: model.is_identity_verified,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }

    async fn find_model(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id.value()),
            email: Set(user.email.to_lowercase()),
            full_name: Set(user.full_name),
            role: Set(user.role.as_str().to_string()),
            gender: Set(user.gender.as_str().to_string()),
            phone: Set(user.phone),
            bio: Set(user.bio),
            hourly_rate: Set(user.hourly_rate),
            avatar_url: Set(user.avatar_url),
            is_identity_verified: Set(user.is_identity_verified),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at.fixed_offset()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::EmailAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_domain(inserted)
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        UserEntity::find()
            .filter(UserColumn::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let model = self.find_model(user_id).await?;
        let mut user = Self::to_domain(model.clone())?;
        user.apply_profile_changes(changes);

        let mut active_user: UserActiveModel = model.into();
        active_user.full_name = Set(user.full_name);
        active_user.gender = Set(user.gender.as_str().to_string());
        active_user.phone = Set(user.phone);
        active_user.bio = Set(user.bio);
        active_user.hourly_rate = Set(user.hourly_rate);
        active_user.avatar_url = Set(user.avatar_url);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(updated)
    }

    async fn set_identity_verified(
        &self,
        user_id: UserId,
        verified: bool,
    ) -> Result<(), UserRepositoryError> {
        let model = self.find_model(user_id).await?;
        if model.is_identity_verified == verified {
            return Ok(());
        }

        let mut active_user: UserActiveModel = model.into();
        active_user.is_identity_verified = Set(verified);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AdminRoleQuery for UserRepositoryPostgres {
    async fn is_admin(&self, user_id: UserId) -> Result<bool, RoleQueryError> {
        let grant = UserRoleEntity::find()
            .filter(UserRoleColumn::UserId.eq(user_id.value()))
            .filter(UserRoleColumn::Role.eq(AppRole::Admin.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| RoleQueryError(e.to_string()))?;

        Ok(grant.is_some())
    }
}
