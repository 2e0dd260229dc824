use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::{
    ReviewAction, Verification, VerificationStatus, VerificationType, VerificationUpsert,
};
use crate::modules::verification::application::ports::outgoing::{
    VerificationRepository, VerificationRepositoryError,
};

use super::sea_orm_entity::verifications::{
    ActiveModel as VerificationActiveModel, Column as VerificationColumn,
    Entity as VerificationEntity, Model as VerificationModel,
};

fn db_err(e: impl ToString) -> VerificationRepositoryError {
    VerificationRepositoryError::DatabaseError(e.to_string())
}

#[derive(Clone, Debug)]
pub struct VerificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: VerificationModel) -> Result<Verification, VerificationRepositoryError> {
        let kind = VerificationType::parse(&model.kind)
            .ok_or_else(|| db_err(format!("unknown verification type '{}'", model.kind)))?;
        let status = VerificationStatus::parse(&model.status)
            .ok_or_else(|| db_err(format!("unknown verification status '{}'", model.status)))?;

        Ok(Verification {
            id: model.id,
            user_id: UserId::from(model.user_id),
            kind,
            status,
            notes: model.notes,
            document_url: model.document_url,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.map(|t| t.with_timezone(&Utc)),
            verified_at: model.verified_at.map(|t| t.with_timezone(&Utc)),
        })
    }

    fn to_active(v: &Verification) -> VerificationActiveModel {
        VerificationActiveModel {
            id: Set(v.id),
            user_id: Set(v.user_id.value()),
            kind: Set(v.kind.as_str().to_string()),
            status: Set(v.status.as_str().to_string()),
            notes: Set(v.notes.clone()),
            document_url: Set(v.document_url.clone()),
            created_at: Set(v.created_at.fixed_offset()),
            updated_at: Set(v.updated_at.map(|t| t.fixed_offset())),
            verified_at: Set(v.verified_at.map(|t| t.fixed_offset())),
        }
    }

    async fn save_existing<C: ConnectionTrait>(
        conn: &C,
        record: &Verification,
    ) -> Result<Verification, VerificationRepositoryError> {
        let updated = Self::to_active(record).update(conn).await.map_err(db_err)?;
        Self::to_domain(updated)
    }
}

#[async_trait]
impl VerificationRepository for VerificationRepositoryPostgres {
    async fn upsert(
        &self,
        upsert: VerificationUpsert,
        now: DateTime<Utc>,
    ) -> Result<Verification, VerificationRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = VerificationEntity::find()
            .filter(VerificationColumn::UserId.eq(upsert.user_id.value()))
            .filter(VerificationColumn::Kind.eq(upsert.kind.as_str()))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?;

        let saved = match existing {
            Some(model) => {
                let mut record = Self::to_domain(model)?;
                record.merge(upsert, now);
                Self::save_existing(&txn, &record).await?
            }
            None => {
                let record = Verification::from_upsert(upsert, Uuid::new_v4(), now);
                let inserted = Self::to_active(&record)
                    .insert(&txn)
                    .await
                    .map_err(db_err)?;
                Self::to_domain(inserted)?
            }
        };

        txn.commit().await.map_err(db_err)?;
        Ok(saved)
    }

    async fn find_by_id(
        &self,
        verification_id: Uuid,
    ) -> Result<Option<Verification>, VerificationRepositoryError> {
        VerificationEntity::find_by_id(verification_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(Self::to_domain)
            .transpose()
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Verification>, VerificationRepositoryError> {
        VerificationEntity::find()
            .filter(VerificationColumn::UserId.eq(user_id.value()))
            .order_by_desc(VerificationColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(Self::to_domain)
            .collect()
    }

    async fn review(
        &self,
        verification_id: Uuid,
        action: ReviewAction,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Verification, VerificationRepositoryError> {
        let model = VerificationEntity::find_by_id(verification_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(VerificationRepositoryError::NotFound)?;

        let mut record = Self::to_domain(model)?;
        record.review(action, notes, now);
        Self::save_existing(&*self.db, &record).await
    }
}
