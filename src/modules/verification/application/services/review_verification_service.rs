use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use super::identity_reconciler::reconcile_identity;
use crate::auth::application::ports::outgoing::{AdminRoleQuery, UserRepository};
use crate::modules::verification::application::domain::entities::Verification;
use crate::modules::verification::application::ports::incoming::use_cases::{
    ReviewVerificationCommand, ReviewVerificationError, ReviewVerificationUseCase,
};
use crate::modules::verification::application::ports::outgoing::{
    VerificationRepository, VerificationRepositoryError, WalletRepository,
};
use crate::shared::clock::Clock;

pub struct ReviewVerificationService<V, U, W, A>
where
    V: VerificationRepository,
    U: UserRepository,
    W: WalletRepository,
    A: AdminRoleQuery,
{
    verification_repository: V,
    user_repository: U,
    wallet_repository: W,
    role_query: A,
    clock: Arc<dyn Clock>,
}

impl<V, U, W, A> ReviewVerificationService<V, U, W, A>
where
    V: VerificationRepository,
    U: UserRepository,
    W: WalletRepository,
    A: AdminRoleQuery,
{
    pub fn new(
        verification_repository: V,
        user_repository: U,
        wallet_repository: W,
        role_query: A,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            verification_repository,
            user_repository,
            wallet_repository,
            role_query,
            clock,
        }
    }
}

#[async_trait]
impl<V, U, W, A> ReviewVerificationUseCase for ReviewVerificationService<V, U, W, A>
where
    V: VerificationRepository,
    U: UserRepository,
    W: WalletRepository,
    A: AdminRoleQuery,
{
    async fn execute(
        &self,
        command: ReviewVerificationCommand,
    ) -> Result<Verification, ReviewVerificationError> {
        let is_admin = self
            .role_query
            .is_admin(command.admin_id())
            .await
            .map_err(|e| ReviewVerificationError::RepositoryError(e.to_string()))?;
        if !is_admin {
            warn!(user_id = %command.admin_id(), "Non-admin attempted a verification review");
            return Err(ReviewVerificationError::NotAdmin);
        }

        let reviewed = self
            .verification_repository
            .review(
                command.verification_id(),
                command.action(),
                command.notes().map(str::to_string),
                self.clock.now(),
            )
            .await
            .map_err(|e| match e {
                VerificationRepositoryError::NotFound => ReviewVerificationError::NotFound,
                other => ReviewVerificationError::RepositoryError(other.to_string()),
            })?;

        info!(
            verification_id = %reviewed.id,
            admin_id = %command.admin_id(),
            "Verification {}",
            command.action().past_tense()
        );

        if reviewed.kind.is_identity_check() {
            reconcile_identity(
                &self.verification_repository,
                &self.user_repository,
                &self.wallet_repository,
                reviewed.user_id,
            )
            .await
            .map_err(ReviewVerificationError::RepositoryError)?;
        }

        Ok(reviewed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AppRole, Gender, Role, UserId};
    use crate::modules::verification::application::domain::entities::{
        VerificationStatus, VerificationType, VerificationUpsert,
    };
    use crate::shared::clock::SystemClock;
    use crate::tests::support::fixtures::{insert_user, memory_store, MemoryStore};
    use chrono::Utc;
    use uuid::Uuid;

    type Service = ReviewVerificationService<MemoryStore, MemoryStore, MemoryStore, MemoryStore>;

    fn service(store: &MemoryStore) -> Service {
        ReviewVerificationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(SystemClock::ist()),
        )
    }

    async fn admin(store: &MemoryStore) -> UserId {
        let admin = insert_user(store, "admin@demo.com", Role::Tasker, Gender::Other).await;
        store.grant_role(admin.id, AppRole::Admin).await.unwrap();
        admin.id
    }

    async fn pending(store: &MemoryStore, user_id: UserId, kind: VerificationType) -> Verification {
        VerificationRepository::upsert(
            store,
            VerificationUpsert {
                user_id,
                kind,
                status: VerificationStatus::Pending,
                notes: Some("Identity document submitted".to_string()),
                document_url: Some("doc.jpg".to_string()),
            },
            Utc::now(),
        )
        .await
        .unwrap()
    }

    fn command(admin_id: UserId, id: Uuid, action: &str, notes: Option<&str>) -> ReviewVerificationCommand {
        ReviewVerificationCommand::new(
            admin_id,
            Some(id.to_string()),
            Some(action.to_string()),
            notes.map(str::to_string),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_non_admin_forbidden() {
        let store = memory_store();
        let helper = insert_user(&store, "helper@demo.com", Role::Helper, Gender::Male).await;
        let record = pending(&store, helper.id, VerificationType::Aadhaar).await;

        let err = service(&store)
            .execute(command(helper.id, record.id, "approve", None))
            .await
            .unwrap_err();

        assert_eq!(err, ReviewVerificationError::NotAdmin);
    }

    #[tokio::test]
    async fn test_unknown_verification_not_found() {
        let store = memory_store();
        let admin_id = admin(&store).await;

        let err = service(&store)
            .execute(command(admin_id, Uuid::new_v4(), "approve", None))
            .await
            .unwrap_err();

        assert_eq!(err, ReviewVerificationError::NotFound);
    }

    #[tokio::test]
    async fn test_approving_pair_verifies_user() {
        let store = memory_store();
        let admin_id = admin(&store).await;
        let helper = insert_user(&store, "helper@demo.com", Role::Helper, Gender::Male).await;
        let aadhaar = pending(&store, helper.id, VerificationType::Aadhaar).await;
        let face = pending(&store, helper.id, VerificationType::FaceScan).await;
        let service = service(&store);

        let reviewed = service
            .execute(command(admin_id, aadhaar.id, "approve", None))
            .await
            .unwrap();
        assert_eq!(reviewed.status, VerificationStatus::Approved);
        assert!(reviewed.verified_at.is_some());

        service
            .execute(command(admin_id, face.id, "approve", Some("Face matches")))
            .await
            .unwrap();

        let helper = UserRepository::find_by_id(&store, helper.id).await.unwrap().unwrap();
        assert!(helper.is_identity_verified);
        assert_eq!(store.get_or_create(helper.id).await.unwrap().balance, 30);
    }

    #[tokio::test]
    async fn test_rejection_keeps_notes() {
        let store = memory_store();
        let admin_id = admin(&store).await;
        let helper = insert_user(&store, "helper@demo.com", Role::Helper, Gender::Male).await;
        let aadhaar = pending(&store, helper.id, VerificationType::Aadhaar).await;

        let reviewed = service(&store)
            .execute(command(admin_id, aadhaar.id, "reject", Some("Document is blurry")))
            .await
            .unwrap();

        assert_eq!(reviewed.status, VerificationStatus::Rejected);
        assert_eq!(reviewed.notes.as_deref(), Some("Document is blurry"));
        assert!(reviewed.verified_at.is_none());
    }
}
