use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::verification::application::domain::entities::derive_identity_status;
use crate::modules::verification::application::ports::incoming::use_cases::{
    MyVerifications, MyVerificationsError, MyVerificationsUseCase,
};
use crate::modules::verification::application::ports::outgoing::VerificationRepository;

pub struct MyVerificationsService<V>
where
    V: VerificationRepository,
{
    verification_repository: V,
}

impl<V> MyVerificationsService<V>
where
    V: VerificationRepository,
{
    pub fn new(verification_repository: V) -> Self {
        Self {
            verification_repository,
        }
    }
}

#[async_trait]
impl<V> MyVerificationsUseCase for MyVerificationsService<V>
where
    V: VerificationRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<MyVerifications, MyVerificationsError> {
        let verifications = self
            .verification_repository
            .list_for_user(user_id)
            .await
            .map_err(|e| MyVerificationsError::RepositoryError(e.to_string()))?;

        Ok(MyVerifications {
            identity: derive_identity_status(&verifications),
            verifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::verification::application::domain::entities::{
        IdentityStatus, VerificationStatus, VerificationType, VerificationUpsert,
    };
    use crate::tests::support::fixtures::memory_store;
    use chrono::Utc;

    #[tokio::test]
    async fn test_no_records_is_idle() {
        let result = MyVerificationsService::new(memory_store())
            .execute(UserId::new())
            .await
            .unwrap();

        assert!(result.verifications.is_empty());
        assert_eq!(result.identity, IdentityStatus::Idle);
    }

    #[tokio::test]
    async fn test_rejected_face_scan_reports_reason() {
        let store = memory_store();
        let user_id = UserId::new();
        store
            .upsert(
                VerificationUpsert {
                    user_id,
                    kind: VerificationType::FaceScan,
                    status: VerificationStatus::Rejected,
                    notes: Some("Face not clearly visible".to_string()),
                    document_url: None,
                },
                Utc::now(),
            )
            .await
            .unwrap();

        let result = MyVerificationsService::new(store).execute(user_id).await.unwrap();

        assert_eq!(result.verifications.len(), 1);
        assert_eq!(
            result.identity,
            IdentityStatus::Rejected {
                reason: "Face not clearly visible".to_string()
            }
        );
    }
}
