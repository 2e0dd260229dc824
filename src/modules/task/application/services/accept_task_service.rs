use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::task::application::domain::entities::{Task, TaskStatus, TaskTransition};
use crate::modules::task::application::ports::incoming::use_cases::{
    AcceptTaskCommand, AcceptTaskError, AcceptTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{
    FaceCheck, FaceVerifier, TaskRepository, TaskRepositoryError,
};
use crate::modules::verification::application::domain::entities::{
    VerificationStatus, VerificationType, VerificationUpsert,
};
use crate::modules::verification::application::ports::incoming::use_cases::UpsertVerificationUseCase;
use crate::shared::clock::Clock;

/// Starts an assigned task once the helper's live selfie matches.
///
/// A passed check is recorded as the helper's approved face scan, which may
/// complete their identity verification as a side effect.
pub struct AcceptTaskService<T>
where
    T: TaskRepository,
{
    task_repository: T,
    face_verifier: Arc<dyn FaceVerifier>,
    verifications: Arc<dyn UpsertVerificationUseCase + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl<T> AcceptTaskService<T>
where
    T: TaskRepository,
{
    pub fn new(
        task_repository: T,
        face_verifier: Arc<dyn FaceVerifier>,
        verifications: Arc<dyn UpsertVerificationUseCase + Send + Sync>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            task_repository,
            face_verifier,
            verifications,
            clock,
        }
    }
}

#[async_trait]
impl<T> AcceptTaskUseCase for AcceptTaskService<T>
where
    T: TaskRepository,
{
    async fn execute(&self, command: AcceptTaskCommand) -> Result<Task, AcceptTaskError> {
        let task = self
            .task_repository
            .find_by_id(command.task_id())
            .await
            .map_err(|e| AcceptTaskError::RepositoryError(e.to_string()))?
            .ok_or(AcceptTaskError::TaskNotFound)?;

        if !task.is_assigned_to(command.helper_id()) {
            return Err(AcceptTaskError::NotAssignedHelper);
        }
        if task.status != TaskStatus::Assigned {
            return Err(AcceptTaskError::WrongStatus(task.status));
        }

        let check = self
            .face_verifier
            .verify(command.helper_id(), command.selfie_url())
            .await
            .map_err(|e| AcceptTaskError::VerifierUnavailable(e.to_string()))?;

        if let FaceCheck::Rejected { reason } = check {
            warn!(task_id = %task.id, helper_id = %command.helper_id(), "Face verification failed");
            return Err(AcceptTaskError::FaceVerificationFailed(reason));
        }

        self.verifications
            .execute(VerificationUpsert {
                user_id: command.helper_id(),
                kind: VerificationType::FaceScan,
                status: VerificationStatus::Approved,
                notes: None,
                document_url: Some(command.selfie_url().to_string()),
            })
            .await
            .map_err(|e| AcceptTaskError::RepositoryError(e.to_string()))?;

        let started = self
            .task_repository
            .transition(task.id, TaskTransition::Start { at: self.clock.now() })
            .await
            .map_err(|e| match e {
                TaskRepositoryError::NotFound => AcceptTaskError::TaskNotFound,
                TaskRepositoryError::StatusConflict(status) => AcceptTaskError::WrongStatus(status),
                other => AcceptTaskError::RepositoryError(other.to_string()),
            })?;

        info!(task_id = %started.id, helper_id = %command.helper_id(), "Task started");
        Ok(started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Gender, Role, UserId};
    use crate::modules::task::application::ports::outgoing::FaceVerifierError;
    use crate::modules::verification::application::ports::outgoing::VerificationRepository;
    use crate::modules::verification::application::services::UpsertVerificationService;
    use crate::shared::clock::SystemClock;
    use crate::tests::support::fixtures::{
        insert_bid, insert_task, insert_user, memory_store, MemoryStore,
    };
    use crate::tests::support::stubs::StubFaceVerifier;

    fn service(
        store: &MemoryStore,
        verifier: StubFaceVerifier,
    ) -> AcceptTaskService<MemoryStore> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::ist());
        let upsert = UpsertVerificationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            clock.clone(),
        );
        AcceptTaskService::new(store.clone(), Arc::new(verifier), Arc::new(upsert), clock)
    }

    /// Open task with one bid, already assigned to that bid's helper.
    async fn assigned_task(store: &MemoryStore) -> (Task, UserId) {
        let tasker = insert_user(store, "tasker@demo.com", Role::Tasker, Gender::Female).await;
        let helper = insert_user(store, "helper@demo.com", Role::Helper, Gender::Female).await;
        let task = insert_task(store, tasker.id, "Deep clean 2BHK apartment").await;
        let bid = insert_bid(store, task.id, helper.id, 1200).await;
        let selection = store.assign_helper(task.id, bid.id).await.unwrap();
        (selection.task, helper.id)
    }

    fn command(task_id: uuid::Uuid, helper_id: UserId) -> AcceptTaskCommand {
        AcceptTaskCommand::new(task_id, helper_id, "https://cdn.example.com/selfie.jpg".into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_matched_face_starts_task_and_records_scan() {
        let store = memory_store();
        let (task, helper_id) = assigned_task(&store).await;

        let started = service(&store, StubFaceVerifier::matching())
            .execute(command(task.id, helper_id))
            .await
            .unwrap();

        assert_eq!(started.status, TaskStatus::InProgress);
        assert!(started.face_scan_verified);
        assert!(started.face_scan_at.is_some());

        let records = store.list_for_user(helper_id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, VerificationType::FaceScan);
        assert_eq!(records[0].status, VerificationStatus::Approved);
    }

    #[tokio::test]
    async fn test_rejected_face_leaves_task_assigned() {
        let store = memory_store();
        let (task, helper_id) = assigned_task(&store).await;

        let err = service(&store, StubFaceVerifier::rejecting("Face not detected"))
            .execute(command(task.id, helper_id))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AcceptTaskError::FaceVerificationFailed("Face not detected".to_string())
        );
        let stored = TaskRepository::find_by_id(&store, task.id).await.unwrap().unwrap();
        assert_eq!(stored.status, TaskStatus::Assigned);
        assert!(!stored.face_scan_verified);
    }

    #[tokio::test]
    async fn test_only_assigned_helper_can_accept() {
        let store = memory_store();
        let (task, _) = assigned_task(&store).await;

        let err = service(&store, StubFaceVerifier::matching())
            .execute(command(task.id, UserId::new()))
            .await
            .unwrap_err();

        assert_eq!(err, AcceptTaskError::NotAssignedHelper);
    }

    #[tokio::test]
    async fn test_cannot_accept_twice() {
        let store = memory_store();
        let (task, helper_id) = assigned_task(&store).await;
        let service = service(&store, StubFaceVerifier::matching());

        service.execute(command(task.id, helper_id)).await.unwrap();
        let err = service.execute(command(task.id, helper_id)).await.unwrap_err();

        assert_eq!(err, AcceptTaskError::WrongStatus(TaskStatus::InProgress));
    }

    #[tokio::test]
    async fn test_verifier_outage() {
        let store = memory_store();
        let (task, helper_id) = assigned_task(&store).await;

        let err = service(
            &store,
            StubFaceVerifier::failing(FaceVerifierError("timeout".to_string())),
        )
        .execute(command(task.id, helper_id))
        .await
        .unwrap_err();

        assert!(matches!(err, AcceptTaskError::VerifierUnavailable(_)));
    }
}
