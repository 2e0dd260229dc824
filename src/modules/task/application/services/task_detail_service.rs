use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::task::application::domain::entities::Bid;
use crate::modules::task::application::domain::policies::check_gender_safety_rule;
use crate::modules::task::application::ports::incoming::use_cases::{
    BidView, GetTaskDetailUseCase, TaskDetail, TaskQueryError,
};
use crate::modules::task::application::ports::outgoing::{BidRepository, TaskRepository};
use crate::modules::verification::application::domain::entities::VerificationType;
use crate::modules::verification::application::ports::outgoing::VerificationRepository;
use crate::shared::clock::Clock;

const UNKNOWN_NAME: &str = "Unknown";
const NO_POLICE_CHECK: &str = "none";

pub struct TaskDetailService<T, B, U, V>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
    V: VerificationRepository,
{
    task_repository: T,
    bid_repository: B,
    user_repository: U,
    verification_repository: V,
    clock: Arc<dyn Clock>,
}

impl<T, B, U, V> TaskDetailService<T, B, U, V>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
    V: VerificationRepository,
{
    pub fn new(
        task_repository: T,
        bid_repository: B,
        user_repository: U,
        verification_repository: V,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            task_repository,
            bid_repository,
            user_repository,
            verification_repository,
            clock,
        }
    }

    async fn find_user(&self, user_id: UserId) -> Result<Option<User>, TaskQueryError> {
        self.user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))
    }

    async fn view_bid(
        &self,
        bid: Bid,
        tasker: Option<&User>,
        hour: u32,
    ) -> Result<BidView, TaskQueryError> {
        let helper = self.find_user(bid.helper_id).await?;

        let police_status = self
            .verification_repository
            .list_for_user(bid.helper_id)
            .await
            .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))?
            .into_iter()
            .find(|v| v.kind == VerificationType::Police)
            .map(|v| v.status.as_str())
            .unwrap_or(NO_POLICE_CHECK)
            .to_string();

        Ok(BidView {
            helper_name: helper
                .as_ref()
                .map(|h| h.full_name.clone())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            helper_is_identity_verified: helper.as_ref().is_some_and(|h| h.is_identity_verified),
            police_status,
            gender_safety_restricted: check_gender_safety_rule(
                tasker.map(|t| t.gender),
                helper.as_ref().map(|h| h.gender),
                hour,
            ),
            bid,
        })
    }
}

#[async_trait]
impl<T, B, U, V> GetTaskDetailUseCase for TaskDetailService<T, B, U, V>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
    V: VerificationRepository,
{
    async fn execute(&self, task_id: Uuid) -> Result<TaskDetail, TaskQueryError> {
        let task = self
            .task_repository
            .find_by_id(task_id)
            .await
            .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))?
            .ok_or(TaskQueryError::NotFound)?;

        let tasker = self.find_user(task.tasker_id).await?;

        let mut bids = self
            .bid_repository
            .list_for_task(task_id)
            .await
            .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))?;
        bids.sort_by_key(|b| b.amount);

        let hour = self.clock.local_hour();
        let mut views = Vec::with_capacity(bids.len());
        for bid in bids {
            views.push(self.view_bid(bid, tasker.as_ref(), hour).await?);
        }

        Ok(TaskDetail {
            tasker_name: tasker
                .map(|t| t.full_name)
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            task,
            bids: views,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Gender, Role};
    use crate::modules::verification::application::domain::entities::{
        VerificationStatus, VerificationUpsert,
    };
    use crate::shared::clock::testing::FixedClock;
    use crate::tests::support::fixtures::{
        insert_bid, insert_task, insert_user, memory_store, MemoryStore,
    };
    use chrono::Utc;

    type Service = TaskDetailService<MemoryStore, MemoryStore, MemoryStore, MemoryStore>;

    fn service(store: &MemoryStore, utc_hour: u32) -> Service {
        TaskDetailService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(FixedClock::at_utc_hour(utc_hour)),
        )
    }

    #[tokio::test]
    async fn test_bids_sorted_cheapest_first_and_enriched() {
        let store = memory_store();
        let tasker = insert_user(&store, "tasker@demo.com", Role::Tasker, Gender::Female).await;
        let male = insert_user(&store, "rahul@demo.com", Role::Helper, Gender::Male).await;
        let female = insert_user(&store, "anita@demo.com", Role::Helper, Gender::Female).await;
        let task = insert_task(&store, tasker.id, "Deep clean 2BHK apartment").await;
        insert_bid(&store, task.id, male.id, 1400).await;
        insert_bid(&store, task.id, female.id, 900).await;
        store
            .upsert(
                VerificationUpsert {
                    user_id: male.id,
                    kind: VerificationType::Police,
                    status: VerificationStatus::Approved,
                    notes: None,
                    document_url: Some("police.pdf".to_string()),
                },
                Utc::now(),
            )
            .await
            .unwrap();

        let detail = service(&store, 21).execute(task.id).await.unwrap();

        assert_eq!(detail.tasker_name, "Priya Sharma");
        let amounts: Vec<i64> = detail.bids.iter().map(|b| b.bid.amount).collect();
        assert_eq!(amounts, vec![900, 1400]);

        let cheapest = &detail.bids[0];
        assert_eq!(cheapest.police_status, "none");
        assert!(!cheapest.gender_safety_restricted);

        let pricier = &detail.bids[1];
        assert_eq!(pricier.helper_name, "Rahul Kumar");
        assert_eq!(pricier.police_status, "approved");
        assert!(pricier.gender_safety_restricted);
    }

    #[tokio::test]
    async fn test_missing_tasker_reads_unknown() {
        let store = memory_store();
        let task = insert_task(&store, UserId::new(), "Fix ceiling fan wiring").await;

        let detail = service(&store, 12).execute(task.id).await.unwrap();

        assert_eq!(detail.tasker_name, "Unknown");
        assert!(detail.bids.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_task() {
        let err = service(&memory_store(), 12)
            .execute(Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, TaskQueryError::NotFound);
    }
}
