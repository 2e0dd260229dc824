use async_trait::async_trait;
use std::collections::HashMap;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{BidStatus, TaskFilter};
use crate::modules::task::application::ports::incoming::use_cases::{
    BidWithTask, HelperDashboard, HelperDashboardUseCase, HelperStats, TaskQueryError,
    TaskSummary, TaskerDashboard, TaskerDashboardUseCase,
};
use crate::modules::task::application::ports::outgoing::{BidRepository, TaskRepository};

pub struct TaskerDashboardService<T, B>
where
    T: TaskRepository,
    B: BidRepository,
{
    task_repository: T,
    bid_repository: B,
}

impl<T, B> TaskerDashboardService<T, B>
where
    T: TaskRepository,
    B: BidRepository,
{
    pub fn new(task_repository: T, bid_repository: B) -> Self {
        Self {
            task_repository,
            bid_repository,
        }
    }
}

#[async_trait]
impl<T, B> TaskerDashboardUseCase for TaskerDashboardService<T, B>
where
    T: TaskRepository,
    B: BidRepository,
{
    async fn execute(&self, tasker_id: UserId) -> Result<TaskerDashboard, TaskQueryError> {
        let tasks = self
            .task_repository
            .list_tasks(&TaskFilter::owned_by(tasker_id))
            .await
            .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))?;

        let mut dashboard = TaskerDashboard {
            active: Vec::new(),
            history: Vec::new(),
        };

        for task in tasks {
            let bid_count = self
                .bid_repository
                .list_for_task(task.id)
                .await
                .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))?
                .len();

            let bucket = if task.status.is_active() {
                &mut dashboard.active
            } else {
                &mut dashboard.history
            };
            bucket.push(TaskSummary { task, bid_count });
        }

        Ok(dashboard)
    }
}

pub struct HelperDashboardService<T, B>
where
    T: TaskRepository,
    B: BidRepository,
{
    task_repository: T,
    bid_repository: B,
}

impl<T, B> HelperDashboardService<T, B>
where
    T: TaskRepository,
    B: BidRepository,
{
    pub fn new(task_repository: T, bid_repository: B) -> Self {
        Self {
            task_repository,
            bid_repository,
        }
    }
}

#[async_trait]
impl<T, B> HelperDashboardUseCase for HelperDashboardService<T, B>
where
    T: TaskRepository,
    B: BidRepository,
{
    async fn execute(&self, helper_id: UserId) -> Result<HelperDashboard, TaskQueryError> {
        let bids = self
            .bid_repository
            .list_for_helper(helper_id)
            .await
            .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))?;

        let mut tasks = HashMap::new();
        let mut joined = Vec::with_capacity(bids.len());
        for bid in bids {
            if !tasks.contains_key(&bid.task_id) {
                let task = self
                    .task_repository
                    .find_by_id(bid.task_id)
                    .await
                    .map_err(|e| TaskQueryError::RepositoryError(e.to_string()))?;
                tasks.insert(bid.task_id, task);
            }

            // Bids whose task has vanished are left off the dashboard.
            if let Some(Some(task)) = tasks.get(&bid.task_id) {
                joined.push(BidWithTask {
                    task: task.clone(),
                    bid,
                });
            }
        }

        let stats = HelperStats {
            total_bids: joined.len(),
            active_bids: joined
                .iter()
                .filter(|b| b.bid.status == BidStatus::Pending)
                .count(),
            won_bids: joined
                .iter()
                .filter(|b| b.bid.status == BidStatus::Accepted)
                .count(),
        };

        Ok(HelperDashboard {
            bids: joined,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Gender, Role};
    use crate::modules::store::adapter::outgoing::collection_store::TASKS_KEY;
    use crate::modules::store::application::ports::outgoing::KeyValueStore;
    use crate::modules::task::application::domain::entities::{
        TaskFilter, TaskStatus, TaskTransition,
    };
    use crate::tests::support::fixtures::{insert_bid, insert_task, insert_user, memory_store};
    use chrono::Utc;

    #[tokio::test]
    async fn test_tasker_dashboard_splits_active_and_history() {
        let store = memory_store();
        let tasker = insert_user(&store, "tasker@demo.com", Role::Tasker, Gender::Female).await;
        let helper = insert_user(&store, "helper@demo.com", Role::Helper, Gender::Male).await;
        let open = insert_task(&store, tasker.id, "Deep clean 2BHK apartment").await;
        let done = insert_task(&store, tasker.id, "Paint the balcony railing").await;
        insert_task(&store, helper.id, "Someone else's task").await;

        insert_bid(&store, open.id, helper.id, 1000).await;
        let bid = insert_bid(&store, done.id, helper.id, 900).await;
        store.assign_helper(done.id, bid.id).await.unwrap();
        let now = Utc::now();
        for transition in [
            TaskTransition::Start { at: now },
            TaskTransition::Complete { at: now },
        ] {
            store.transition(done.id, transition).await.unwrap();
        }

        let dashboard = TaskerDashboardService::new(store.clone(), store.clone())
            .execute(tasker.id)
            .await
            .unwrap();

        assert_eq!(dashboard.active.len(), 1);
        assert_eq!(dashboard.active[0].task.id, open.id);
        assert_eq!(dashboard.active[0].bid_count, 1);
        assert_eq!(dashboard.history.len(), 1);
        assert_eq!(dashboard.history[0].task.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_helper_dashboard_stats() {
        let store = memory_store();
        let tasker = insert_user(&store, "tasker@demo.com", Role::Tasker, Gender::Female).await;
        let helper = insert_user(&store, "helper@demo.com", Role::Helper, Gender::Male).await;
        let won = insert_task(&store, tasker.id, "Deep clean 2BHK apartment").await;
        let pending = insert_task(&store, tasker.id, "Paint the balcony railing").await;

        let bid = insert_bid(&store, won.id, helper.id, 1000).await;
        store.assign_helper(won.id, bid.id).await.unwrap();
        insert_bid(&store, pending.id, helper.id, 700).await;

        // Bid on a task that no longer resolves.
        let removed = insert_task(&store, tasker.id, "Task removed after bidding").await;
        insert_bid(&store, removed.id, helper.id, 500).await;
        let remaining: Vec<_> = store
            .list_tasks(&TaskFilter::default())
            .await
            .unwrap()
            .into_iter()
            .filter(|t| t.id != removed.id)
            .collect();
        store
            .kv()
            .set(TASKS_KEY, serde_json::to_string(&remaining).unwrap())
            .await
            .unwrap();

        let dashboard = HelperDashboardService::new(store.clone(), store.clone())
            .execute(helper.id)
            .await
            .unwrap();

        assert_eq!(
            dashboard.stats,
            HelperStats {
                total_bids: 2,
                active_bids: 1,
                won_bids: 1,
            }
        );
        assert!(dashboard.bids.iter().any(|b| b.task.id == won.id));
    }
}
