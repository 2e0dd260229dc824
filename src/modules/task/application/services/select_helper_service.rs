use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::task::application::domain::entities::{HelperSelection, Task};
use crate::modules::task::application::domain::policies::check_gender_safety_rule;
use crate::modules::task::application::ports::incoming::use_cases::{
    SelectHelperCommand, SelectHelperError, SelectHelperUseCase,
};
use crate::modules::task::application::ports::outgoing::{
    BidRepository, TaskRepository, TaskRepositoryError,
};
use crate::shared::clock::Clock;

pub struct SelectHelperService<T, B, U>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
{
    task_repository: T,
    bid_repository: B,
    user_repository: U,
    clock: Arc<dyn Clock>,
    enforce_gender_safety: bool,
}

impl<T, B, U> SelectHelperService<T, B, U>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
{
    pub fn new(
        task_repository: T,
        bid_repository: B,
        user_repository: U,
        clock: Arc<dyn Clock>,
        enforce_gender_safety: bool,
    ) -> Self {
        Self {
            task_repository,
            bid_repository,
            user_repository,
            clock,
            enforce_gender_safety,
        }
    }

    async fn is_restricted_pairing(
        &self,
        task: &Task,
        command: &SelectHelperCommand,
    ) -> Result<bool, SelectHelperError> {
        let bids = self
            .bid_repository
            .list_for_task(task.id)
            .await
            .map_err(|e| SelectHelperError::RepositoryError(e.to_string()))?;
        let bid = bids
            .iter()
            .find(|b| b.id == command.bid_id)
            .ok_or(SelectHelperError::BidNotOnTask)?;

        let tasker = self
            .user_repository
            .find_by_id(task.tasker_id)
            .await
            .map_err(|e| SelectHelperError::RepositoryError(e.to_string()))?;
        let helper = self
            .user_repository
            .find_by_id(bid.helper_id)
            .await
            .map_err(|e| SelectHelperError::RepositoryError(e.to_string()))?;

        Ok(check_gender_safety_rule(
            tasker.map(|u| u.gender),
            helper.map(|u| u.gender),
            self.clock.local_hour(),
        ))
    }
}

#[async_trait]
impl<T, B, U> SelectHelperUseCase for SelectHelperService<T, B, U>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
{
    async fn execute(
        &self,
        command: SelectHelperCommand,
    ) -> Result<HelperSelection, SelectHelperError> {
        let task = self
            .task_repository
            .find_by_id(command.task_id)
            .await
            .map_err(|e| SelectHelperError::RepositoryError(e.to_string()))?
            .ok_or(SelectHelperError::TaskNotFound)?;

        if !task.is_owned_by(command.tasker_id) {
            return Err(SelectHelperError::NotOwner);
        }

        if self.enforce_gender_safety && self.is_restricted_pairing(&task, &command).await? {
            warn!(
                task_id = %task.id,
                bid_id = %command.bid_id,
                "Helper selection blocked by evening safety rule"
            );
            return Err(SelectHelperError::GenderSafetyRestricted);
        }

        let selection = self
            .task_repository
            .assign_helper(command.task_id, command.bid_id)
            .await
            .map_err(|e| match e {
                TaskRepositoryError::NotFound => SelectHelperError::TaskNotFound,
                TaskRepositoryError::StatusConflict(status) => {
                    SelectHelperError::TaskNotOpen(status)
                }
                TaskRepositoryError::BidNotOnTask => SelectHelperError::BidNotOnTask,
                other => SelectHelperError::RepositoryError(other.to_string()),
            })?;

        info!(
            task_id = %selection.task.id,
            bid_id = %command.bid_id,
            "Helper selected"
        );
        Ok(selection)
    }
}
