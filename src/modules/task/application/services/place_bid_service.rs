use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::task::application::domain::entities::Bid;
use crate::modules::task::application::ports::incoming::use_cases::{
    PlaceBidCommand, PlaceBidError, PlaceBidUseCase,
};
use crate::modules::task::application::ports::outgoing::{
    BidRepository, BidRepositoryError, TaskRepository,
};
use crate::shared::clock::Clock;

pub struct PlaceBidService<T, B, U>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
{
    task_repository: T,
    bid_repository: B,
    user_repository: U,
    clock: Arc<dyn Clock>,
}

impl<T, B, U> PlaceBidService<T, B, U>
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
    ) -> Self {
        Self {
            task_repository,
            bid_repository,
            user_repository,
            clock,
        }
    }
}

#[async_trait]
impl<T, B, U> PlaceBidUseCase for PlaceBidService<T, B, U>
where
    T: TaskRepository,
    B: BidRepository,
    U: UserRepository,
{
    async fn execute(&self, command: PlaceBidCommand) -> Result<Bid, PlaceBidError> {
        let task = self
            .task_repository
            .find_by_id(command.task_id())
            .await
            .map_err(|e| PlaceBidError::RepositoryError(e.to_string()))?
            .ok_or(PlaceBidError::TaskNotFound)?;

        let helper = self
            .user_repository
            .find_by_id(command.helper_id())
            .await
            .map_err(|e| PlaceBidError::RepositoryError(e.to_string()))?
            .ok_or(PlaceBidError::UserNotFound)?;

        if task.is_owned_by(helper.id) {
            return Err(PlaceBidError::OwnTask);
        }
        if helper.role != Role::Helper {
            return Err(PlaceBidError::NotAHelper);
        }
        if !task.status.accepts_bids() {
            return Err(PlaceBidError::TaskNotOpen(task.status));
        }

        let bid = Bid::from_new(command.into_new_bid(), Uuid::new_v4(), self.clock.now());
        let bid = self
            .bid_repository
            .create_bid(bid)
            .await
            .map_err(|e| match e {
                BidRepositoryError::DuplicateBid => PlaceBidError::DuplicateBid,
                BidRepositoryError::TaskNotFound => PlaceBidError::TaskNotFound,
                BidRepositoryError::TaskNotOpen(status) => PlaceBidError::TaskNotOpen(status),
                other => PlaceBidError::RepositoryError(other.to_string()),
            })?;

        info!(bid_id = %bid.id, task_id = %bid.task_id, amount = bid.amount, "Bid placed");
        Ok(bid)
    }
}
