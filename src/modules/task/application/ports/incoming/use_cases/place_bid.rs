use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::entities::{Bid, NewBid, TaskStatus};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone)]
pub struct PlaceBidCommand {
    bid: NewBid,
}

impl PlaceBidCommand {
    pub fn new(
        task_id: Uuid,
        helper_id: UserId,
        amount: i64,
        estimated_hours: f64,
        message: String,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check_min_number("amount", amount, 50, "Bid amount must be at least ₹50");
        if !estimated_hours.is_finite() || estimated_hours < 0.5 {
            errors.push("estimated_hours", "Estimated hours must be at least 0.5");
        }
        errors.check_min_chars("message", &message, 10, "Message must be at least 10 characters");

        errors.into_result(Self {
            bid: NewBid {
                task_id,
                helper_id,
                amount,
                estimated_hours,
                message: message.trim().to_string(),
            },
        })
    }

    pub fn task_id(&self) -> Uuid {
        self.bid.task_id
    }

    pub fn helper_id(&self) -> UserId {
        self.bid.helper_id
    }

    pub fn into_new_bid(self) -> NewBid {
        self.bid
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaceBidError {
    #[error("Task not found")]
    TaskNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Only helpers can place bids")]
    NotAHelper,

    #[error("You cannot bid on your own task")]
    OwnTask,

    #[error("Task is {0} and no longer accepts bids")]
    TaskNotOpen(TaskStatus),

    #[error("You have already placed a bid on this task")]
    DuplicateBid,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PlaceBidUseCase: Send + Sync {
    async fn execute(&self, command: PlaceBidCommand) -> Result<Bid, PlaceBidError>;
}
