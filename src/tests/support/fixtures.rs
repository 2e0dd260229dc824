use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, NewUser, Role, User, UserId};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher, UserRepository};
use crate::modules::store::adapter::outgoing::{CollectionStore, InMemoryKeyValueStore};
use crate::modules::task::application::domain::entities::{Bid, NewBid, NewTask, Task};
use crate::modules::task::application::ports::outgoing::{BidRepository, TaskRepository};

pub type MemoryStore = CollectionStore<InMemoryKeyValueStore>;

pub fn memory_store() -> MemoryStore {
    CollectionStore::new(InMemoryKeyValueStore::new())
}

/// Reversible "hash" so service tests skip Argon2's cost.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("plain:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("plain:{}", password))
    }
}

/// Store a user whose password is `demo1234` under [`PlainTextHasher`].
pub async fn insert_user(store: &MemoryStore, email: &str, role: Role, gender: Gender) -> User {
    let full_name = match role {
        Role::Tasker => "Priya Sharma",
        Role::Helper => "Rahul Kumar",
    };

    let user = User::from_new(
        NewUser {
            email: email.to_string(),
            full_name: full_name.to_string(),
            role,
            gender,
            password_hash: "plain:demo1234".to_string(),
        },
        UserId::new(),
        Utc::now(),
    );
    store.create_user(user).await.unwrap()
}

pub fn new_task(tasker_id: UserId, title: &str) -> NewTask {
    NewTask {
        tasker_id,
        title: title.to_string(),
        description: "Need thorough cleaning of a 2BHK flat including kitchen.".to_string(),
        category: "Cleaning".to_string(),
        location_address: "Koramangala, Bengaluru".to_string(),
        budget_min: 800,
        budget_max: 1500,
    }
}

pub async fn insert_task(store: &MemoryStore, tasker_id: UserId, title: &str) -> Task {
    let task = Task::from_new(new_task(tasker_id, title), Uuid::new_v4(), Utc::now());
    store.create_task(task).await.unwrap()
}

pub async fn insert_bid(store: &MemoryStore, task_id: Uuid, helper_id: UserId, amount: i64) -> Bid {
    let bid = Bid::from_new(
        NewBid {
            task_id,
            helper_id,
            amount,
            estimated_hours: 3.0,
            message: "Available this weekend with my own tools".to_string(),
        },
        Uuid::new_v4(),
        Utc::now(),
    );
    store.create_bid(bid).await.unwrap()
}
