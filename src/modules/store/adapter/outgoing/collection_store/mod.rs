//! Repository ports implemented over a `KeyValueStore`.
//!
//! Each collection lives under its own key as a JSON array. Every mutation
//! is a whole-collection read-modify-write; `write_lock` serializes those
//! sequences inside this process.

mod tasks;
mod users;
mod verifications;

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::modules::store::application::ports::outgoing::{KeyValueError, KeyValueStore};

pub const USERS_KEY: &str = "users";
pub const TASKS_KEY: &str = "tasks";
pub const BIDS_KEY: &str = "bids";
pub const VERIFICATIONS_KEY: &str = "verifications";
pub const WALLETS_KEY: &str = "wallets";
pub const USER_ROLES_KEY: &str = "user_roles";
pub const CURRENT_USER_KEY: &str = "current_user_id";
pub const SEEDED_KEY: &str = "__seeded";

pub struct CollectionStore<K: KeyValueStore> {
    kv: Arc<K>,
    write_lock: Arc<Mutex<()>>,
}

impl<K: KeyValueStore> Clone for CollectionStore<K> {
    fn clone(&self) -> Self {
        Self {
            kv: Arc::clone(&self.kv),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<K: KeyValueStore> CollectionStore<K> {
    pub fn new(kv: K) -> Self {
        Self::from_shared(Arc::new(kv))
    }

    pub fn from_shared(kv: Arc<K>) -> Self {
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read a collection. Missing or malformed data reads as empty.
    pub(crate) async fn load<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Vec<T>, KeyValueError> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Collection '{}' is malformed, treating as empty: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    pub(crate) fn encode<T: Serialize>(
        key: &str,
        items: &[T],
    ) -> Result<(String, String), KeyValueError> {
        let raw = serde_json::to_string(items)
            .map_err(|e| KeyValueError::Serialization(e.to_string()))?;
        Ok((key.to_string(), raw))
    }

    pub(crate) async fn save<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
    ) -> Result<(), KeyValueError> {
        self.kv.set_many(vec![Self::encode(key, items)?]).await
    }

    pub async fn is_seeded(&self) -> Result<bool, KeyValueError> {
        Ok(self.kv.get(SEEDED_KEY).await?.is_some())
    }
}
