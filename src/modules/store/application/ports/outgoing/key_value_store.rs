use async_trait::async_trait;

/// Flat string key space holding JSON text values.
///
/// `set_many` must make the whole batch visible together; callers rely on it
/// for writes that touch more than one collection.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), KeyValueError>;

    async fn remove(&self, key: &str) -> Result<(), KeyValueError>;

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueError> {
        self.set_many(vec![(key.to_string(), value)]).await
    }

    /// Cheap probe used by the readiness endpoint.
    async fn ping(&self) -> Result<(), KeyValueError> {
        self.get("__ping").await.map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyValueError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
