use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is unreadable")]
    MalformedHash,

    #[error("Hashing worker failed")]
    TaskFailed,
}

/// Credential hashing. `verify_password` returns `Ok(false)` for a wrong
/// password and reserves `Err` for unusable hashes or worker failures.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
