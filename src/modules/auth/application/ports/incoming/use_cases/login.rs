use async_trait::async_trait;
use email_address::EmailAddress;

use super::signup::AuthSession;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            errors.push("email", "Invalid email address");
        }
        if password.is_empty() {
            errors.push("password", "Password is required");
        }

        errors.into_result(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("No account found with this email")]
    AccountNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError>;
}
