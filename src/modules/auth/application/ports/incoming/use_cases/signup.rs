use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{Gender, Role, UserProfile};
use crate::shared::validation::ValidationErrors;

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_FULL_NAME_CHARS: usize = 2;

/// Validated signup form. Built only through [`SignupCommand::new`].
#[derive(Debug, Clone)]
pub struct SignupCommand {
    email: String,
    password: String,
    full_name: String,
    role: Role,
    gender: Gender,
}

impl SignupCommand {
    pub fn new(
        email: String,
        password: String,
        full_name: String,
        role: Option<String>,
        gender: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            errors.push("email", "Invalid email address");
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push("password", "Password must be at least 6 characters");
        }
        errors.check_min_chars(
            "full_name",
            &full_name,
            MIN_FULL_NAME_CHARS,
            "Name must be at least 2 characters",
        );

        let role = role.as_deref().and_then(|r| r.parse::<Role>().ok());
        if role.is_none() {
            errors.push("role", "Please select a role");
        }
        let gender = gender.as_deref().and_then(|g| g.parse::<Gender>().ok());
        if gender.is_none() {
            errors.push("gender", "Please select your gender");
        }

        match (role, gender) {
            (Some(role), Some(gender)) if errors.is_empty() => Ok(Self {
                email,
                password,
                full_name: full_name.trim().to_string(),
                role,
                gender,
            }),
            _ => Err(errors),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

/// Signed-in user plus the bearer token for later calls.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthSession {
    pub user: UserProfile,
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
}

impl AuthSession {
    pub fn bearer(user: UserProfile, access_token: String) -> Self {
        Self {
            user,
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignupError {
    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SignupUseCase: Send + Sync {
    async fn execute(&self, command: SignupCommand) -> Result<AuthSession, SignupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(
        email: &str,
        password: &str,
        name: &str,
        role: Option<&str>,
        gender: Option<&str>,
    ) -> Result<SignupCommand, ValidationErrors> {
        SignupCommand::new(
            email.to_string(),
            password.to_string(),
            name.to_string(),
            role.map(String::from),
            gender.map(String::from),
        )
    }

    #[test]
    fn test_valid_signup_normalizes_email_and_name() {
        let cmd = command(
            "  Priya@Example.COM ",
            "secret1",
            " Priya Sharma ",
            Some("tasker"),
            Some("female"),
        )
        .unwrap();

        assert_eq!(cmd.email(), "priya@example.com");
        assert_eq!(cmd.full_name(), "Priya Sharma");
        assert_eq!(cmd.role(), Role::Tasker);
        assert_eq!(cmd.gender(), Gender::Female);
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let errors = command("not-an-email", "123", "P", None, Some("robot")).unwrap_err();

        assert!(errors.has_field("email"));
        assert!(errors.has_field("password"));
        assert!(errors.has_field("full_name"));
        assert!(errors.has_field("role"));
        assert!(errors.has_field("gender"));
        assert_eq!(errors.first_message(), "Invalid email address");
    }

    #[test]
    fn test_password_of_exactly_six_chars_is_accepted() {
        assert!(command("a@b.co", "123456", "Al", Some("helper"), Some("other")).is_ok());
    }
}
