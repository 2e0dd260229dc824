use std::env;

pub const MIN_SECRET_CHARS: usize = 32;
pub const MAX_ACCESS_EXPIRY_SECONDS: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("Invalid JWT_ACCESS_EXPIRY value '{0}'")]
    InvalidExpiry(String),

    #[error("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds")]
    ExpiryOutOfRange,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let raw_expiry = env::var("JWT_ACCESS_EXPIRY").unwrap_or_else(|_| "1800".to_string());
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "gigflow".to_string());

        Self::build(secret_key, issuer, &raw_expiry)
    }

    fn build(secret_key: String, issuer: String, raw_expiry: &str) -> Result<Self, JwtConfigError> {
        if secret_key.chars().count() < MIN_SECRET_CHARS {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry: i64 = raw_expiry
            .trim()
            .parse()
            .map_err(|_| JwtConfigError::InvalidExpiry(raw_expiry.to_string()))?;
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECONDS {
            return Err(JwtConfigError::ExpiryOutOfRange);
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
