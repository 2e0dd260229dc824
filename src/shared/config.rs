// src/shared/config.rs
use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "postgres" => Ok(StorageBackend::Postgres),
            other => Err(format!(
                "unknown storage backend '{}', expected memory, file or postgres",
                other
            )),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} is not set")]
    Missing { key: &'static str },

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub data_file: PathBuf,
    pub database_url: Option<String>,
    pub seed_demo_data: bool,
    pub auto_approve_verifications: bool,
    pub enforce_gender_safety: bool,
    pub local_utc_offset_minutes: i32,
}

impl AppConfig {
    /// Load application configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage: StorageBackend = try_load("STORAGE_BACKEND", "memory")?;
        let database_url = env::var("DATABASE_URL").ok();

        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing {
                key: "DATABASE_URL",
            });
        }

        Ok(Self {
            host: try_load("HOST", "127.0.0.1")?,
            port: try_load("PORT", "8080")?,
            storage,
            data_file: PathBuf::from(try_load::<String>("DATA_FILE", "gigflow-data.json")?),
            database_url,
            seed_demo_data: try_load("SEED_DEMO_DATA", "true")?,
            auto_approve_verifications: try_load("AUTO_APPROVE_VERIFICATIONS", "false")?,
            enforce_gender_safety: try_load("ENFORCE_GENDER_SAFETY", "false")?,
            local_utc_offset_minutes: try_load("LOCAL_UTC_OFFSET_MINUTES", "330")?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}
