pub mod password_hasher;
pub mod role_query;
pub mod session_store;
pub mod token_provider;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use role_query::{AdminRoleQuery, RoleQueryError};
pub use session_store::{SessionStore, SessionStoreError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::{UserRepository, UserRepositoryError};
