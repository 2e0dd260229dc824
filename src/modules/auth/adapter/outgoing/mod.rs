pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
mod session_store_memory;
mod user_repository_postgres;

pub use session_store_memory::InMemorySessionStore;
pub use user_repository_postgres::UserRepositoryPostgres;
