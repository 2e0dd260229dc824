pub mod auth;
pub mod store;
pub mod task;
pub mod verification;
