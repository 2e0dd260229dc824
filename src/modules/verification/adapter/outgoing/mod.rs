pub mod sea_orm_entity;
pub mod verification_repository_postgres;
pub mod wallet_repository_postgres;

pub use verification_repository_postgres::VerificationRepositoryPostgres;
pub use wallet_repository_postgres::WalletRepositoryPostgres;
