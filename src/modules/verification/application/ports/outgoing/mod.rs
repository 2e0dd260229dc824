pub mod verification_repository;
pub mod wallet_repository;

pub use verification_repository::{VerificationRepository, VerificationRepositoryError};
pub use wallet_repository::{WalletRepository, WalletRepositoryError};
