pub mod bid_repository;
pub mod face_verifier;
pub mod task_repository;

pub use bid_repository::{BidRepository, BidRepositoryError};
pub use face_verifier::{FaceCheck, FaceVerifier, FaceVerifierError};
pub use task_repository::{TaskRepository, TaskRepositoryError};
