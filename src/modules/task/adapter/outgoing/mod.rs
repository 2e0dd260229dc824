pub mod bid_repository_postgres;
pub mod sea_orm_entity;
pub mod simulated_face_verifier;
pub mod task_repository_postgres;

pub use bid_repository_postgres::BidRepositoryPostgres;
pub use simulated_face_verifier::SimulatedFaceVerifier;
pub use task_repository_postgres::TaskRepositoryPostgres;
