mod get_wallet_service;
mod identity_reconciler;
mod my_verifications_service;
mod review_verification_service;
mod submit_verification_service;
mod upload_document_service;
mod upsert_verification_service;

pub use get_wallet_service::GetWalletService;
pub use my_verifications_service::MyVerificationsService;
pub use review_verification_service::ReviewVerificationService;
pub use submit_verification_service::SubmitVerificationService;
pub use upload_document_service::UploadDocumentService;
pub use upsert_verification_service::UpsertVerificationService;
