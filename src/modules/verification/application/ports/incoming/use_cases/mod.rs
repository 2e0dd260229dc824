mod get_wallet;
mod my_verifications;
mod review_verification;
mod submit_verification;
mod upload_document;
mod upsert_verification;

pub use get_wallet::{GetWalletError, GetWalletUseCase};
pub use my_verifications::{MyVerifications, MyVerificationsError, MyVerificationsUseCase};
pub use review_verification::{
    ReviewVerificationCommand, ReviewVerificationError, ReviewVerificationUseCase,
};
pub use submit_verification::{
    SubmissionReceipt, SubmitVerificationCommand, SubmitVerificationError,
    SubmitVerificationUseCase,
};
pub use upload_document::{UploadDocumentCommand, UploadDocumentError, UploadDocumentUseCase};
pub use upsert_verification::{UpsertVerificationError, UpsertVerificationUseCase};
