use std::sync::Arc;

use crate::modules::verification::application::ports::incoming::use_cases::{
    GetWalletUseCase, MyVerificationsUseCase, ReviewVerificationUseCase,
    SubmitVerificationUseCase, UploadDocumentUseCase, UpsertVerificationUseCase,
};

#[derive(Clone)]
pub struct VerificationUseCases {
    pub upsert: Arc<dyn UpsertVerificationUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitVerificationUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewVerificationUseCase + Send + Sync>,
    pub upload_document: Arc<dyn UploadDocumentUseCase + Send + Sync>,
    pub my_verifications: Arc<dyn MyVerificationsUseCase + Send + Sync>,
    pub wallet: Arc<dyn GetWalletUseCase + Send + Sync>,
}
