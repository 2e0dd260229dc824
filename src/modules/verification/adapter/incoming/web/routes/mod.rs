mod verifications;
mod wallet;

pub use verifications::{
    __path_my_verifications_handler, __path_upload_document_handler, my_verifications_handler,
    upload_document_handler, UploadDocumentRequest,
};
pub use wallet::{__path_get_wallet_handler, get_wallet_handler};
