use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::ports::outgoing::{
    FaceCheck, FaceVerifier, FaceVerifierError,
};

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".webp", ".heic"];

/// Stand-in for a biometric match: any selfie that looks like an image
/// reference passes. Swap for a real provider behind the same port.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedFaceVerifier;

impl SimulatedFaceVerifier {
    pub fn new() -> Self {
        Self
    }

    fn looks_like_image(selfie_url: &str) -> bool {
        let lower = selfie_url.trim().to_ascii_lowercase();
        if lower.starts_with("data:image/") {
            return true;
        }

        let path = lower.split(['?', '#']).next().unwrap_or_default();
        IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
            || (lower.starts_with("https://") && path.len() > "https://".len())
    }
}

#[async_trait]
impl FaceVerifier for SimulatedFaceVerifier {
    async fn verify(
        &self,
        user_id: UserId,
        selfie_url: &str,
    ) -> Result<FaceCheck, FaceVerifierError> {
        debug!(user_id = %user_id, "Running simulated face match");

        if Self::looks_like_image(selfie_url) {
            Ok(FaceCheck::Matched)
        } else {
            Ok(FaceCheck::Rejected {
                reason: "Selfie could not be read. Please retake the photo.".to_string(),
            })
        }
    }
}
