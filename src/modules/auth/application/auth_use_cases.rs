use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileUseCase, LoginUseCase, LogoutUseCase, SignupUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub signup: Arc<dyn SignupUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
