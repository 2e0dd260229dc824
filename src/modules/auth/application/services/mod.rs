mod fetch_profile_service;
mod login_service;
mod logout_service;
mod signup_service;
mod update_profile_service;

pub use fetch_profile_service::FetchProfileService;
pub use login_service::LoginService;
pub use logout_service::LogoutService;
pub use signup_service::SignupService;
pub use update_profile_service::UpdateProfileService;
