mod fetch_profile;
mod login;
mod logout;
mod signup;
mod update_profile;

pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use login::{LoginCommand, LoginError, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use signup::{AuthSession, SignupCommand, SignupError, SignupUseCase};
pub use update_profile::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase};
