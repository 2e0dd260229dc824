mod fetch_user;
mod login_user;
mod logout_user;
mod signup_user;
mod update_profile;

pub use fetch_user::{
    __path_current_session_handler, __path_get_user_profile_handler, current_session_handler,
    get_user_profile_handler, SessionResponse,
};
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto};
pub use logout_user::{__path_logout_user_handler, logout_user_handler, LogoutResponseBody};
pub use signup_user::{__path_signup_user_handler, signup_user_handler, SignupRequestDto};
pub use update_profile::{
    __path_update_user_profile_handler, update_user_profile_handler, UpdateProfileRequest,
};
