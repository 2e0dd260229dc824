use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LogoutResponseBody, SessionResponse, SignupRequestDto, UpdateProfileRequest,
};
use crate::auth::application::domain::entities::{Gender, Role, UserProfile};
use crate::auth::application::ports::incoming::use_cases::AuthSession;

// Tasks
use crate::modules::task::adapter::incoming::web::routes::{
    AcceptTaskRequest, PlaceBidRequest, PostTaskRequest, SelectHelperRequest,
};
use crate::modules::task::application::domain::entities::{
    Bid, BidStatus, HelperSelection, Task, TaskStatus,
};
use crate::modules::task::application::ports::incoming::use_cases::{
    BidView, BidWithTask, HelperDashboard, HelperStats, TaskDetail, TaskSummary, TaskerDashboard,
};

// Verification
use crate::modules::verification::adapter::incoming::web::functions::{
    AdminVerifyRequest, SubmitVerificationRequest,
};
use crate::modules::verification::adapter::incoming::web::routes::UploadDocumentRequest;
use crate::modules::verification::application::domain::entities::{
    IdentityStatus, ReviewAction, Verification, VerificationStatus, VerificationType, Wallet,
};
use crate::modules::verification::application::ports::incoming::use_cases::{
    MyVerifications, SubmissionReceipt,
};
use crate::shared::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GigFlow API",
        version = "1.0.0",
        description = "Local gig marketplace: taskers post jobs, helpers bid, identity checks gate the work"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::current_session_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_user_profile_handler,

        // Task endpoints
        crate::modules::task::adapter::incoming::web::routes::browse_tasks_handler,
        crate::modules::task::adapter::incoming::web::routes::post_task_handler,
        crate::modules::task::adapter::incoming::web::routes::task_detail_handler,
        crate::modules::task::adapter::incoming::web::routes::place_bid_handler,
        crate::modules::task::adapter::incoming::web::routes::select_helper_handler,
        crate::modules::task::adapter::incoming::web::routes::accept_task_handler,
        crate::modules::task::adapter::incoming::web::routes::complete_task_handler,

        // Dashboards
        crate::modules::task::adapter::incoming::web::routes::tasker_dashboard_handler,
        crate::modules::task::adapter::incoming::web::routes::helper_dashboard_handler,

        // Verification endpoints
        crate::modules::verification::adapter::incoming::web::routes::my_verifications_handler,
        crate::modules::verification::adapter::incoming::web::routes::upload_document_handler,
        crate::modules::verification::adapter::incoming::web::routes::get_wallet_handler,

        // Functions
        crate::modules::verification::adapter::incoming::web::functions::submit_verification_handler,
        crate::modules::verification::adapter::incoming::web::functions::admin_verify_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldError,

            // Auth
            SignupRequestDto,
            LoginRequestDto,
            LogoutResponseBody,
            SessionResponse,
            UpdateProfileRequest,
            AuthSession,
            UserProfile,
            Role,
            Gender,

            // Tasks
            PostTaskRequest,
            PlaceBidRequest,
            SelectHelperRequest,
            AcceptTaskRequest,
            Task,
            TaskStatus,
            Bid,
            BidStatus,
            BidView,
            TaskDetail,
            HelperSelection,
            TaskSummary,
            TaskerDashboard,
            BidWithTask,
            HelperStats,
            HelperDashboard,

            // Verification
            UploadDocumentRequest,
            SubmitVerificationRequest,
            AdminVerifyRequest,
            Verification,
            VerificationType,
            VerificationStatus,
            ReviewAction,
            IdentityStatus,
            MyVerifications,
            SubmissionReceipt,
            Wallet,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, login and session endpoints"),
        (name = "users", description = "Profile endpoints"),
        (name = "tasks", description = "Task posting, bidding and the task lifecycle"),
        (name = "dashboards", description = "Per-role dashboards"),
        (name = "verifications", description = "Verification records and wallet"),
        (name = "functions", description = "Serverless-style verification functions"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from signup or login"))
                        .build(),
                ),
            )
        }
    }
}
