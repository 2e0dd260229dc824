use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileUseCase, LoginUseCase, LogoutUseCase, SignupUseCase, UpdateProfileUseCase,
};
use crate::modules::task::application::ports::incoming::use_cases::{
    AcceptTaskUseCase, BrowseTasksUseCase, CompleteTaskUseCase, GetTaskDetailUseCase,
    HelperDashboardUseCase, PlaceBidUseCase, PostTaskUseCase, SelectHelperUseCase,
    TaskerDashboardUseCase,
};
use crate::modules::task::application::task_use_cases::TaskUseCases;
use crate::modules::verification::application::ports::incoming::use_cases::{
    GetWalletUseCase, MyVerificationsUseCase, ReviewVerificationUseCase,
    SubmitVerificationUseCase, UploadDocumentUseCase,
};
use crate::modules::verification::application::verification_use_cases::VerificationUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// App state for route tests: every use case is a stub until replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    task: TaskUseCases,
    verification: VerificationUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                signup: Arc::new(StubSignupUseCase),
                login: Arc::new(StubLoginUseCase),
                logout: Arc::new(StubLogoutUseCase),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
            },
            task: TaskUseCases {
                post_task: Arc::new(StubPostTaskUseCase),
                browse: Arc::new(StubBrowseTasksUseCase),
                detail: Arc::new(StubGetTaskDetailUseCase),
                place_bid: Arc::new(StubPlaceBidUseCase),
                select_helper: Arc::new(StubSelectHelperUseCase),
                accept: Arc::new(StubAcceptTaskUseCase),
                complete: Arc::new(StubCompleteTaskUseCase),
                tasker_dashboard: Arc::new(StubTaskerDashboardUseCase),
                helper_dashboard: Arc::new(StubHelperDashboardUseCase),
            },
            verification: VerificationUseCases {
                upsert: Arc::new(StubUpsertVerificationUseCase),
                submit: Arc::new(StubSubmitVerificationUseCase),
                review: Arc::new(StubReviewVerificationUseCase),
                upload_document: Arc::new(StubUploadDocumentUseCase),
                my_verifications: Arc::new(StubMyVerificationsUseCase),
                wallet: Arc::new(StubGetWalletUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_signup(mut self, uc: impl SignupUseCase + Send + Sync + 'static) -> Self {
        self.auth.signup = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_post_task(mut self, uc: impl PostTaskUseCase + Send + Sync + 'static) -> Self {
        self.task.post_task = Arc::new(uc);
        self
    }

    pub fn with_browse_tasks(
        mut self,
        uc: impl BrowseTasksUseCase + Send + Sync + 'static,
    ) -> Self {
        self.task.browse = Arc::new(uc);
        self
    }

    pub fn with_task_detail(
        mut self,
        uc: impl GetTaskDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.task.detail = Arc::new(uc);
        self
    }

    pub fn with_place_bid(mut self, uc: impl PlaceBidUseCase + Send + Sync + 'static) -> Self {
        self.task.place_bid = Arc::new(uc);
        self
    }

    pub fn with_select_helper(
        mut self,
        uc: impl SelectHelperUseCase + Send + Sync + 'static,
    ) -> Self {
        self.task.select_helper = Arc::new(uc);
        self
    }

    pub fn with_accept_task(mut self, uc: impl AcceptTaskUseCase + Send + Sync + 'static) -> Self {
        self.task.accept = Arc::new(uc);
        self
    }

    pub fn with_complete_task(
        mut self,
        uc: impl CompleteTaskUseCase + Send + Sync + 'static,
    ) -> Self {
        self.task.complete = Arc::new(uc);
        self
    }

    pub fn with_tasker_dashboard(
        mut self,
        uc: impl TaskerDashboardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.task.tasker_dashboard = Arc::new(uc);
        self
    }

    pub fn with_helper_dashboard(
        mut self,
        uc: impl HelperDashboardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.task.helper_dashboard = Arc::new(uc);
        self
    }

    pub fn with_submit_verification(
        mut self,
        uc: impl SubmitVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verification.submit = Arc::new(uc);
        self
    }

    pub fn with_review_verification(
        mut self,
        uc: impl ReviewVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verification.review = Arc::new(uc);
        self
    }

    pub fn with_upload_document(
        mut self,
        uc: impl UploadDocumentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verification.upload_document = Arc::new(uc);
        self
    }

    pub fn with_my_verifications(
        mut self,
        uc: impl MyVerificationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verification.my_verifications = Arc::new(uc);
        self
    }

    pub fn with_wallet(mut self, uc: impl GetWalletUseCase + Send + Sync + 'static) -> Self {
        self.verification.wallet = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            task: self.task,
            verification: self.verification,
        })
    }
}
