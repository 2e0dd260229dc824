use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, FetchProfileError, FetchProfileUseCase, LoginCommand, LoginError, LoginUseCase,
    LogoutError, LogoutUseCase, SignupCommand, SignupError, SignupUseCase, UpdateProfileCommand,
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::task::application::domain::entities::{Bid, HelperSelection, Task};
use crate::modules::task::application::ports::incoming::use_cases::{
    AcceptTaskCommand, AcceptTaskError, AcceptTaskUseCase, BrowseTasksQuery, BrowseTasksUseCase,
    CompleteTaskError, CompleteTaskUseCase, GetTaskDetailUseCase, HelperDashboard,
    HelperDashboardUseCase, PlaceBidCommand, PlaceBidError, PlaceBidUseCase, PostTaskCommand,
    PostTaskError, PostTaskUseCase, SelectHelperCommand, SelectHelperError, SelectHelperUseCase,
    TaskDetail, TaskQueryError, TaskerDashboard, TaskerDashboardUseCase,
};
use crate::modules::task::application::ports::outgoing::{
    FaceCheck, FaceVerifier, FaceVerifierError,
};
use crate::modules::verification::application::domain::entities::{
    Verification, VerificationUpsert, Wallet,
};
use crate::modules::verification::application::ports::incoming::use_cases::{
    GetWalletError, GetWalletUseCase, MyVerifications, MyVerificationsError,
    MyVerificationsUseCase, ReviewVerificationCommand, ReviewVerificationError,
    ReviewVerificationUseCase, SubmissionReceipt, SubmitVerificationCommand,
    SubmitVerificationError, SubmitVerificationUseCase, UploadDocumentCommand,
    UploadDocumentError, UploadDocumentUseCase, UpsertVerificationError,
    UpsertVerificationUseCase,
};

//
// Auth
//

#[derive(Default, Clone)]
pub struct StubSignupUseCase;

#[async_trait]
impl SignupUseCase for StubSignupUseCase {
    async fn execute(&self, _command: SignupCommand) -> Result<AuthSession, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn by_id(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }

    async fn current(&self) -> Result<Option<UserProfile>, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

//
// Tasks
//

#[derive(Default, Clone)]
pub struct StubPostTaskUseCase;

#[async_trait]
impl PostTaskUseCase for StubPostTaskUseCase {
    async fn execute(&self, _command: PostTaskCommand) -> Result<Task, PostTaskError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubBrowseTasksUseCase;

#[async_trait]
impl BrowseTasksUseCase for StubBrowseTasksUseCase {
    async fn execute(&self, _query: BrowseTasksQuery) -> Result<Vec<Task>, TaskQueryError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetTaskDetailUseCase;

#[async_trait]
impl GetTaskDetailUseCase for StubGetTaskDetailUseCase {
    async fn execute(&self, _task_id: Uuid) -> Result<TaskDetail, TaskQueryError> {
        Err(TaskQueryError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubPlaceBidUseCase;

#[async_trait]
impl PlaceBidUseCase for StubPlaceBidUseCase {
    async fn execute(&self, _command: PlaceBidCommand) -> Result<Bid, PlaceBidError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSelectHelperUseCase;

#[async_trait]
impl SelectHelperUseCase for StubSelectHelperUseCase {
    async fn execute(
        &self,
        _command: SelectHelperCommand,
    ) -> Result<HelperSelection, SelectHelperError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAcceptTaskUseCase;

#[async_trait]
impl AcceptTaskUseCase for StubAcceptTaskUseCase {
    async fn execute(&self, _command: AcceptTaskCommand) -> Result<Task, AcceptTaskError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCompleteTaskUseCase;

#[async_trait]
impl CompleteTaskUseCase for StubCompleteTaskUseCase {
    async fn execute(&self, _task_id: Uuid, _helper_id: UserId) -> Result<Task, CompleteTaskError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubTaskerDashboardUseCase;

#[async_trait]
impl TaskerDashboardUseCase for StubTaskerDashboardUseCase {
    async fn execute(&self, _tasker_id: UserId) -> Result<TaskerDashboard, TaskQueryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubHelperDashboardUseCase;

#[async_trait]
impl HelperDashboardUseCase for StubHelperDashboardUseCase {
    async fn execute(&self, _helper_id: UserId) -> Result<HelperDashboard, TaskQueryError> {
        unimplemented!("Not used in this test")
    }
}

/// Face check with a canned outcome.
#[derive(Clone)]
pub struct StubFaceVerifier {
    outcome: Result<FaceCheck, FaceVerifierError>,
}

impl StubFaceVerifier {
    pub fn matching() -> Self {
        Self {
            outcome: Ok(FaceCheck::Matched),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            outcome: Ok(FaceCheck::Rejected {
                reason: reason.to_string(),
            }),
        }
    }

    pub fn failing(error: FaceVerifierError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl FaceVerifier for StubFaceVerifier {
    async fn verify(
        &self,
        _user_id: UserId,
        _selfie_url: &str,
    ) -> Result<FaceCheck, FaceVerifierError> {
        self.outcome.clone()
    }
}

//
// Verification
//

#[derive(Default, Clone)]
pub struct StubUpsertVerificationUseCase;

#[async_trait]
impl UpsertVerificationUseCase for StubUpsertVerificationUseCase {
    async fn execute(
        &self,
        _upsert: VerificationUpsert,
    ) -> Result<Verification, UpsertVerificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitVerificationUseCase;

#[async_trait]
impl SubmitVerificationUseCase for StubSubmitVerificationUseCase {
    async fn execute(
        &self,
        _command: SubmitVerificationCommand,
    ) -> Result<SubmissionReceipt, SubmitVerificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReviewVerificationUseCase;

#[async_trait]
impl ReviewVerificationUseCase for StubReviewVerificationUseCase {
    async fn execute(
        &self,
        _command: ReviewVerificationCommand,
    ) -> Result<Verification, ReviewVerificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadDocumentUseCase;

#[async_trait]
impl UploadDocumentUseCase for StubUploadDocumentUseCase {
    async fn execute(
        &self,
        _command: UploadDocumentCommand,
    ) -> Result<Verification, UploadDocumentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubMyVerificationsUseCase;

#[async_trait]
impl MyVerificationsUseCase for StubMyVerificationsUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<MyVerifications, MyVerificationsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetWalletUseCase;

#[async_trait]
impl GetWalletUseCase for StubGetWalletUseCase {
    async fn execute(&self, user_id: UserId) -> Result<Wallet, GetWalletError> {
        Ok(Wallet::empty(user_id))
    }
}
