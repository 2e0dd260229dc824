pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::{InMemorySessionStore, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{
    AdminRoleQuery, PasswordHasher, SessionStore, TokenProvider, UserRepository,
};
use crate::auth::application::services::{
    FetchProfileService, LoginService, LogoutService, SignupService, UpdateProfileService,
};
use crate::modules::store::adapter::outgoing::seed::seed_demo_data;
use crate::modules::store::adapter::outgoing::{
    CollectionStore, InMemoryKeyValueStore, JsonFileKeyValueStore,
};
use crate::modules::store::application::ports::outgoing::KeyValueStore;
use crate::modules::task::adapter::outgoing::{
    BidRepositoryPostgres, SimulatedFaceVerifier, TaskRepositoryPostgres,
};
use crate::modules::task::application::ports::outgoing::{
    BidRepository, FaceVerifier, TaskRepository,
};
use crate::modules::task::application::services::{
    AcceptTaskService, BrowseTasksService, CompleteTaskService, HelperDashboardService,
    PlaceBidService, PostTaskService, SelectHelperService, TaskDetailService,
    TaskerDashboardService,
};
use crate::modules::task::application::task_use_cases::TaskUseCases;
use crate::modules::verification::adapter::outgoing::{
    VerificationRepositoryPostgres, WalletRepositoryPostgres,
};
use crate::modules::verification::application::ports::incoming::use_cases::UpsertVerificationUseCase;
use crate::modules::verification::application::ports::outgoing::{
    VerificationRepository, WalletRepository,
};
use crate::modules::verification::application::services::{
    GetWalletService, MyVerificationsService, ReviewVerificationService,
    SubmitVerificationService, UploadDocumentService, UpsertVerificationService,
};
use crate::modules::verification::application::verification_use_cases::VerificationUseCases;
use crate::shared::clock::{offset_from_minutes, Clock, SystemClock};
use crate::shared::config::{AppConfig, StorageBackend};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub task: TaskUseCases,
    pub verification: VerificationUseCases,
}

/// Outgoing adapters for one storage backend.
struct Adapters<U, T, B, V, W, S, A> {
    users: U,
    tasks: T,
    bids: B,
    verifications: V,
    wallets: W,
    sessions: S,
    roles: A,
}

/// Backend-independent collaborators.
struct Infrastructure {
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    clock: Arc<dyn Clock>,
    face_verifier: Arc<dyn FaceVerifier>,
}

fn build_app_state<U, T, B, V, W, S, A>(
    adapters: Adapters<U, T, B, V, W, S, A>,
    infra: &Infrastructure,
    config: &AppConfig,
) -> AppState
where
    U: UserRepository + Clone + 'static,
    T: TaskRepository + Clone + 'static,
    B: BidRepository + Clone + 'static,
    V: VerificationRepository + Clone + 'static,
    W: WalletRepository + Clone + 'static,
    S: SessionStore + Clone + 'static,
    A: AdminRoleQuery + Clone + 'static,
{
    let Adapters {
        users,
        tasks,
        bids,
        verifications,
        wallets,
        sessions,
        roles,
    } = adapters;

    let upsert: Arc<dyn UpsertVerificationUseCase + Send + Sync> =
        Arc::new(UpsertVerificationService::new(
            verifications.clone(),
            users.clone(),
            wallets.clone(),
            infra.clock.clone(),
        ));

    let auth = AuthUseCases {
        signup: Arc::new(SignupService::new(
            users.clone(),
            wallets.clone(),
            sessions.clone(),
            infra.hasher.clone(),
            infra.tokens.clone(),
            infra.clock.clone(),
        )),
        login: Arc::new(LoginService::new(
            users.clone(),
            sessions.clone(),
            infra.hasher.clone(),
            infra.tokens.clone(),
        )),
        logout: Arc::new(LogoutService::new(sessions.clone())),
        fetch_profile: Arc::new(FetchProfileService::new(users.clone(), sessions)),
        update_profile: Arc::new(UpdateProfileService::new(users.clone())),
    };

    let task = TaskUseCases {
        post_task: Arc::new(PostTaskService::new(
            tasks.clone(),
            users.clone(),
            infra.clock.clone(),
        )),
        browse: Arc::new(BrowseTasksService::new(tasks.clone())),
        detail: Arc::new(TaskDetailService::new(
            tasks.clone(),
            bids.clone(),
            users.clone(),
            verifications.clone(),
            infra.clock.clone(),
        )),
        place_bid: Arc::new(PlaceBidService::new(
            tasks.clone(),
            bids.clone(),
            users.clone(),
            infra.clock.clone(),
        )),
        select_helper: Arc::new(SelectHelperService::new(
            tasks.clone(),
            bids.clone(),
            users.clone(),
            infra.clock.clone(),
            config.enforce_gender_safety,
        )),
        accept: Arc::new(AcceptTaskService::new(
            tasks.clone(),
            infra.face_verifier.clone(),
            upsert.clone(),
            infra.clock.clone(),
        )),
        complete: Arc::new(CompleteTaskService::new(tasks.clone(), infra.clock.clone())),
        tasker_dashboard: Arc::new(TaskerDashboardService::new(tasks.clone(), bids.clone())),
        helper_dashboard: Arc::new(HelperDashboardService::new(tasks, bids)),
    };

    let verification = VerificationUseCases {
        upsert: upsert.clone(),
        submit: Arc::new(SubmitVerificationService::new(
            upsert,
            wallets.clone(),
            config.auto_approve_verifications,
        )),
        review: Arc::new(ReviewVerificationService::new(
            verifications.clone(),
            users,
            wallets.clone(),
            roles,
            infra.clock.clone(),
        )),
        upload_document: Arc::new(UploadDocumentService::new(
            verifications.clone(),
            infra.clock.clone(),
        )),
        my_verifications: Arc::new(MyVerificationsService::new(verifications)),
        wallet: Arc::new(GetWalletService::new(wallets)),
    };

    AppState {
        auth,
        task,
        verification,
    }
}

/// Key-value backends keep every collection in one store and can be seeded.
async fn key_value_state<K: KeyValueStore + 'static>(
    kv: K,
    infra: &Infrastructure,
    config: &AppConfig,
) -> anyhow::Result<AppState> {
    let store = CollectionStore::new(kv);

    if config.seed_demo_data {
        let seeded = seed_demo_data(&store, infra.hasher.as_ref(), infra.clock.now())
            .await
            .context("Failed to seed demo data")?;
        if seeded {
            info!("Demo marketplace seeded");
        } else {
            info!("Store already seeded, skipping demo data");
        }
    }

    Ok(build_app_state(
        Adapters {
            users: store.clone(),
            tasks: store.clone(),
            bids: store.clone(),
            verifications: store.clone(),
            wallets: store.clone(),
            sessions: store.clone(),
            roles: store,
        },
        infra,
        config,
    ))
}

#[cfg(not(tarpaulin_include))]
async fn connect_postgres(db_url: &str) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(db_url.to_string());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to apply database migrations")?;
    info!("Database migrations applied");

    Ok(Arc::new(conn))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GigFlow...");

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    let jwt_service =
        JwtTokenService::new(JwtConfig::from_env().context("Invalid JWT configuration")?);

    let infra = Infrastructure {
        hasher: Arc::new(Argon2Hasher::from_env()),
        tokens: Arc::new(jwt_service.clone()),
        clock: Arc::new(SystemClock::new(offset_from_minutes(
            config.local_utc_offset_minutes,
        ))),
        face_verifier: Arc::new(SimulatedFaceVerifier::new()),
    };

    let mut db: Option<Arc<DatabaseConnection>> = None;
    let state = match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory storage, data is lost on restart");
            key_value_state(InMemoryKeyValueStore::new(), &infra, &config).await?
        }
        StorageBackend::File => {
            info!(path = %config.data_file.display(), "Using JSON file storage");
            let kv = JsonFileKeyValueStore::open(&config.data_file)
                .await
                .context("Failed to open data file")?;
            key_value_state(kv, &infra, &config).await?
        }
        StorageBackend::Postgres => {
            let db_url = config.database_url.as_deref().unwrap_or_default();
            let conn = connect_postgres(db_url).await?;
            if config.seed_demo_data {
                warn!("SEED_DEMO_DATA is ignored for the postgres backend");
            }

            let users = UserRepositoryPostgres::new(Arc::clone(&conn));
            let state = build_app_state(
                Adapters {
                    users: users.clone(),
                    tasks: TaskRepositoryPostgres::new(Arc::clone(&conn)),
                    bids: BidRepositoryPostgres::new(Arc::clone(&conn)),
                    verifications: VerificationRepositoryPostgres::new(Arc::clone(&conn)),
                    wallets: WalletRepositoryPostgres::new(Arc::clone(&conn)),
                    sessions: InMemorySessionStore::new(),
                    roles: users,
                },
                &infra,
                &config,
            );
            db = Some(conn);
            state
        }
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();
    let server_url = config.server_url();
    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .app_data(crate::shared::api::custom_query_config());

        if let Some(conn) = &db {
            app = app.app_data(web::Data::new(Arc::clone(conn)));
        }

        app.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
        )
        .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::task::adapter::incoming::web::routes as task_routes;
    use crate::modules::verification::adapter::incoming::web::{functions, routes};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::signup_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::current_session_handler);
    // Users
    cfg.service(auth_routes::get_user_profile_handler);
    cfg.service(auth_routes::update_user_profile_handler);
    // Tasks
    cfg.service(task_routes::browse_tasks_handler);
    cfg.service(task_routes::post_task_handler);
    cfg.service(task_routes::task_detail_handler);
    cfg.service(task_routes::place_bid_handler);
    cfg.service(task_routes::select_helper_handler);
    cfg.service(task_routes::accept_task_handler);
    cfg.service(task_routes::complete_task_handler);
    cfg.service(task_routes::tasker_dashboard_handler);
    cfg.service(task_routes::helper_dashboard_handler);
    // Verification
    cfg.service(routes::my_verifications_handler);
    cfg.service(routes::upload_document_handler);
    cfg.service(routes::get_wallet_handler);
    // Functions
    cfg.service(functions::submit_verification_handler);
    cfg.service(functions::admin_verify_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
