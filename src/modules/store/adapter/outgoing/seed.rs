use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use super::collection_store::{
    CollectionStore, SEEDED_KEY, TASKS_KEY, USERS_KEY, USER_ROLES_KEY, VERIFICATIONS_KEY,
    WALLETS_KEY,
};
use crate::auth::application::domain::entities::{
    AppRole, Gender, NewUser, ProfileChanges, Role, User, UserId, UserRoleGrant,
};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::modules::store::application::ports::outgoing::{KeyValueError, KeyValueStore};
use crate::modules::task::application::domain::entities::{NewTask, Task};
use crate::modules::verification::application::domain::entities::{
    Verification, VerificationStatus, VerificationType, VerificationUpsert, Wallet,
    VERIFICATION_BONUS_AMOUNT,
};
use crate::shared::patch::PatchField;

pub const DEMO_PASSWORD: &str = "demo1234";

pub const DEMO_TASKER_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0001);
pub const DEMO_HELPER_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0002);
pub const DEMO_ADMIN_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0003);
/// Owner of the third demo task. No account exists for it.
pub const DEMO_ABSENT_TASKER_ID: Uuid =
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_00ff);

pub const DEMO_TASK_IDS: [Uuid; 3] = [
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0001_0001),
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0001_0002),
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0001_0003),
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Could not hash demo password: {0}")]
    Hash(#[from] HashError),

    #[error("Could not write demo data: {0}")]
    Storage(String),
}

impl From<KeyValueError> for SeedError {
    fn from(e: KeyValueError) -> Self {
        SeedError::Storage(e.to_string())
    }
}

/// Populate the demo marketplace once. Returns `false` when the store was
/// already seeded.
///
/// Every collection and the `__seeded` flag go out in a single `set_many`
/// batch, so a failed seed leaves nothing behind and the next start retries
/// from scratch. Records already present (matched by id, email or user+type)
/// are kept as they are.
pub async fn seed_demo_data<K: KeyValueStore + 'static>(
    store: &CollectionStore<K>,
    hasher: &dyn PasswordHasher,
    now: DateTime<Utc>,
) -> Result<bool, SeedError> {
    if store.is_seeded().await? {
        return Ok(false);
    }

    let password_hash = hasher.hash_password(DEMO_PASSWORD).await?;

    let _guard = store.lock().await;
    let mut users: Vec<User> = store.load(USERS_KEY).await?;
    let mut tasks: Vec<Task> = store.load(TASKS_KEY).await?;
    let mut verifications: Vec<Verification> = store.load(VERIFICATIONS_KEY).await?;
    let mut wallets: Vec<Wallet> = store.load(WALLETS_KEY).await?;
    let mut grants: Vec<UserRoleGrant> = store.load(USER_ROLES_KEY).await?;

    for user in demo_users(&password_hash, now) {
        if !users
            .iter()
            .any(|u| u.id == user.id || u.email.eq_ignore_ascii_case(&user.email))
        {
            users.push(user);
        }
    }

    for task in demo_tasks(now) {
        if !tasks.iter().any(|t| t.id == task.id) {
            tasks.push(task);
        }
    }

    let helper = UserId::from(DEMO_HELPER_ID);
    for kind in [VerificationType::Aadhaar, VerificationType::FaceScan] {
        if !verifications
            .iter()
            .any(|v| v.user_id == helper && v.kind == kind)
        {
            verifications.push(Verification::from_upsert(
                VerificationUpsert {
                    user_id: helper,
                    kind,
                    status: VerificationStatus::Approved,
                    notes: None,
                    document_url: None,
                },
                Uuid::new_v4(),
                now,
            ));
        }
    }

    for user in [helper, UserId::from(DEMO_TASKER_ID)] {
        if !wallets.iter().any(|w| w.user_id == user) {
            wallets.push(Wallet::empty(user));
        }
    }
    if let Some(wallet) = wallets.iter_mut().find(|w| w.user_id == helper) {
        wallet.claim_bonus(VERIFICATION_BONUS_AMOUNT);
    }

    let admin = UserId::from(DEMO_ADMIN_ID);
    if !grants
        .iter()
        .any(|g| g.user_id == admin && g.role == AppRole::Admin)
    {
        grants.push(UserRoleGrant {
            user_id: admin,
            role: AppRole::Admin,
        });
    }

    store
        .kv()
        .set_many(vec![
            CollectionStore::<K>::encode(USERS_KEY, &users)?,
            CollectionStore::<K>::encode(TASKS_KEY, &tasks)?,
            CollectionStore::<K>::encode(VERIFICATIONS_KEY, &verifications)?,
            CollectionStore::<K>::encode(WALLETS_KEY, &wallets)?,
            CollectionStore::<K>::encode(USER_ROLES_KEY, &grants)?,
            (SEEDED_KEY.to_string(), "true".to_string()),
        ])
        .await?;

    info!("Demo data seeded (3 users, 3 tasks)");
    Ok(true)
}

fn demo_users(password_hash: &str, now: DateTime<Utc>) -> Vec<User> {
    let user = |id: Uuid, email: &str, full_name: &str, role: Role, gender: Gender| {
        User::from_new(
            NewUser {
                email: email.to_string(),
                full_name: full_name.to_string(),
                role,
                gender,
                password_hash: password_hash.to_string(),
            },
            UserId::from(id),
            now,
        )
    };

    let mut tasker = user(
        DEMO_TASKER_ID,
        "tasker@demo.com",
        "Priya Sharma",
        Role::Tasker,
        Gender::Female,
    );
    tasker.apply_profile_changes(ProfileChanges {
        phone: PatchField::Value("+91 9876543210".to_string()),
        bio: PatchField::Value("Looking for reliable helpers for home tasks.".to_string()),
        ..Default::default()
    });

    let mut helper = user(
        DEMO_HELPER_ID,
        "helper@demo.com",
        "Rahul Kumar",
        Role::Helper,
        Gender::Male,
    );
    helper.apply_profile_changes(ProfileChanges {
        phone: PatchField::Value("+91 9123456789".to_string()),
        bio: PatchField::Value("Experienced in plumbing, cleaning and repairs.".to_string()),
        hourly_rate: PatchField::Value(300),
        ..Default::default()
    });
    helper.is_identity_verified = true;

    vec![
        tasker,
        helper,
        user(
            DEMO_ADMIN_ID,
            "admin@demo.com",
            "GigFlow Admin",
            Role::Tasker,
            Gender::Other,
        ),
    ]
}

fn demo_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let specs = [
        (
            DEMO_TASKER_ID,
            "Deep clean my 2BHK apartment",
            "Need thorough cleaning of a 2BHK flat in Koramangala including kitchen and bathrooms.",
            "Cleaning",
            "Koramangala, Bengaluru",
            800,
            1500,
            24,
        ),
        (
            DEMO_TASKER_ID,
            "Fix leaking bathroom tap",
            "One tap in the main bathroom is leaking. Need a plumber to fix it quickly.",
            "Plumbing",
            "Indiranagar, Bengaluru",
            300,
            600,
            12,
        ),
        (
            DEMO_ABSENT_TASKER_ID,
            "Help moving furniture",
            "Need 2-3 people to help move furniture within the same building.",
            "Moving & Packing",
            "Whitefield, Bengaluru",
            500,
            1000,
            6,
        ),
    ];

    specs
        .into_iter()
        .zip(DEMO_TASK_IDS)
        .map(
            |((tasker, title, description, category, location, min, max, age_hours), id)| {
                Task::from_new(
                    NewTask {
                        tasker_id: UserId::from(tasker),
                        title: title.to_string(),
                        description: description.to_string(),
                        category: category.to_string(),
                        location_address: location.to_string(),
                        budget_min: min,
                        budget_max: max,
                    },
                    id,
                    now - Duration::hours(age_hours),
                )
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{AdminRoleQuery, UserRepository};
    use crate::modules::store::adapter::outgoing::in_memory_kv::InMemoryKeyValueStore;
    use crate::modules::task::application::domain::entities::{TaskFilter, TaskStatus};
    use crate::modules::task::application::ports::outgoing::TaskRepository;
    use crate::modules::verification::application::ports::outgoing::{
        VerificationRepository, WalletRepository,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Rejects the first `failures` batches, then behaves like the in-memory store.
    struct FailingWritesKv {
        inner: InMemoryKeyValueStore,
        failures: AtomicUsize,
    }

    impl FailingWritesKv {
        fn new(failures: usize) -> Self {
            Self {
                inner: InMemoryKeyValueStore::new(),
                failures: AtomicUsize::new(failures),
            }
        }
    }

    #[async_trait]
    impl KeyValueStore for FailingWritesKv {
        async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
            self.inner.get(key).await
        }

        async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), KeyValueError> {
            let failing = self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if failing {
                return Err(KeyValueError::Io("disk full".to_string()));
            }
            self.inner.set_many(entries).await
        }

        async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
            self.inner.remove(key).await
        }
    }

    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("plain:{}", password))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("plain:{}", password))
        }
    }

    #[tokio::test]
    async fn test_seed_populates_demo_marketplace() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());
        let now = Utc::now();

        assert!(seed_demo_data(&store, &PlainHasher, now).await.unwrap());

        let helper = store
            .find_by_email("helper@demo.com")
            .await
            .unwrap()
            .unwrap();
        assert!(helper.is_identity_verified);
        assert_eq!(helper.hourly_rate, Some(300));
        assert_eq!(helper.password_hash, "plain:demo1234");

        let wallet = store.get_or_create(helper.id).await.unwrap();
        assert_eq!(wallet.balance, 30);
        assert!(wallet.verification_bonus_claimed);

        let tasks = store.list_tasks(&TaskFilter::open()).await.unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Open));
        assert_eq!(tasks[0].title, "Help moving furniture");

        assert!(store.is_admin(UserId::from(DEMO_ADMIN_ID)).await.unwrap());
        assert!(!store.is_admin(helper.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());

        assert!(seed_demo_data(&store, &PlainHasher, Utc::now()).await.unwrap());
        assert!(!seed_demo_data(&store, &PlainHasher, Utc::now()).await.unwrap());

        let tasks = store.list_tasks(&TaskFilter::default()).await.unwrap();
        assert_eq!(tasks.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_nothing_and_retry_succeeds() {
        let store = CollectionStore::new(FailingWritesKv::new(1));

        let first = seed_demo_data(&store, &PlainHasher, Utc::now()).await;
        assert!(matches!(first, Err(SeedError::Storage(_))));
        assert!(!store.is_seeded().await.unwrap());
        assert!(store
            .find_by_email("tasker@demo.com")
            .await
            .unwrap()
            .is_none());

        assert!(seed_demo_data(&store, &PlainHasher, Utc::now()).await.unwrap());
        assert!(store.is_seeded().await.unwrap());
        assert!(store
            .find_by_email("tasker@demo.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_seed_completes_partial_data_without_duplicates() {
        let store = CollectionStore::new(InMemoryKeyValueStore::new());
        let now = Utc::now();
        let tasker = demo_users("plain:demo1234", now).remove(0);
        store.create_user(tasker).await.unwrap();

        assert!(seed_demo_data(&store, &PlainHasher, now).await.unwrap());

        let tasks = store.list_tasks(&TaskFilter::default()).await.unwrap();
        assert_eq!(tasks.len(), 3);
        let helper = UserId::from(DEMO_HELPER_ID);
        assert_eq!(store.list_for_user(helper).await.unwrap().len(), 2);
        assert!(store
            .create_user(demo_users("x", now).remove(0))
            .await
            .is_err());
    }
}
