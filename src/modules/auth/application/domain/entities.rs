use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, format = Uuid)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marketplace role chosen at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tasker,
    Helper,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tasker => "tasker",
            Role::Helper => "helper",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tasker" => Ok(Role::Tasker),
            "helper" => Ok(Role::Helper),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub gender: Gender,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<i64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_identity_verified: bool,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_new(new: NewUser, id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: new.email,
            full_name: new.full_name,
            role: new.role,
            gender: new.gender,
            phone: None,
            bio: None,
            hourly_rate: None,
            avatar_url: None,
            is_identity_verified: false,
            password_hash: new.password_hash,
            created_at,
        }
    }

    pub fn apply_profile_changes(&mut self, changes: ProfileChanges) {
        changes.full_name.apply_required(&mut self.full_name);
        changes.gender.apply_required(&mut self.gender);
        changes.phone.apply_to(&mut self.phone);
        changes.bio.apply_to(&mut self.bio);
        changes.hourly_rate.apply_to(&mut self.hourly_rate);
        changes.avatar_url.apply_to(&mut self.avatar_url);
    }
}

/// Data needed to persist a freshly signed-up user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub gender: Gender,
    pub password_hash: String,
}

/// Profile edit. Role and email are fixed after signup.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub full_name: PatchField<String>,
    pub gender: PatchField<Gender>,
    pub phone: PatchField<String>,
    pub bio: PatchField<String>,
    pub hourly_rate: PatchField<i64>,
    pub avatar_url: PatchField<String>,
}

/// Administrative role, held separately from the marketplace role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRole {
    Admin,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRoleGrant {
    pub user_id: UserId,
    pub role: AppRole,
}

/// What other users and the owner see of an account. No credentials.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: UserId,
    #[schema(example = "helper@demo.com")]
    pub email: String,
    #[schema(example = "Rahul Kumar")]
    pub full_name: String,
    pub role: Role,
    pub gender: Gender,
    pub phone: Option<String>,
    pub bio: Option<String>,
    #[schema(example = 300)]
    pub hourly_rate: Option<i64>,
    pub avatar_url: Option<String>,
    pub is_identity_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            gender: user.gender,
            phone: user.phone,
            bio: user.bio,
            hourly_rate: user.hourly_rate,
            avatar_url: user.avatar_url,
            is_identity_verified: user.is_identity_verified,
            created_at: user.created_at,
        }
    }
}
