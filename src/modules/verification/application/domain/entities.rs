use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Rupees credited once both identity checks pass.
pub const VERIFICATION_BONUS_AMOUNT: i64 = 30;

pub const DEFAULT_REJECTION_REASON: &str = "Verification failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    Aadhaar,
    FaceScan,
    Pan,
    Police,
}

impl VerificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationType::Aadhaar => "aadhaar",
            VerificationType::FaceScan => "face_scan",
            VerificationType::Pan => "pan",
            VerificationType::Police => "police",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "aadhaar" => Some(VerificationType::Aadhaar),
            "face_scan" => Some(VerificationType::FaceScan),
            "pan" => Some(VerificationType::Pan),
            "police" => Some(VerificationType::Police),
            _ => None,
        }
    }

    /// Aadhaar and face scan together decide identity verification.
    pub fn is_identity_check(&self) -> bool {
        matches!(self, VerificationType::Aadhaar | VerificationType::FaceScan)
    }
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(VerificationStatus::Pending),
            "approved" => Some(VerificationStatus::Approved),
            "rejected" => Some(VerificationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Verification {
    pub id: Uuid,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: VerificationType,
    pub status: VerificationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

impl Verification {
    pub fn from_upsert(upsert: VerificationUpsert, id: Uuid, now: DateTime<Utc>) -> Self {
        let verified_at = (upsert.status == VerificationStatus::Approved).then_some(now);
        Self {
            id,
            user_id: upsert.user_id,
            kind: upsert.kind,
            status: upsert.status,
            notes: upsert.notes,
            document_url: upsert.document_url,
            created_at: now,
            updated_at: None,
            verified_at,
        }
    }

    /// Merge an upsert into an existing record. Absent notes or document
    /// URL keep the stored value.
    pub fn merge(&mut self, upsert: VerificationUpsert, now: DateTime<Utc>) {
        self.status = upsert.status;
        if let Some(notes) = upsert.notes {
            self.notes = Some(notes);
        }
        if let Some(url) = upsert.document_url {
            self.document_url = Some(url);
        }
        self.updated_at = Some(now);
        if upsert.status == VerificationStatus::Approved {
            self.verified_at = Some(now);
        }
    }

    pub fn review(&mut self, action: ReviewAction, notes: Option<String>, now: DateTime<Utc>) {
        self.merge(
            VerificationUpsert {
                user_id: self.user_id,
                kind: self.kind,
                status: action.resulting_status(),
                notes,
                document_url: None,
            },
            now,
        );
    }
}

/// Create-or-replace input keyed by (user, type).
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationUpsert {
    pub user_id: UserId,
    pub kind: VerificationType,
    pub status: VerificationStatus,
    pub notes: Option<String>,
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "approve" => Some(ReviewAction::Approve),
            "reject" => Some(ReviewAction::Reject),
            _ => None,
        }
    }

    pub fn resulting_status(&self) -> VerificationStatus {
        match self {
            ReviewAction::Approve => VerificationStatus::Approved,
            ReviewAction::Reject => VerificationStatus::Rejected,
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approved",
            ReviewAction::Reject => "rejected",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Combined identity status
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IdentityStatus {
    Idle,
    Pending,
    Rejected { reason: String },
    Approved,
}

impl IdentityStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, IdentityStatus::Approved)
    }
}

/// Fold a user's verification records into the Aadhaar + face scan view.
///
/// Approval needs both records approved. Otherwise a rejection on either
/// side wins over a pending one, and a lone approval still reads as idle.
pub fn derive_identity_status(records: &[Verification]) -> IdentityStatus {
    let aadhaar = records
        .iter()
        .find(|v| v.kind == VerificationType::Aadhaar);
    let face = records
        .iter()
        .find(|v| v.kind == VerificationType::FaceScan);

    let paired = [aadhaar, face];

    if paired
        .iter()
        .flatten()
        .any(|v| v.status == VerificationStatus::Rejected)
    {
        let reason = paired
            .iter()
            .flatten()
            .filter_map(|v| v.notes.as_deref())
            .find(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_REJECTION_REASON)
            .to_string();
        return IdentityStatus::Rejected { reason };
    }

    let approved = |v: Option<&Verification>| {
        v.is_some_and(|v| v.status == VerificationStatus::Approved)
    };
    if approved(aadhaar) && approved(face) {
        return IdentityStatus::Approved;
    }

    if paired
        .iter()
        .flatten()
        .any(|v| v.status == VerificationStatus::Pending)
    {
        IdentityStatus::Pending
    } else {
        IdentityStatus::Idle
    }
}

//
// ──────────────────────────────────────────────────────────
// Wallet
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Wallet {
    pub user_id: UserId,
    /// Whole rupees
    pub balance: i64,
    pub verification_bonus_claimed: bool,
}

impl Wallet {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            balance: 0,
            verification_bonus_claimed: false,
        }
    }

    /// Credit the one-time bonus. Returns false when it was already claimed.
    pub fn claim_bonus(&mut self, amount: i64) -> bool {
        if self.verification_bonus_claimed {
            return false;
        }
        self.balance += amount;
        self.verification_bonus_claimed = true;
        true
    }
}
