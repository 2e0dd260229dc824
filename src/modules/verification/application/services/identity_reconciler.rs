use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::verification::application::domain::entities::{
    derive_identity_status, IdentityStatus, VERIFICATION_BONUS_AMOUNT,
};
use crate::modules::verification::application::ports::outgoing::{
    VerificationRepository, WalletRepository,
};

/// Bring the user's identity flag and wallet bonus in line with their
/// stored Aadhaar + face scan records.
///
/// Only ever sets the flag; a later rejection does not revoke it. The bonus
/// claim is idempotent at the repository, so re-running this is harmless.
pub(super) async fn reconcile_identity<V, U, W>(
    verifications: &V,
    users: &U,
    wallets: &W,
    user_id: UserId,
) -> Result<IdentityStatus, String>
where
    V: VerificationRepository,
    U: UserRepository,
    W: WalletRepository,
{
    let records = verifications
        .list_for_user(user_id)
        .await
        .map_err(|e| e.to_string())?;

    let status = derive_identity_status(&records);
    if !status.is_approved() {
        return Ok(status);
    }

    users
        .set_identity_verified(user_id, true)
        .await
        .map_err(|e| e.to_string())?;

    let credited = wallets
        .claim_verification_bonus(user_id, VERIFICATION_BONUS_AMOUNT)
        .await
        .map_err(|e| e.to_string())?;
    if credited {
        info!(
            user_id = %user_id,
            amount = VERIFICATION_BONUS_AMOUNT,
            "Identity verified, bonus credited"
        );
    }

    Ok(status)
}
