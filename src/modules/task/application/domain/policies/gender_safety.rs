use crate::auth::application::domain::entities::Gender;

/// First hour of the evening restriction window (19:00 local).
pub const RESTRICTED_FROM_HOUR: u32 = 19;
/// Restriction lifts at 06:00 local.
pub const RESTRICTED_UNTIL_HOUR: u32 = 6;

/// Whether pairing this tasker and helper is restricted at local `hour`.
///
/// True only inside the evening window and only for a male/female pairing.
/// Unknown gender on either side never restricts.
pub fn check_gender_safety_rule(
    tasker_gender: Option<Gender>,
    helper_gender: Option<Gender>,
    hour: u32,
) -> bool {
    let (Some(tasker), Some(helper)) = (tasker_gender, helper_gender) else {
        return false;
    };

    if !is_restricted_hour(hour) {
        return false;
    }

    matches!(
        (tasker, helper),
        (Gender::Male, Gender::Female) | (Gender::Female, Gender::Male)
    )
}

fn is_restricted_hour(hour: u32) -> bool {
    hour >= RESTRICTED_FROM_HOUR || hour < RESTRICTED_UNTIL_HOUR
}
