// src/shared/patch.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the field (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior (with #[serde(default)] on each PatchField field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Apply to a nullable stored value.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }

    /// Apply to a required stored value; `Null` leaves it untouched.
    pub fn apply_required(self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v;
        }
    }
}
