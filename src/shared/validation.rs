// src/shared/validation.rs
//
// Form-style validation that collects every failing field instead of stopping
// at the first one. Commands build a `ValidationErrors` and return it as the
// `Err` side of their constructor.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending input field
    #[schema(example = "title")]
    pub field: String,

    /// Human-readable reason
    #[schema(example = "Title must be at least 5 characters")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    /// First failure, which is what a form shows when it can only show one.
    pub fn first_message(&self) -> &str {
        self.fields
            .first()
            .map(|f| f.message.as_str())
            .unwrap_or("Invalid input")
    }

    /// Turn the collected errors into a result carrying `value` when nothing failed.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn check_min_chars(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.push(field, message);
        }
    }

    pub fn check_min_number<N: PartialOrd>(&mut self, field: &str, value: N, min: N, message: &str) {
        if value < min {
            self.push(field, message);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_message())
    }
}

impl std::error::Error for ValidationErrors {}
