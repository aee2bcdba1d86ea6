//! Error types shared across the CropWise core.

use crate::field::FieldId;
use thiserror::Error;

/// A field-scoped validation failure.
///
/// The `Display` text is the message shown inline under the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a number")]
    NotANumber { field: FieldId },

    #[error("{field} must be between {min} and {max}{unit}")]
    OutOfRange {
        field: FieldId,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    #[error("{field} is required")]
    Required { field: FieldId },

    #[error("Unknown soil type: {0}")]
    UnknownSoilType(String),
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> FieldId {
        match self {
            ValidationError::NotANumber { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Required { field } => *field,
            ValidationError::UnknownSoilType(_) => FieldId::SoilType,
        }
    }
}

/// Errors raised by a [`crate::session::SessionStore`] backend or while
/// encoding/decoding the stored record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage is unavailable: {0}")]
    Unavailable(String),

    #[error("session storage backend error: {0}")]
    Backend(String),

    #[error("failed to encode input record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored value under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while parsing the crop catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: missing column '{column}'")]
    MissingColumn { line: u64, column: &'static str },

    #[error("line {line}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: envelope for '{column}' has low > high")]
    InvertedEnvelope { line: u64, column: &'static str },
}

/// Simulated authentication failures, surfaced as notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please choose a stronger password for better security.")]
    WeakPassword { strength: u8 },
}

/// Rejected transitions of the navigation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("a sign-in request is already in progress")]
    AlreadyAuthenticating,

    #[error("no input data has been entered yet")]
    NoInputData,

    #[error("event {event} is not valid in state {from}")]
    InvalidTransition { from: String, event: String },
}
