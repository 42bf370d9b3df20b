//! Error types for misuse of the validation engine
//!
//! Rule violations are never errors: they end up in the [`ErrorMap`](crate::ErrorMap).
//! Only structural problems with the host page or the configuration surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlutoError {
    /// A field without an id has no enclosing form to scope a generated id under.
    #[error("field has no enclosing form, cannot generate an id for it")]
    MissingParentForm,

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlutoError>;
