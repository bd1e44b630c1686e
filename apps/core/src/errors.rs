use thiserror::Error;

/// Application-level error type shared by the store, storage, and session
/// layers.
///
/// Validation failures are deliberately not in here: they are ordinary data
/// (`resume::validation::FieldError`) surfaced inline next to form fields,
/// not errors that propagate.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
