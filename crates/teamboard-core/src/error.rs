//! Centralized error types for Teamboard.

use thiserror::Error;

/// Main error type for Teamboard operations.
///
/// Aggregation and filtering never fail; these errors only surface at the
/// snapshot boundary (loading, validation) and from the `require_*` lookups.
#[derive(Error, Debug)]
pub enum TeamboardError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Duplicate {kind} id '{id}' in snapshot")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Teamboard operations.
pub type TeamboardResult<T> = Result<T, TeamboardError>;

impl TeamboardError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
