//! Domain Errors
//!
//! Validation failures are field state, never errors. These variants cover
//! misuse of the engines: ids that do not exist and configuration that does
//! not parse.

use thiserror::Error;

/// Common result type for engine operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Unknown step: {0}")]
    UnknownStep(String),
    #[error("Comment not found: {0}")]
    CommentNotFound(u64),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
