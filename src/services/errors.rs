use thiserror::Error;

/// Errors surfaced by panel services to their callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,
    #[error("Form error: {0}")]
    Form(String),
    #[error("Type constraint error: {0}")]
    TypeConstraint(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
