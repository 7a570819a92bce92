//! Error types for registry and scheduling operations.

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations.
///
/// Every variant is recoverable at the caller; the transport collaborator
/// is responsible for mapping each kind to a user-visible status. A
/// rejected mutation leaves the store unchanged, with the single
/// documented exception of a multi-student group append failing midway.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("already a member: {0}")]
    AlreadyMember(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<String> for ServiceError {
    fn from(s: String) -> Self {
        ServiceError::InvalidArgument(s)
    }
}

impl From<&str> for ServiceError {
    fn from(s: &str) -> Self {
        ServiceError::InvalidArgument(s.to_string())
    }
}
