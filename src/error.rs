//! Error Types
//!
//! Storage and registration errors. Nothing here is fatal; callers log and
//! fall back to a no-op.

/// Common result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No backing store (e.g. local storage disabled)
    Unavailable,
    Read(String),
    Write(String),
    Serialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "Storage unavailable"),
            StoreError::Read(msg) => write!(f, "Read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Write failed: {}", msg),
            StoreError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}

/// Registration form errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// Named field was empty after trimming
    MissingField(&'static str),
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationError::MissingField(field) => write!(f, "Missing field: {}", field),
        }
    }
}

impl std::error::Error for RegistrationError {}
