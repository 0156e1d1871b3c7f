/// Core error types for Quiet
use thiserror::Error;

/// Result type alias using `QuietError`
pub type Result<T> = std::result::Result<T, QuietError>;

/// Core error type for Quiet
///
/// "No track" outcomes (empty queue, unknown anchor) are not errors; they
/// surface as `None` from the queue lookups.
#[derive(Error, Debug)]
pub enum QuietError {
    /// Malformed construction input (duplicate ids, bad shuffle order, missing queue id)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QuietError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Whether this error was caused by malformed input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
