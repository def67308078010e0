//! Shared error type across custrack crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A submitted field could not be interpreted.
    MalformedInput,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Config parsed but failed validation.
    InvalidConfig,
    /// I/O or formatting failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in reports and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedInput => "MALFORMED_INPUT",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Unified error type used by core and report.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TrackerError {
    /// Map error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            TrackerError::MalformedInput(_) => ErrorCode::MalformedInput,
            TrackerError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            TrackerError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            TrackerError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<std::fmt::Error> for TrackerError {
    fn from(e: std::fmt::Error) -> Self {
        TrackerError::Internal(format!("format failed: {e}"))
    }
}
