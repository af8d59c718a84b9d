//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  press_key("?")                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Not on keypad? ─── ApiError { UNKNOWN_KEY } ───────────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Decoding error? ── CoreError ──► ApiError { INVALID_EVENT } ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The calculator state is never modified by a failed command.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! With `--json` the error is printed as a machine-readable object, the
//! same shape a web front end would receive.

use calc_core::CoreError;
use serde::Serialize;

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "UNKNOWN_KEY",
///   "message": "Unknown key: ?"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Label is not on the keypad
    UnknownKey,

    /// Event kind or payload could not be decoded
    InvalidEvent,

    /// Output could not be produced
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unknown key error.
    pub fn unknown_key(label: &str) -> Self {
        ApiError::new(ErrorCode::UnknownKey, format!("Unknown key: {}", label))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core decoding errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::new(ErrorCode::InvalidEvent, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Failed to serialize response: {}", err);
        ApiError::internal("Failed to serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = ApiError::unknown_key("?");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "UNKNOWN_KEY", "message": "Unknown key: ?" })
        );
    }

    #[test]
    fn test_core_error_maps_to_invalid_event() {
        let err: ApiError = CoreError::UnknownOperator("^".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidEvent);
        assert_eq!(err.message, "Unknown operator: ^");
        assert_eq!(err.to_string(), "[InvalidEvent] Unknown operator: ^");
    }
}
