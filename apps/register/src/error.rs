//! # API Error Type
//!
//! Unified error type for register commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Mesa POS                               │
//! │                                                                         │
//! │  Front end                   Register (Rust)                            │
//! │  ─────────                   ───────────────                            │
//! │                                                                         │
//! │  toggle_option('sauces', 'bbq')                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Group full? ──── CoreError::GroupLimitReached ──┐               │  │
//! │  │         │                                        ▼               │  │
//! │  │  Bad ids? ─────── CoreError::UnknownOption ───► ApiError ───────►│  │
//! │  │         │         (logged, shown as INTERNAL)                    │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "LIMIT_REACHED", "message": "Limit of 2 reached for Sauces" }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mesa_core::CoreError;
use serde::Serialize;

/// API error returned from register commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "MINIMUM_NOT_MET",
///   "message": "Select at least 1 from Bread"
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
    /// Resource not found
    NotFound,

    /// Catalog data failed validation
    ValidationError,

    /// A multi-choice option group is full
    LimitReached,

    /// An option group is below its minimum at confirmation
    MinimumNotMet,

    /// No assembly is open, or it was already closed
    SessionError,

    /// Cart operation failed
    CartError,

    /// Programming error in the caller or the register itself
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

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Error for commands that need an open assembly.
    pub fn no_assembly() -> Self {
        ApiError::new(ErrorCode::SessionError, "No assembly in progress")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_defect() {
            // The UI offered a toggle that is not in the catalog
            tracing::error!(error = %err, "Assembly contract violation");
            return ApiError::internal("Option is not available for this product");
        }

        let message = err.to_string();
        match err {
            CoreError::GroupLimitReached { .. } => ApiError::new(ErrorCode::LimitReached, message),
            CoreError::MinimumNotMet { .. } => ApiError::new(ErrorCode::MinimumNotMet, message),
            CoreError::SessionClosed { .. } => ApiError::new(ErrorCode::SessionError, message),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::UnknownGroup(_) | CoreError::UnknownOption { .. } => {
                ApiError::internal(message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
