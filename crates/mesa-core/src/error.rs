//! # Error Types
//!
//! Domain-specific error types for mesa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mesa-core errors (this file)                                          │
//! │  ├── CoreError        - Assembly rule violations and contract defects  │
//! │  └── ValidationError  - Malformed catalog input                        │
//! │                                                                         │
//! │  mesa-register errors (app)                                            │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverable vs Defect
//! `GroupLimitReached` and `MinimumNotMet` are shown to the cashier, who fixes
//! the selection and tries again. `UnknownGroup` and `UnknownOption` mean the
//! calling UI offered a toggle that is not in the catalog; see
//! [`CoreError::is_defect`].
//!
//! Every operation that returns an error leaves the selection untouched.

use thiserror::Error;

use crate::session::SessionStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Assembly errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A multi-choice group already holds `max` selections.
    ///
    /// ## User Workflow
    /// ```text
    /// Sauces (max 2): [Ketchup ✓] [Mayo ✓] [BBQ]
    ///      │
    ///      ▼
    /// Tap BBQ
    ///      │
    ///      ▼
    /// GroupLimitReached { group_name: "Sauces", max: 2 }
    ///      │
    ///      ▼
    /// UI shows: "Limit of 2 reached for Sauces"
    /// ```
    #[error("Limit of {max} reached for {group_name}")]
    GroupLimitReached {
        group_id: String,
        group_name: String,
        max: u32,
    },

    /// A group holds fewer selections than its minimum at confirmation.
    #[error("Select at least {min} from {group_name}")]
    MinimumNotMet {
        group_id: String,
        group_name: String,
        min: u32,
    },

    /// The group id is not part of the product configuration.
    #[error("Option group not found: {0}")]
    UnknownGroup(String),

    /// The item is not listed under the given group.
    #[error("Option {item_id} does not belong to group {group_id}")]
    UnknownOption { group_id: String, item_id: String },

    /// The session was already confirmed or cancelled.
    #[error("Assembly session is {status:?}, cannot perform operation")]
    SessionClosed { status: SessionStatus },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for programming-contract violations by the caller.
    ///
    /// These are never the cashier's fault and should be logged, not
    /// rendered as a prompt.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownGroup(_) | CoreError::UnknownOption { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
///
/// Raised before a session opens, when the configuration received from the
/// catalog provider is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., two groups sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::GroupLimitReached {
            group_id: "sauces".to_string(),
            group_name: "Sauces".to_string(),
            max: 2,
        };
        assert_eq!(err.to_string(), "Limit of 2 reached for Sauces");

        let err = CoreError::MinimumNotMet {
            group_id: "bread".to_string(),
            group_name: "Bread".to_string(),
            min: 1,
        };
        assert_eq!(err.to_string(), "Select at least 1 from Bread");
    }

    #[test]
    fn test_session_closed_message() {
        let err = CoreError::SessionClosed {
            status: SessionStatus::Confirmed,
        };
        assert_eq!(
            err.to_string(),
            "Assembly session is Confirmed, cannot perform operation"
        );
    }

    #[test]
    fn test_defect_classification() {
        assert!(CoreError::UnknownGroup("x".to_string()).is_defect());
        assert!(CoreError::UnknownOption {
            group_id: "g".to_string(),
            item_id: "i".to_string(),
        }
        .is_defect());
        assert!(!CoreError::MinimumNotMet {
            group_id: "g".to_string(),
            group_name: "G".to_string(),
            min: 1,
        }
        .is_defect());
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "product id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: product id is required");
    }
}
