//! Error type shared by every layer of the planner

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error every operation reports to the console shell:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for logging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending values, context)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// Create a menu not found error
    pub fn menu_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::MenuNotFound, format!("Menu {} not found", id))
            .with_detail("menu_id", id)
    }

    // ==================== Classification ====================

    /// Caller supplied bad input; nothing was mutated
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed
                | ErrorCode::RequiredField
                | ErrorCode::DishNameEmpty
                | ErrorCode::CatalogEmpty
                | ErrorCode::MenuEmpty
                | ErrorCode::MenuLengthOutOfRange
                | ErrorCode::CategoryCountMismatch
                | ErrorCode::SessionEnded
        )
    }

    /// Referenced menu does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self.code, ErrorCode::MenuNotFound)
    }

    /// The storage collaborator failed to read or write
    pub fn is_storage(&self) -> bool {
        matches!(self.code, ErrorCode::StorageError)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::MenuEmpty);
        assert_eq!(err.code, ErrorCode::MenuEmpty);
        assert_eq!(err.message, "Menu has no dishes to edit");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Counts do not add up")
            .with_detail("requested", 7)
            .with_detail("selected", 5);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("requested").unwrap(), 7);
        assert_eq!(details.get("selected").unwrap(), 5);
    }

    #[test]
    fn test_classification() {
        assert!(AppError::new(ErrorCode::MenuLengthOutOfRange).is_validation());
        assert!(AppError::new(ErrorCode::CategoryCountMismatch).is_validation());
        assert!(AppError::menu_not_found(3).is_not_found());
        assert!(AppError::storage("disk gone").is_storage());
        assert!(!AppError::storage("disk gone").is_validation());
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::menu_not_found(12);
        assert_eq!(err.to_string(), "Menu 12 not found");
    }
}
