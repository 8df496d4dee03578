//! Unified error codes for the menu planner
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Dish errors
//! - 2xxx: Menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they survive
/// serialization unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 1,
    /// Required field missing
    RequiredField = 2,

    // ==================== 1xxx: Dish ====================
    /// Dish name is empty
    DishNameEmpty = 1001,
    /// Catalog has no dishes to draw from
    CatalogEmpty = 1002,

    // ==================== 2xxx: Menu ====================
    /// Menu not found
    MenuNotFound = 2001,
    /// Menu has no slots
    MenuEmpty = 2002,
    /// Requested menu length outside 1..=31
    MenuLengthOutOfRange = 2003,
    /// Per-category counts do not add up to the menu length
    CategoryCountMismatch = 2004,
    /// Editing session already terminated
    SessionEnded = 2005,

    // ==================== 9xxx: System ====================
    /// Storage read or write failed
    StorageError = 9001,
    /// Seed import failed
    ImportFailed = 9002,
    /// Text export failed
    ExportFailed = 9003,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field missing",

            // Dish
            ErrorCode::DishNameEmpty => "Dish name must not be empty",
            ErrorCode::CatalogEmpty => "There are no dishes to draw from",

            // Menu
            ErrorCode::MenuNotFound => "Menu not found",
            ErrorCode::MenuEmpty => "Menu has no dishes to edit",
            ErrorCode::MenuLengthOutOfRange => "Number of dishes must be between 1 and 31",
            ErrorCode::CategoryCountMismatch => {
                "Category counts do not add up to the number of dishes"
            }
            ErrorCode::SessionEnded => "Editing session has ended",

            // System
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ImportFailed => "Seed import failed",
            ErrorCode::ExportFailed => "Export failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            1 => Ok(ErrorCode::ValidationFailed),
            2 => Ok(ErrorCode::RequiredField),

            // Dish
            1001 => Ok(ErrorCode::DishNameEmpty),
            1002 => Ok(ErrorCode::CatalogEmpty),

            // Menu
            2001 => Ok(ErrorCode::MenuNotFound),
            2002 => Ok(ErrorCode::MenuEmpty),
            2003 => Ok(ErrorCode::MenuLengthOutOfRange),
            2004 => Ok(ErrorCode::CategoryCountMismatch),
            2005 => Ok(ErrorCode::SessionEnded),

            // System
            9001 => Ok(ErrorCode::StorageError),
            9002 => Ok(ErrorCode::ImportFailed),
            9003 => Ok(ErrorCode::ExportFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
