//! Input validation helpers
//!
//! Centralized limits and checks applied before anything reaches the store.

use shared::error::{AppError, ErrorCode};
use shared::models::MAX_MENU_LEN;

// ── Text length limits ──────────────────────────────────────────────

/// Dish names
pub const MAX_NAME_LEN: usize = 200;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        ));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate a requested menu length (one dish per day, at most a month).
pub fn validate_menu_length(length: usize) -> Result<(), AppError> {
    if !(1..=MAX_MENU_LEN).contains(&length) {
        return Err(AppError::new(ErrorCode::MenuLengthOutOfRange).with_detail("requested", length));
    }
    Ok(())
}

/// Validate that per-category counts add up to exactly the menu length.
///
/// Both a sum above and a sum below the length are rejected; the sampler
/// never fills or trims on its own.
pub fn validate_category_total(selected: usize, length: usize) -> Result<(), AppError> {
    if selected == length {
        return Ok(());
    }
    let relation = if selected > length { "exceeds" } else { "falls short of" };
    Err(AppError::with_message(
        ErrorCode::CategoryCountMismatch,
        format!(
            "The total number of dishes in the chosen categories ({selected}) {relation} the requested number ({length})"
        ),
    )
    .with_detail("selected", selected)
    .with_detail("requested", length))
}
