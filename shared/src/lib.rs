//! Shared types for the menu planner
//!
//! Data model (dishes, menus, categories), the weekday mapping used by
//! every view of a menu, and the unified error types.

pub mod error;
pub mod models;
pub mod weekday;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Dish, DishCategory, DishCreate, DishId, Menu, MenuCreate, MenuId};
pub use serde::{Deserialize, Serialize};
pub use weekday::{WEEKDAYS, Weekday, weekday_for};
