//! Data models
//!
//! Shared between the store, the planner logic and the console.
//! All IDs are `i64`, handed out by the store.

pub mod dish;
pub mod menu;

// Re-exports
pub use dish::*;
pub use menu::*;
