//! Utility module
//!
//! - [`logger`] - tracing setup
//! - [`validation`] - input checks shared by the planner operations

pub mod logger;
pub mod validation;
