//! Services
//!
//! - [`DishCatalog`] - cached dish list
//! - [`seed_import`] - first-run catalog import from JSON

pub mod catalog_service;
pub mod seed_import;

pub use catalog_service::DishCatalog;
pub use seed_import::{ImportOutcome, import_if_empty};
