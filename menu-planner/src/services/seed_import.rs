//! Seed Import - fills an empty catalog from a JSON file
//!
//! The file holds an array of dishes:
//!
//! ```json
//! [
//!   { "name": "Meatballs with mashed potatoes", "category": "Meat" },
//!   { "Id": 2, "Name": "Fish gratin", "Category": "Fish" }
//! ]
//! ```
//!
//! Identities in the file are ignored; the store assigns fresh ones. The
//! whole file is validated before anything is written, so a bad record
//! leaves the catalog untouched.

use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DishCategory, DishCreate, UnknownCategory};
use std::path::Path;

use crate::db::MenuStore;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(usize),
    /// The store already had dishes; nothing was read
    CatalogNotEmpty,
    FileMissing,
    /// The file parsed but held no records
    NoDishes,
}

#[derive(Debug, Deserialize)]
struct SeedDish {
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Category")]
    category: String,
}

/// Import the seed file when the store holds no dishes
pub fn import_if_empty<S: MenuStore + ?Sized>(store: &S, path: &Path) -> AppResult<ImportOutcome> {
    if !store.load_all_dishes()?.is_empty() {
        return Ok(ImportOutcome::CatalogNotEmpty);
    }

    if !path.exists() {
        tracing::warn!(path = %path.display(), "Seed file not found");
        return Ok(ImportOutcome::FileMissing);
    }

    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_message(
            ErrorCode::ImportFailed,
            format!("Could not read {}: {e}", path.display()),
        )
    })?;

    let payloads = parse_seed(&json)?;
    if payloads.is_empty() {
        tracing::warn!(path = %path.display(), "Seed file holds no dishes");
        return Ok(ImportOutcome::NoDishes);
    }

    let inserted = store.insert_dishes(payloads)?;
    tracing::info!(count = inserted.len(), path = %path.display(), "Dishes imported");
    Ok(ImportOutcome::Imported(inserted.len()))
}

/// Parse and validate seed records
pub fn parse_seed(json: &str) -> AppResult<Vec<DishCreate>> {
    let records: Vec<SeedDish> = serde_json::from_str(json).map_err(|e| {
        AppError::with_message(ErrorCode::ImportFailed, format!("Invalid seed file: {e}"))
    })?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> AppResult<DishCreate> {
            validate_required_text(&record.name, "Dish name", MAX_NAME_LEN)
                .map_err(|e| import_error(index, e.message))?;
            let category: DishCategory = record
                .category
                .parse()
                .map_err(|e: UnknownCategory| import_error(index, e.to_string()))?;
            Ok(DishCreate::new(record.name.trim(), category))
        })
        .collect()
}

fn import_error(index: usize, reason: String) -> AppError {
    AppError::with_message(
        ErrorCode::ImportFailed,
        format!("Seed record {index} is invalid: {reason}"),
    )
    .with_detail("record", index)
}
